//! HTTP execution against the Bacularis API.
//!
//! Each call builds its own `reqwest::Client`, performs exactly one GET and
//! drops the client before returning, whatever the outcome. No retries.

use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoints::{self, JobFilesQuery, JobListQuery, RequestDescriptor};
use crate::error::{ClientError, ClientResult};

/// Read-only Bacularis API client.
#[derive(Debug)]
pub struct BacularisClient {
    config: ClientConfig,
}

impl BacularisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue the GET described by `request` and parse the body as JSON.
    pub async fn fetch(&self, request: &RequestDescriptor) -> ClientResult<Value> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .timeout(self.config.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| ClientError::unexpected("ClientBuild", e.to_string()))?;

        let url = format!("{}{}", self.config.api_root(), request.path());
        debug!(path = request.path(), query = ?request.query(), "GET");

        let result = self.execute(&http, &url, request).await;
        if let Err(e) = &result {
            warn!(path = request.path(), error = %e, "Bacularis API call failed");
        }
        result
    }

    async fn execute(
        &self,
        http: &reqwest::Client,
        url: &str,
        request: &RequestDescriptor,
    ) -> ClientResult<Value> {
        let response = http
            .get(url)
            .query(request.query())
            .basic_auth(&self.config.username, Some(self.config.password()))
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e, &self.config.base_url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::from_transport(&e, &self.config.base_url))?;

        if !status.is_success() {
            return Err(ClientError::http(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // ── Jobs ──

    pub async fn list_jobs(&self, query: &JobListQuery) -> ClientResult<Value> {
        self.fetch(&endpoints::list_jobs(query)).await
    }

    pub async fn get_job(&self, jobid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::get_job(jobid)).await
    }

    pub async fn list_job_files(&self, jobid: u64, query: &JobFilesQuery) -> ClientResult<Value> {
        self.fetch(&endpoints::list_job_files(jobid, query)).await
    }

    pub async fn job_totals(&self) -> ClientResult<Value> {
        self.fetch(&endpoints::job_totals()).await
    }

    pub async fn job_log(&self, jobid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::job_log(jobid)).await
    }

    // ── Clients ──

    pub async fn list_clients(&self, limit: u32) -> ClientResult<Value> {
        self.fetch(&endpoints::list_clients(limit)).await
    }

    pub async fn get_client(&self, clientid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::get_client(clientid)).await
    }

    pub async fn client_jobs(&self, clientid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::client_jobs(clientid)).await
    }

    // ── Volumes & Pools ──

    pub async fn list_volumes(&self, limit: u32) -> ClientResult<Value> {
        self.fetch(&endpoints::list_volumes(limit)).await
    }

    pub async fn list_pools(&self) -> ClientResult<Value> {
        self.fetch(&endpoints::list_pools()).await
    }

    pub async fn pool_volumes(&self, poolid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::pool_volumes(poolid)).await
    }

    // ── Storage ──

    pub async fn list_storages(&self) -> ClientResult<Value> {
        self.fetch(&endpoints::list_storages()).await
    }

    pub async fn storage_status(&self, storageid: u64) -> ClientResult<Value> {
        self.fetch(&endpoints::storage_status(storageid)).await
    }
}

/// Render a call outcome as text: indented JSON on success, the error
/// envelope otherwise.
pub fn render(result: ClientResult<Value>) -> String {
    match result {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|e| ClientError::from(e).to_json()),
        Err(e) => e.to_json(),
    }
}
