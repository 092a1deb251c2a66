//! MCP ServerHandler implementation for Bacularis.
//!
//! Exposes read-only Bacula/Bareos backup inspection through the Bacularis
//! REST API:
//!
//! **Jobs**
//! - `get_jobs` - List backup jobs with optional filters
//! - `get_job` - Get details for a specific job
//! - `get_job_files` - List files and directories backed up in a job
//! - `get_job_totals` - Total bytes and files across all jobs
//! - `get_job_log` - Show bconsole output for a job
//!
//! **Clients**
//! - `get_clients` - List backup clients (file daemons)
//! - `get_client` - Get details for a specific client
//! - `get_client_jobs` - List all jobs for a client
//!
//! **Volumes & Pools**
//! - `get_volumes` - List backup volumes
//! - `get_pools` - List backup pools
//! - `get_pool_volumes` - List volumes in a pool
//!
//! **Storage**
//! - `get_storages` - List storage daemons
//! - `get_storage_status` - Get status of a storage daemon

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use bacularis_client::BacularisClient;

use crate::tools::*;

const INSTRUCTIONS: &str = "Bacularis gives read-only access to a Bacula/Bareos backup system. \
    Every tool returns the upstream JSON as text; failures come back as \
    {\"error\": ..., \"detail\": ...}.\n\
    Jobs: get_jobs (filter by name, jobstatus, client, level) → get_job → get_job_log / get_job_files; \
    get_job_totals for overall bytes and files.\n\
    Job status codes: T=OK, E=Error, R=Running, A=Canceled, f=Failed. Levels: F=Full, I=Incremental, D=Differential.\n\
    Clients: get_clients → get_client → get_client_jobs.\n\
    Media: get_pools → get_pool_volumes; get_volumes for every volume.\n\
    Storage: get_storages → get_storage_status.\n\
    When investigating failures: get_jobs with jobstatus=E or f, then get_job_log for the job's output.";

/// Bacularis MCP server handler.
///
/// Cheap to clone: the API client is shared behind an `Arc` and holds only
/// immutable configuration.
#[derive(Debug, Clone)]
pub struct BacularisMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<BacularisClient>,
}

impl BacularisMcpServer {
    pub fn new(client: BacularisClient) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    pub fn with_shared_client(client: Arc<BacularisClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    pub fn client(&self) -> &BacularisClient {
        &self.client
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BacularisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bacularis-mcp".to_string(),
                title: Some("Bacularis MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Read-only access to Bacula/Bareos backup management via the Bacularis REST API"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

#[tool_router(router = tool_router)]
impl BacularisMcpServer {
    // ── Jobs ──

    #[tool(
        name = "get_jobs",
        description = "List backup jobs with optional filters. limit: max jobs to return (default 25); name: job name; jobstatus: T=OK, E=Error, R=Running, A=Canceled, f=Failed, etc.; client: client name; level: F=Full, I=Incremental, D=Differential."
    )]
    pub async fn get_jobs(&self, Parameters(params): Parameters<GetJobsParams>) -> String {
        jobs::get_jobs(&self.client, params).await
    }

    #[tool(
        name = "get_job",
        description = "Get details for a specific job by its JobId."
    )]
    pub async fn get_job(&self, Parameters(params): Parameters<JobIdParams>) -> String {
        jobs::get_job(&self.client, params).await
    }

    #[tool(
        name = "get_job_files",
        description = "List files and directories backed up in a specific job. Supports pagination with limit (default 100) and offset (default 0), and an optional search pattern."
    )]
    pub async fn get_job_files(
        &self,
        Parameters(params): Parameters<GetJobFilesParams>,
    ) -> String {
        jobs::get_job_files(&self.client, params).await
    }

    #[tool(
        name = "get_job_totals",
        description = "Get total bytes and files across all backup jobs."
    )]
    pub async fn get_job_totals(&self) -> String {
        jobs::get_job_totals(&self.client).await
    }

    #[tool(
        name = "get_job_log",
        description = "Show bconsole output / details for a specific job."
    )]
    pub async fn get_job_log(&self, Parameters(params): Parameters<JobIdParams>) -> String {
        jobs::get_job_log(&self.client, params).await
    }

    // ── Clients ──

    #[tool(
        name = "get_clients",
        description = "List all backup clients (file daemons). limit: max clients to return (default 100)."
    )]
    pub async fn get_clients(&self, Parameters(params): Parameters<ListLimitParams>) -> String {
        resources::get_clients(&self.client, params).await
    }

    #[tool(
        name = "get_client",
        description = "Get details for a specific backup client."
    )]
    pub async fn get_client(&self, Parameters(params): Parameters<ClientIdParams>) -> String {
        resources::get_client(&self.client, params).await
    }

    #[tool(
        name = "get_client_jobs",
        description = "List all jobs for a specific client."
    )]
    pub async fn get_client_jobs(
        &self,
        Parameters(params): Parameters<ClientIdParams>,
    ) -> String {
        resources::get_client_jobs(&self.client, params).await
    }

    // ── Volumes & Pools ──

    #[tool(
        name = "get_volumes",
        description = "List all backup volumes (tapes/disk volumes). limit: max volumes to return (default 100)."
    )]
    pub async fn get_volumes(&self, Parameters(params): Parameters<ListLimitParams>) -> String {
        resources::get_volumes(&self.client, params).await
    }

    #[tool(name = "get_pools", description = "List all backup pools.")]
    pub async fn get_pools(&self) -> String {
        resources::get_pools(&self.client).await
    }

    #[tool(
        name = "get_pool_volumes",
        description = "List all volumes in a specific pool."
    )]
    pub async fn get_pool_volumes(&self, Parameters(params): Parameters<PoolIdParams>) -> String {
        resources::get_pool_volumes(&self.client, params).await
    }

    // ── Storage ──

    #[tool(name = "get_storages", description = "List all storage daemons.")]
    pub async fn get_storages(&self) -> String {
        resources::get_storages(&self.client).await
    }

    #[tool(
        name = "get_storage_status",
        description = "Get status of a specific storage daemon."
    )]
    pub async fn get_storage_status(
        &self,
        Parameters(params): Parameters<StorageIdParams>,
    ) -> String {
        resources::get_storage_status(&self.client, params).await
    }
}
