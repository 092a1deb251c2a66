//! Request descriptors for the Bacularis v3 endpoints.
//!
//! Each builder returns the path (relative to `/api/v3`) and the query mapping
//! for one operation. A query entry exists only for arguments the caller
//! supplied, except for limit/offset bounds which always carry a value. An
//! empty string filter counts as not supplied.
//! Building a descriptor performs no I/O, which keeps the parameter rules
//! testable without an upstream server.

use std::collections::BTreeMap;

use serde::Serialize;

/// Default page size for `GET /jobs`.
pub const DEFAULT_JOB_LIMIT: u32 = 25;
/// Default page size for `GET /jobs/{id}/files`.
pub const DEFAULT_FILE_LIMIT: u32 = 100;
/// Default offset for `GET /jobs/{id}/files`.
pub const DEFAULT_FILE_OFFSET: u32 = 0;
/// Default page size for `GET /clients` and `GET /volumes`.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Int(u64),
    Text(String),
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A single GET against the API: path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    query: BTreeMap<&'static str, QueryValue>,
}

impl RequestDescriptor {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    fn param(mut self, key: &'static str, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key, value.into());
        self
    }

    fn filter(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Path relative to the API root, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &BTreeMap<&'static str, QueryValue> {
        &self.query
    }
}

/// Filters for listing jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListQuery {
    pub limit: u32,
    pub name: Option<String>,
    /// Bacula job status code (T=OK, E=Error, R=Running, A=Canceled, f=Failed, ...).
    pub jobstatus: Option<String>,
    pub client: Option<String>,
    /// Backup level code (F=Full, I=Incremental, D=Differential).
    pub level: Option<String>,
}

impl Default for JobListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_JOB_LIMIT,
            name: None,
            jobstatus: None,
            client: None,
            level: None,
        }
    }
}

/// Pagination and search for a job's file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilesQuery {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
}

impl Default for JobFilesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FILE_LIMIT,
            offset: DEFAULT_FILE_OFFSET,
            search: None,
        }
    }
}

// ── Jobs ──

pub fn list_jobs(query: &JobListQuery) -> RequestDescriptor {
    RequestDescriptor::new("/jobs")
        .param("limit", query.limit)
        .filter("name", query.name.as_deref())
        .filter("jobstatus", query.jobstatus.as_deref())
        .filter("client", query.client.as_deref())
        .filter("level", query.level.as_deref())
}

pub fn get_job(jobid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/jobs/{jobid}"))
}

pub fn list_job_files(jobid: u64, query: &JobFilesQuery) -> RequestDescriptor {
    RequestDescriptor::new(format!("/jobs/{jobid}/files"))
        .param("limit", query.limit)
        .param("offset", query.offset)
        .filter("search", query.search.as_deref())
}

pub fn job_totals() -> RequestDescriptor {
    RequestDescriptor::new("/jobs/totals")
}

pub fn job_log(jobid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/jobs/{jobid}/show"))
}

// ── Clients ──

pub fn list_clients(limit: u32) -> RequestDescriptor {
    RequestDescriptor::new("/clients").param("limit", limit)
}

pub fn get_client(clientid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/clients/{clientid}"))
}

pub fn client_jobs(clientid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/clients/{clientid}/jobs"))
}

// ── Volumes & Pools ──

pub fn list_volumes(limit: u32) -> RequestDescriptor {
    RequestDescriptor::new("/volumes").param("limit", limit)
}

pub fn list_pools() -> RequestDescriptor {
    RequestDescriptor::new("/pools")
}

pub fn pool_volumes(poolid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/pools/{poolid}/volumes"))
}

// ── Storage ──

pub fn list_storages() -> RequestDescriptor {
    RequestDescriptor::new("/storages")
}

pub fn storage_status(storageid: u64) -> RequestDescriptor {
    RequestDescriptor::new(format!("/storages/{storageid}/status"))
}
