//! Parameter structs for all MCP tools.

use schemars::JsonSchema;
use serde::Deserialize;

use bacularis_client::endpoints::{
    DEFAULT_FILE_LIMIT, DEFAULT_FILE_OFFSET, DEFAULT_JOB_LIMIT, DEFAULT_LIST_LIMIT,
};
use bacularis_client::{JobFilesQuery, JobListQuery};

// ── get_jobs ──

/// Parameters for the `get_jobs` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetJobsParams {
    /// Max number of jobs to return.
    #[schemars(description = "Max number of jobs to return (default 25)")]
    pub limit: Option<u32>,
    #[schemars(description = "Filter by job name")]
    pub name: Option<String>,
    #[schemars(
        description = "Filter by status (T=OK, E=Error, R=Running, A=Canceled, f=Failed, etc.)"
    )]
    pub jobstatus: Option<String>,
    #[schemars(description = "Filter by client name")]
    pub client: Option<String>,
    #[schemars(description = "Filter by backup level (F=Full, I=Incremental, D=Differential)")]
    pub level: Option<String>,
}

impl From<GetJobsParams> for JobListQuery {
    fn from(p: GetJobsParams) -> Self {
        JobListQuery {
            limit: p.limit.unwrap_or(DEFAULT_JOB_LIMIT),
            name: p.name,
            jobstatus: p.jobstatus,
            client: p.client,
            level: p.level,
        }
    }
}

// ── get_job / get_job_log ──

/// Parameters for tools addressing a single job.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct JobIdParams {
    #[schemars(description = "The Bacula job ID")]
    pub jobid: u64,
}

// ── get_job_files ──

/// Parameters for the `get_job_files` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetJobFilesParams {
    #[schemars(description = "The Bacula job ID")]
    pub jobid: u64,
    #[schemars(description = "Max files to return (default 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Offset for pagination (default 0)")]
    pub offset: Option<u32>,
    #[schemars(description = "Search pattern to filter files")]
    pub search: Option<String>,
}

impl GetJobFilesParams {
    /// Split into the job id and the file listing query.
    pub fn into_parts(self) -> (u64, JobFilesQuery) {
        let query = JobFilesQuery {
            limit: self.limit.unwrap_or(DEFAULT_FILE_LIMIT),
            offset: self.offset.unwrap_or(DEFAULT_FILE_OFFSET),
            search: self.search,
        };
        (self.jobid, query)
    }
}

// ── get_clients / get_volumes ──

/// Page size for the flat listing tools.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListLimitParams {
    #[schemars(description = "Max items to return (default 100)")]
    pub limit: Option<u32>,
}

impl ListLimitParams {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

// ── get_client / get_client_jobs ──

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClientIdParams {
    #[schemars(description = "The Bacula client ID")]
    pub clientid: u64,
}

// ── get_pool_volumes ──

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PoolIdParams {
    #[schemars(description = "The Bacula pool ID")]
    pub poolid: u64,
}

// ── get_storage_status ──

#[derive(Debug, Deserialize, JsonSchema)]
pub struct StorageIdParams {
    #[schemars(description = "The Bacula storage ID")]
    pub storageid: u64,
}
