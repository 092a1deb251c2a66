//! Job tools: listing, details, file lists, totals and logs.

use bacularis_client::client::render;
use bacularis_client::BacularisClient;

use super::params::{GetJobFilesParams, GetJobsParams, JobIdParams};

pub async fn get_jobs(client: &BacularisClient, params: GetJobsParams) -> String {
    render(client.list_jobs(&params.into()).await)
}

pub async fn get_job(client: &BacularisClient, params: JobIdParams) -> String {
    render(client.get_job(params.jobid).await)
}

pub async fn get_job_files(client: &BacularisClient, params: GetJobFilesParams) -> String {
    let (jobid, query) = params.into_parts();
    render(client.list_job_files(jobid, &query).await)
}

pub async fn get_job_totals(client: &BacularisClient) -> String {
    render(client.job_totals().await)
}

pub async fn get_job_log(client: &BacularisClient, params: JobIdParams) -> String {
    render(client.job_log(params.jobid).await)
}
