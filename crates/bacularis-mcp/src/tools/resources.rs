//! Client, volume, pool and storage daemon tools.

use bacularis_client::client::render;
use bacularis_client::BacularisClient;

use super::params::{ClientIdParams, ListLimitParams, PoolIdParams, StorageIdParams};

// ── Clients ──

pub async fn get_clients(client: &BacularisClient, params: ListLimitParams) -> String {
    render(client.list_clients(params.limit()).await)
}

pub async fn get_client(client: &BacularisClient, params: ClientIdParams) -> String {
    render(client.get_client(params.clientid).await)
}

pub async fn get_client_jobs(client: &BacularisClient, params: ClientIdParams) -> String {
    render(client.client_jobs(params.clientid).await)
}

// ── Volumes & Pools ──

pub async fn get_volumes(client: &BacularisClient, params: ListLimitParams) -> String {
    render(client.list_volumes(params.limit()).await)
}

pub async fn get_pools(client: &BacularisClient) -> String {
    render(client.list_pools().await)
}

pub async fn get_pool_volumes(client: &BacularisClient, params: PoolIdParams) -> String {
    render(client.pool_volumes(params.poolid).await)
}

// ── Storage ──

pub async fn get_storages(client: &BacularisClient) -> String {
    render(client.list_storages().await)
}

pub async fn get_storage_status(client: &BacularisClient, params: StorageIdParams) -> String {
    render(client.storage_status(params.storageid).await)
}
