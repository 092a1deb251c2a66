//! Test harness: an MCP server/client pair over an in-memory duplex transport,
//! backed by an in-process stand-in for the Bacularis API.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anyhow::Result;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ClientHandler, ServiceExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bacularis_client::{BacularisClient, ClientConfig};
use bacularis_mcp::server::BacularisMcpServer;

#[derive(Debug, Clone, Default)]
pub struct TestClient;

impl ClientHandler for TestClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

/// Start the stub upstream and return its base URL (without `/api/v3`).
///
/// `/api/v3/jobs` returns an empty job list, `/api/v3/jobs/404` returns a
/// plain `not found`; every other path echoes the request back.
pub async fn spawn_upstream() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let router = Router::new()
        .route("/api/v3/jobs", get(|| async { Json(json!({"jobs": []})) }))
        .route(
            "/api/v3/jobs/404",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .fallback(echo);

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(format!("http://{addr}"))
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

async fn echo(
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
) -> Json<Value> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Json(json!({
        "path": uri.path(),
        "query": query,
        "authorization": authorization,
    }))
}

/// MCP server/client pair talking to `base_url`.
pub struct McpTestHarness {
    pub mcp_client: RunningService<RoleClient, TestClient>,
    server_handle: JoinHandle<Result<()>>,
}

impl McpTestHarness {
    pub async fn setup(base_url: &str) -> Result<Self> {
        let config = ClientConfig::new(base_url, "admin", "secret");
        let server = BacularisMcpServer::new(BacularisClient::new(config));
        let (server_transport, client_transport) = tokio::io::duplex(65536);

        let server_handle = tokio::spawn(async move {
            let service = server.serve(server_transport).await?;
            service.waiting().await?;
            anyhow::Ok(())
        });

        let mcp_client = TestClient.serve(client_transport).await?;

        Ok(Self {
            mcp_client,
            server_handle,
        })
    }

    /// Call an MCP tool and return its text payload.
    pub async fn call_tool_text(&self, name: &str, args: Value) -> Result<String> {
        let arguments = match args {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => anyhow::bail!("tool arguments must be an object, got {other}"),
        };

        let result = self
            .mcp_client
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_string().into(),
                arguments,
                task: None,
            })
            .await?;

        result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .ok_or_else(|| anyhow::anyhow!("No text content in tool response"))
    }

    /// Call an MCP tool and parse the text response as JSON.
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<Value> {
        let text = self.call_tool_text(name, args).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn teardown(self) -> Result<()> {
        self.mcp_client.cancel().await?;
        self.server_handle.await??;
        Ok(())
    }
}
