//! In-process stand-in for the Bacularis API.
//!
//! Binds to a random local port and serves a handful of fixed routes under
//! `/api/v3`. Unknown paths echo the request back so tests can assert on the
//! path, query and credentials the client sent.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// How long `/api/v3/jobs/408` stalls before answering.
pub const SLOW_ROUTE_DELAY: Duration = Duration::from_secs(5);

/// Start the stub and return its base URL (without `/api/v3`).
pub async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("Stub server failed");
    });

    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{addr}")
}

fn router() -> Router {
    Router::new()
        .route("/api/v3/jobs/totals", get(|| async { Json(json!({"jobs": []})) }))
        .route(
            "/api/v3/jobs/404",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route(
            "/api/v3/jobs/500",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "e".repeat(800)) }),
        )
        .route(
            "/api/v3/jobs/999",
            get(|| async { (StatusCode::OK, "<html>not json</html>") }),
        )
        .route(
            "/api/v3/jobs/301",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/api/v3/jobs/1")]) }),
        )
        .route(
            "/api/v3/jobs/408",
            get(|| async {
                tokio::time::sleep(SLOW_ROUTE_DELAY).await;
                Json(json!({"jobs": []}))
            }),
        )
        .route(
            "/api/v3/pools",
            get(|| async {
                // Keys deliberately out of alphabetical order
                (
                    StatusCode::OK,
                    r#"{"output":[{"poolid":1,"name":"Full"}],"error":0}"#,
                )
            }),
        )
        .fallback(echo)
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
