//! # Bacularis Client
//!
//! Read-only client for the Bacularis REST API (`/api/v3`), covering jobs,
//! clients, volumes, pools and storage daemons.
//!
//! Every call is a single GET with its own short-lived HTTP client. Failures are
//! folded into a closed [`ClientError`] set that flattens to a uniform
//! `{"error": ..., "detail": ...}` JSON object, so callers that speak text
//! (such as MCP tools) never have to surface a raw error.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::BacularisClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoints::{JobFilesQuery, JobListQuery, QueryValue, RequestDescriptor};
pub use error::{ClientError, ClientResult, ErrorEnvelope};
