//! # Client Error Types
//!
//! Closed error set for API calls and its flattening into the
//! `{"error": ..., "detail": ...}` shape returned to callers.

use serde::Serialize;
use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Maximum number of characters of an error response body kept in `detail`.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Every way a single API call can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Upstream answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16, body: String },

    /// Upstream host could not be reached (DNS failure, refused, unreachable).
    #[error("Connection failed: cannot reach {base_url}")]
    Connection { base_url: String },

    /// Anything else: timeouts, malformed JSON, client construction.
    #[error("{kind}: {message}")]
    Unexpected { kind: &'static str, message: String },
}

/// Uniform error payload handed back to tool callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub detail: String,
}

impl ClientError {
    /// Create an HTTP status error, truncating the body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            body: truncate_chars(body, MAX_ERROR_BODY_CHARS),
        }
    }

    pub fn connection(base_url: impl Into<String>) -> Self {
        Self::Connection {
            base_url: base_url.into(),
        }
    }

    pub fn unexpected(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Unexpected {
            kind,
            message: message.into(),
        }
    }

    /// Classify a transport-level reqwest failure.
    ///
    /// Timeouts are checked before connect errors so a connect timeout reports
    /// as `Timeout` rather than as an unreachable host.
    pub fn from_transport(err: &reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            Self::unexpected("Timeout", err.to_string())
        } else if err.is_connect() {
            Self::connection(base_url)
        } else if err.is_builder() {
            Self::unexpected("ClientBuild", err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::unexpected("Body", err.to_string())
        } else {
            Self::unexpected("RequestError", err.to_string())
        }
    }

    /// Flatten into the `{error, detail}` envelope.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Http { status, body } => ErrorEnvelope {
                error: format!("HTTP {status}"),
                detail: body.clone(),
            },
            Self::Connection { base_url } => ErrorEnvelope {
                error: "Connection failed".to_string(),
                detail: format!("Cannot reach {base_url}"),
            },
            Self::Unexpected { kind, message } => ErrorEnvelope {
                error: (*kind).to_string(),
                detail: message.clone(),
            },
        }
    }

    /// Flatten into a compact JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_envelope()).unwrap_or_else(|_| {
            r#"{"error":"SerializationError","detail":"failed to encode error"}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected("InvalidJson", err.to_string())
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
