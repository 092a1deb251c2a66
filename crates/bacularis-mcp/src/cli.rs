//! Command-line and environment configuration for the `bacularis-mcp` binary.
//!
//! Every flag falls back to an environment variable, so the server can be
//! configured entirely from an MCP host's `env` block or a `.env` file.

use std::fmt;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::Parser;

use bacularis_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use bacularis_client::ClientConfig;

/// Read-only MCP server for the Bacularis backup API.
#[derive(Parser)]
#[command(name = "bacularis-mcp", version, about)]
pub struct Cli {
    /// Bacularis API host, without the /api/v3 suffix
    #[arg(long, env = "BACULARIS_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Basic auth username
    #[arg(long, env = "BACULARIS_USER", default_value = "")]
    pub user: String,

    /// Basic auth password
    #[arg(long, env = "BACULARIS_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Skip TLS certificate verification (accepts true/false, yes/no, 1/0)
    #[arg(
        long,
        env = "BACULARIS_INSECURE_TLS",
        default_value = "true",
        value_parser = BoolishValueParser::new(),
        action = clap::ArgAction::Set
    )]
    pub insecure_tls: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "BACULARIS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("insecure_tls", &self.insecure_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Cli {
    /// Build the API client configuration from the parsed flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url, &self.user, &self.password)
            .with_accept_invalid_certs(self.insecure_tls)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
