//! Bacularis MCP Server
//!
//! Model Context Protocol server exposing read-only Bacula/Bareos backup
//! inspection (jobs, clients, volumes, pools, storage daemons) through the
//! Bacularis REST API.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use bacularis_client::BacularisClient;
use bacularis_mcp::cli::Cli;
use bacularis_mcp::server::BacularisMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bacularis_mcp=info".parse()?)
                .add_directive("bacularis_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.client_config();
    config.validate()?;
    if config.accept_invalid_certs {
        tracing::warn!(
            base_url = %config.base_url,
            "TLS certificate verification is disabled (set BACULARIS_INSECURE_TLS=false to enable)"
        );
    }

    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "bacularis-mcp starting (stdio transport)"
    );

    let server = BacularisMcpServer::new(BacularisClient::new(config));
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
