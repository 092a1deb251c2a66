//! Bacularis MCP Server library.
//!
//! Provides the [`server::BacularisMcpServer`] MCP server handler, tool parameter
//! types and the binary's CLI configuration. Used by the `bacularis-mcp` binary
//! and available for integration testing.

pub mod cli;
pub mod server;
pub mod tools;
