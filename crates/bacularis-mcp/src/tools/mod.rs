//! MCP tool parameter types and implementations.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! Tool functions take the shared client and return JSON text, never an error.

pub mod jobs;
pub mod params;
pub mod resources;

pub use params::*;
