//! Atlas MCP Library
//!
//! Disk usage, large file discovery, cleanup suggestions and host health
//! checks exposed as MCP tools.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use atlas_mcp::{AtlasMcpServer, EmbeddableMcp};
//!
//! let server = AtlasMcpServer::new();
//! let result = server.call_tool("system_health_check", serde_json::json!({})).await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `atlas-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "atlas": { "command": "./atlas-mcp" } } }
//! ```

pub mod cleanup;
pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod metrics;
pub mod params;
pub mod scanner;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::AtlasMcpServer;

pub use config::Config;
pub use error::{AtlasError, AtlasResult};
pub use metrics::{MetricsSource, SysinfoSource};
pub use params::*;

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
