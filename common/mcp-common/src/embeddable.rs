//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without
//! spawning it as a subprocess and talking stdio.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use atlas_mcp::AtlasMcpServer;
//!
//! let server = AtlasMcpServer::new();
//! let result = server.call_tool("get_system_stats", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters passed to the tool
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// MCP protocol error returned by the tool
    #[error("mcp error: {}", .0.message)]
    McpError(rmcp::ErrorData),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err)
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Deserialize tool parameters, treating `null` as an empty object
///
/// Tools whose parameters are all optional can then be called with either
/// `{}` or `null`.
pub fn parse_params<T: DeserializeOwned>(params: Value) -> EmbeddableResult<T> {
    let params = match params {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(params).map_err(|e| EmbeddableError::InvalidParams(e.to_string()))
}

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so tools can be called from
/// multiple tasks. Servers built on rmcp's `ToolRouter<Self>` delegate
/// `list_tools` to the router and dispatch `call_tool` by name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Returns the server name, matching the name used in MCP configuration
    fn server_name(&self) -> &str;

    /// Returns a list of all available tools
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with the given JSON parameters
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Returns an optional description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Returns the server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
