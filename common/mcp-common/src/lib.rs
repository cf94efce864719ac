//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: `serve_stdio!` macro and [`init_tracing`]
//! - **Results**: [`json_success`] for JSON `CallToolResult` responses
//! - **Errors**: [`ToolError`] / [`ErrorKind`] structured tool failures
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, json_success};
//!
//! serve_stdio!(MyServer, "my_mcp");
//!
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     json_success(&report)
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{parse_params, EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, ErrorKind, IntoMcpError, McpResult, ToolError};
pub use init::{init_tracing, LogFormat};
pub use result::{first_json, json_success, with_status, STATUS_SUCCESS};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
