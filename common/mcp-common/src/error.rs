//! Error handling utilities for MCP servers
//!
//! Tool failures are reported as structured errors: every error carries a
//! machine-readable [`ErrorKind`] next to its human-readable message, both
//! in the `data` payload of the MCP error.

use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Failure categories reported to MCP clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad or missing parameter
    InvalidInput,
    /// A required path does not exist
    NotFound,
    /// The server was refused access to a resource
    AccessDenied,
    /// Anything unexpected caught at the tool boundary
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AccessDenied => "access_denied",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error body attached to every tool failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Recover the structured body from an MCP error produced by this module
    pub fn from_mcp(err: &McpError) -> Option<Self> {
        err.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let data = serde_json::to_value(&err).ok();
        let message = format!("{}: {}", err.kind, err.message);
        match err.kind {
            ErrorKind::InvalidInput | ErrorKind::NotFound => McpError::invalid_params(message, data),
            ErrorKind::AccessDenied => McpError::invalid_request(message, data),
            ErrorKind::Internal => McpError::internal_error(message, data),
        }
    }
}

/// Trait for converting errors into MCP-compatible errors
///
/// Implement this for server error types so tool handlers can finish with
/// `.map_err(IntoMcpError::into_mcp_error)`.
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for ToolError {
    fn into_mcp_error(self) -> McpError {
        self.into()
    }
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    ToolError::new(ErrorKind::Internal, message).into()
}

/// Create an invalid input error with a message
///
/// Use this when the tool receives invalid parameters.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    ToolError::new(ErrorKind::InvalidInput, message).into()
}
