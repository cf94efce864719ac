//! Error types for the Atlas tools

use mcp_common::{ErrorKind, IntoMcpError, McpError, ToolError};
use thiserror::Error;

use crate::metrics::MetricsError;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Metrics unavailable: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AtlasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtlasError::InvalidInput(_) => ErrorKind::InvalidInput,
            AtlasError::NotFound(_) => ErrorKind::NotFound,
            AtlasError::Metrics(_) | AtlasError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<tokio::task::JoinError> for AtlasError {
    fn from(err: tokio::task::JoinError) -> Self {
        AtlasError::Internal(format!("scan task failed: {}", err))
    }
}

impl IntoMcpError for AtlasError {
    fn into_mcp_error(self) -> McpError {
        ToolError::new(self.kind(), self.to_string()).into()
    }
}

pub type AtlasResult<T> = Result<T, AtlasError>;
