//! MCP Server implementation for the Atlas tools
//!
//! Tools delegate to the handlers module; this layer only routes calls and
//! turns handler results into MCP responses.

use std::sync::Arc;

use mcp_common::{
    async_trait, json_success, parse_params, EmbeddableError, EmbeddableMcp, EmbeddableResult,
    IntoMcpError, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::AtlasResult;
use crate::handlers;
use crate::metrics::{MetricsSource, SysinfoSource};
use crate::params::*;

const INSTRUCTIONS: &str = "Atlas infrastructure MCP server - provides tools for system \
     statistics, disk usage analysis, large file discovery, cleanup recommendations \
     and an overall health check. Paths default to the configured scan root.";

/// The Atlas MCP Server
#[derive(Clone)]
pub struct AtlasMcpServer {
    config: Arc<Config>,
    metrics: Arc<dyn MetricsSource>,
    tool_router: ToolRouter<Self>,
}

fn respond<T: Serialize>(result: AtlasResult<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(data) => json_success(&data),
        Err(e) => {
            tracing::warn!(kind = %e.kind(), "Tool failed: {}", e);
            Err(e.into_mcp_error())
        }
    }
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl AtlasMcpServer {
    /// Create a server with config from the standard locations and live
    /// host metrics
    pub fn new() -> Self {
        Self::with_parts(Config::load(), Arc::new(SysinfoSource::new()))
    }

    /// Create a server with explicit config and metrics source
    pub fn with_parts(config: Config, metrics: Arc<dyn MetricsSource>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get current CPU usage, memory usage and total memory, load average, network and disk I/O counters, a quick health status and a timestamp. Unavailable metrics are returned as null."
    )]
    async fn get_system_stats(&self) -> Result<CallToolResult, McpError> {
        respond(handlers::get_system_stats(self.metrics.as_ref(), &self.config).await)
    }

    #[tool(
        description = "Analyze space usage of the volume holding a path: total, used and free GB, usage percent and a health category (ok/warning/critical)."
    )]
    async fn analyze_disk_usage(
        &self,
        Parameters(params): Parameters<AnalyzeDiskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::analyze_disk_usage(self.metrics.as_ref(), &self.config, params).await)
    }

    #[tool(
        description = "Find files at or above a size threshold under a directory, largest first. Unreadable entries are skipped and counted; slow scans return partial results with truncated=true."
    )]
    async fn find_large_files(
        &self,
        Parameters(params): Parameters<FindLargeFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::find_large_files(&self.config, params).await)
    }

    #[tool(
        description = "Suggest cleanup opportunities under a directory: temporary directories, large log files and (with deep_analysis) large files, with estimated savings."
    )]
    async fn cleanup_recommendations(
        &self,
        Parameters(params): Parameters<CleanupParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            handlers::cleanup_recommendations(self.metrics.as_ref(), &self.config, params).await,
        )
    }

    #[tool(
        description = "Combined health check: system statistics, per-volume disk health, a 0-100 health score, issues and recommendations."
    )]
    async fn system_health_check(&self) -> Result<CallToolResult, McpError> {
        respond(handlers::system_health_check(self.metrics.as_ref(), &self.config).await)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for AtlasMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for AtlasMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for AtlasMcpServer {
    fn server_name(&self) -> &str {
        "atlas"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_system_stats" => self.get_system_stats().await.map_err(Into::into),

            "analyze_disk_usage" => {
                let params: AnalyzeDiskParams = parse_params(params)?;
                self.analyze_disk_usage(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "find_large_files" => {
                let params: FindLargeFilesParams = parse_params(params)?;
                self.find_large_files(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "cleanup_recommendations" => {
                let params: CleanupParams = parse_params(params)?;
                self.cleanup_recommendations(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "system_health_check" => self.system_health_check().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
