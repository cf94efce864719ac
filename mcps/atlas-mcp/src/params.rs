//! Parameter types for Atlas MCP tools
//!
//! Every parameter is optional; omitted values fall back to the server
//! configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeDiskParams {
    #[schemars(description = "Path whose volume to analyze (default: configured scan root)")]
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct FindLargeFilesParams {
    #[schemars(description = "Directory to search (default: configured scan root)")]
    pub path: Option<String>,

    #[schemars(description = "Minimum file size in bytes to report (default: 104857600)")]
    pub threshold_bytes: Option<u64>,

    #[schemars(description = "Maximum number of files to return, largest first (default: 100)")]
    pub max_results: Option<usize>,

    #[schemars(
        description = "Stop scanning after this many seconds and return partial results (default: 30, 0 disables)"
    )]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CleanupParams {
    #[schemars(description = "Directory to analyze for cleanup opportunities (default: configured scan root)")]
    pub path: Option<String>,

    #[schemars(
        description = "Walk the whole tree and include large files for review (slower, default: false)"
    )]
    pub deep_analysis: Option<bool>,

    #[schemars(
        description = "Stop scanning after this many seconds and return partial results (default: 30, 0 disables)"
    )]
    pub timeout_secs: Option<u64>,
}
