//! Cleanup recommendation types

use serde::{Deserialize, Serialize};

use super::DiskReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupKind {
    TempDirectory,
    LogFile,
    LargeFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Standard,
    Deep,
}

/// One cleanup opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupItem {
    pub kind: CleanupKind,
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_days: Option<f64>,
    /// e.g. `safe_to_delete`
    pub action: String,
    pub risk_level: RiskLevel,
    /// Bytes expected back if the action is taken
    pub estimated_savings_bytes: u64,
}

/// Response for cleanup_recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupReport {
    pub path: String,
    pub analysis_type: AnalysisType,
    /// Volume state; `None` when the volume could not be read
    pub disk: Option<DiskReport>,
    pub recommendations_count: usize,
    /// Largest first
    pub recommendations: Vec<CleanupItem>,
    pub potential_savings_bytes: u64,
    pub potential_savings_gb: f64,
    pub insights: Vec<String>,
    /// Suggestions derived from disk usage and large files
    pub suggestions: Vec<String>,
    pub skipped: u64,
    pub truncated: bool,
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
