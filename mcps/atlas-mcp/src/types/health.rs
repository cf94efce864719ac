//! Health assessment types

use serde::{Deserialize, Serialize};

use super::{DiskReport, SystemStats};

/// Severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Ok,
    Warning,
    Critical,
}

impl HealthCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthCategory::Ok => "ok",
            HealthCategory::Warning => "warning",
            HealthCategory::Critical => "critical",
        }
    }
}

impl std::fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub category: HealthCategory,
    pub message: String,
}

/// Overall rating bands for the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl HealthRating {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthRating::Excellent => "excellent",
            HealthRating::Good => "good",
            HealthRating::Fair => "fair",
            HealthRating::Poor => "poor",
            HealthRating::Critical => "critical",
        }
    }
}

/// Response for system_health_check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckReport {
    /// Worst category across CPU, memory and disks
    pub assessment: HealthAssessment,
    /// 0-100, higher is healthier
    pub health_score: u8,
    pub rating: HealthRating,
    pub cpu: Option<HealthAssessment>,
    pub memory: Option<HealthAssessment>,
    pub system_stats: SystemStats,
    pub disks: Vec<DiskReport>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub timestamp: f64,
}
