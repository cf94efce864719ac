//! Disk usage types

use serde::{Deserialize, Serialize};

use super::HealthAssessment;

/// Space usage of the volume holding a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskReport {
    /// Path that was analyzed
    pub path: String,
    /// Mount point of the volume holding `path`
    pub mount_point: String,
    pub total_gb: f64,
    pub used_gb: f64,
    /// Never exceeds `total_gb`
    pub free_gb: f64,
    /// `(total - free) / total * 100`
    pub usage_percent: f64,
    pub health: HealthAssessment,
    pub recommendations: Vec<String>,
    pub timestamp: f64,
}
