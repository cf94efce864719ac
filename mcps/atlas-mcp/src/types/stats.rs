//! Host metric types

use serde::{Deserialize, Serialize};

/// Point-in-time CPU, memory and I/O statistics
///
/// Metric fields are `None` when the platform read failed; the reason is
/// recorded in `errors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStats {
    /// Global CPU usage (0-100)
    pub cpu_percent: Option<f64>,
    /// Logical CPU count
    pub cpu_count_logical: Option<usize>,
    /// Physical core count
    pub cpu_count_physical: Option<usize>,
    /// Physical memory in use (0-100)
    pub memory_percent: Option<f64>,
    pub memory_free_percent: Option<f64>,
    pub memory_total_gb: Option<f64>,
    pub memory_available_gb: Option<f64>,
    /// Load average, on platforms that have one
    pub load_average: Option<LoadAverage>,
    pub network_io: IoCounters<NetworkIo>,
    pub disk_io: IoCounters<DiskIo>,
    pub health_status: StatsHealth,
    pub health_issues: Vec<String>,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl SystemStats {
    /// True when at least one metric could not be read
    pub fn is_degraded(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Cumulative counters, or `{"status": "unavailable"}` when the platform
/// does not expose them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IoCounters<T> {
    Available(T),
    Unavailable { status: String },
}

impl<T> IoCounters<T> {
    pub fn unavailable() -> Self {
        IoCounters::Unavailable {
            status: "unavailable".to_string(),
        }
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            IoCounters::Available(counters) => Some(counters),
            IoCounters::Unavailable { .. } => None,
        }
    }
}

/// Totals across all network interfaces since boot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkIo {
    pub sent_mb: f64,
    pub recv_mb: f64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskIo {
    pub read_mb: f64,
    pub write_mb: f64,
}

/// Quick verdict on CPU and memory pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsHealth {
    Healthy,
    AttentionNeeded,
}
