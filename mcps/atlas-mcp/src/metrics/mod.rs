//! Host metrics sources
//!
//! The tools never talk to the OS directly; they go through a
//! [`MetricsSource`]. [`SysinfoSource`] is the production implementation,
//! tests substitute fixed readings.

mod sysinfo_source;

pub use sysinfo_source::SysinfoSource;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("{0} is unavailable on this platform")]
    Unavailable(String),

    #[error("no mounted volume contains {0}")]
    VolumeNotFound(String),
}

pub type MetricsResult<T> = Result<T, MetricsError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReading {
    /// Used memory (0-100)
    pub percent: f64,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeReading {
    pub mount_point: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuCounts {
    pub logical: usize,
    pub physical: Option<usize>,
}

/// Network totals summed over every interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkReading {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskIoReading {
    pub bytes_read: u64,
    pub bytes_written: u64,
}

#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Global CPU usage (0-100)
    async fn read_cpu_percent(&self) -> MetricsResult<f64>;

    async fn read_cpu_counts(&self) -> MetricsResult<CpuCounts>;

    async fn read_memory(&self) -> MetricsResult<MemoryReading>;

    /// 1/5/15 minute load average; `None` where the platform has none
    async fn read_load_average(&self) -> Option<[f64; 3]>;

    /// Space on the volume that holds `path`
    async fn read_volume(&self, path: &Path) -> MetricsResult<VolumeReading>;

    async fn read_network_totals(&self) -> MetricsResult<NetworkReading>;

    /// System-wide disk I/O counters
    async fn read_disk_io(&self) -> MetricsResult<DiskIoReading> {
        Err(MetricsError::Unavailable("disk I/O counters".to_string()))
    }
}

/// Pick the mount point that is the longest prefix of `path`
///
/// Returns the index into `mount_points`.
pub fn best_mount_match<P: AsRef<Path>>(path: &Path, mount_points: &[P]) -> Option<usize> {
    mount_points
        .iter()
        .enumerate()
        .filter(|(_, mount)| path.starts_with(mount.as_ref()))
        .max_by_key(|(_, mount)| mount.as_ref().components().count())
        .map(|(i, _)| i)
}
