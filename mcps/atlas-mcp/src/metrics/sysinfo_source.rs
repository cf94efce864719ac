//! [`MetricsSource`] backed by the `sysinfo` crate

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{Disks, Networks, System};
use tokio::sync::Mutex;

use super::{
    best_mount_match, CpuCounts, MemoryReading, MetricsError, MetricsResult, MetricsSource,
    NetworkReading, VolumeReading,
};

/// Gap between the two CPU refreshes needed for a usage sample
const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone)]
pub struct SysinfoSource {
    system: Arc<Mutex<System>>,
}

impl SysinfoSource {
    pub fn new() -> Self {
        Self {
            system: Arc::new(Mutex::new(System::new())),
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the `\\?\` verbatim prefix that `canonicalize` adds on Windows
fn strip_verbatim(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(rest) => PathBuf::from(rest),
        None => path.to_path_buf(),
    }
}

#[async_trait]
impl MetricsSource for SysinfoSource {
    async fn read_cpu_percent(&self) -> MetricsResult<f64> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_usage();
        tokio::time::sleep(CPU_SAMPLE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await;
        sys.refresh_cpu_usage();

        if sys.cpus().is_empty() {
            return Err(MetricsError::Unavailable("CPU usage".to_string()));
        }
        Ok(f64::from(sys.global_cpu_usage()).clamp(0.0, 100.0))
    }

    async fn read_cpu_counts(&self) -> MetricsResult<CpuCounts> {
        let mut sys = self.system.lock().await;
        if sys.cpus().is_empty() {
            sys.refresh_cpu_all();
        }

        let logical = sys.cpus().len();
        if logical == 0 {
            return Err(MetricsError::Unavailable("CPU count".to_string()));
        }
        Ok(CpuCounts {
            logical,
            physical: sys.physical_core_count(),
        })
    }

    async fn read_memory(&self) -> MetricsResult<MemoryReading> {
        let mut sys = self.system.lock().await;
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return Err(MetricsError::Unavailable("memory statistics".to_string()));
        }
        let used = sys.used_memory().min(total);

        Ok(MemoryReading {
            percent: (used as f64 / total as f64) * 100.0,
            total_bytes: total,
            available_bytes: sys.available_memory(),
        })
    }

    async fn read_load_average(&self) -> Option<[f64; 3]> {
        if cfg!(windows) {
            return None;
        }
        let load = System::load_average();
        Some([load.one, load.five, load.fifteen])
    }

    async fn read_volume(&self, path: &Path) -> MetricsResult<VolumeReading> {
        let disks = Disks::new_with_refreshed_list();
        let mounts: Vec<PathBuf> = disks
            .iter()
            .map(|disk| disk.mount_point().to_path_buf())
            .collect();

        let lookup = strip_verbatim(path);
        let idx = best_mount_match(&lookup, &mounts)
            .ok_or_else(|| MetricsError::VolumeNotFound(path.display().to_string()))?;
        let disk = &disks.list()[idx];

        let total = disk.total_space();
        Ok(VolumeReading {
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            total_bytes: total,
            free_bytes: disk.available_space(),
        })
    }

    async fn read_network_totals(&self) -> MetricsResult<NetworkReading> {
        let networks = Networks::new_with_refreshed_list();
        if networks.is_empty() {
            return Err(MetricsError::Unavailable("network counters".to_string()));
        }

        Ok(networks
            .iter()
            .fold(NetworkReading::default(), |acc, (_, data)| NetworkReading {
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
                packets_sent: acc
                    .packets_sent
                    .saturating_add(data.total_packets_transmitted()),
                packets_recv: acc
                    .packets_recv
                    .saturating_add(data.total_packets_received()),
            }))
    }

    // sysinfo 0.32 has no system-wide disk I/O counters, so `read_disk_io`
    // keeps the unavailable default.
}
