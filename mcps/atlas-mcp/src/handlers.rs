//! Tool handlers
//!
//! Each handler takes the metrics source and config explicitly, fills in
//! defaults for omitted parameters, validates paths and assembles the
//! response. Directory walks run on the blocking pool.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cleanup::{self, CleanupOptions};
use crate::config::Config;
use crate::error::{AtlasError, AtlasResult};
use crate::health::{self, classify_with, HealthThresholds};
use crate::metrics::MetricsSource;
use crate::params::{AnalyzeDiskParams, CleanupParams, FindLargeFilesParams};
use crate::scanner::{self, ScanOptions};
use crate::types::{
    bytes_to_gb, bytes_to_mb, epoch_seconds, round2, AnalysisType, CleanupReport, DiskIo,
    DiskReport, HealthAssessment, HealthCategory, HealthCheckReport, IoCounters,
    LargeFilesReport, LoadAverage, NetworkIo, StatsHealth, SystemStats,
};

// ============================================================================
// Path Helpers
// ============================================================================

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}

/// Resolve an optional user path to an existing canonical path
pub fn resolve_path(raw: Option<&str>, config: &Config) -> AtlasResult<PathBuf> {
    let raw = raw
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(config.scan.default_root.as_str());

    if raw.contains('\0') {
        return Err(AtlasError::InvalidInput(
            "path contains null byte".to_string(),
        ));
    }

    let expanded = expand_home(raw);
    expanded.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AtlasError::NotFound(expanded.display().to_string()),
        std::io::ErrorKind::PermissionDenied => {
            AtlasError::InvalidInput(format!("{} is not readable", expanded.display()))
        }
        _ => AtlasError::InvalidInput(format!("{}: {}", expanded.display(), e)),
    })
}

/// Configured exclusions as absolute paths
pub fn exclude_paths(config: &Config) -> Vec<PathBuf> {
    config
        .scan
        .exclude
        .iter()
        .map(|p| {
            let expanded = expand_home(p);
            expanded.canonicalize().unwrap_or(expanded)
        })
        .collect()
}

/// Resolve a path that is about to be walked
///
/// On top of [`resolve_path`] the target must be readable and outside
/// the excluded prefixes.
pub fn resolve_scan_root(raw: Option<&str>, config: &Config) -> AtlasResult<PathBuf> {
    let root = resolve_path(raw, config)?;

    if let Some(excluded) = exclude_paths(config)
        .into_iter()
        .find(|ex| root.starts_with(ex))
    {
        return Err(AtlasError::InvalidInput(format!(
            "Cannot scan system directory: {} (excluded by {})",
            root.display(),
            excluded.display()
        )));
    }

    let readable = if root.is_dir() {
        std::fs::read_dir(&root).map(|_| ())
    } else {
        std::fs::File::open(&root).map(|_| ())
    };
    readable
        .map_err(|e| AtlasError::InvalidInput(format!("{} is not readable: {}", root.display(), e)))?;

    Ok(root)
}

fn deadline(timeout_secs: Option<u64>, config: &Config) -> Option<Instant> {
    let secs = timeout_secs.unwrap_or(config.scan.timeout_secs);
    (secs > 0).then(|| Instant::now() + Duration::from_secs(secs))
}

// ============================================================================
// Shared Builders
// ============================================================================

/// Read host metrics, nulling whatever the platform refuses
///
/// CPU or memory at the critical threshold is listed in `health_issues`.
pub async fn system_stats(
    metrics: &dyn MetricsSource,
    thresholds: &HealthThresholds,
) -> SystemStats {
    let mut errors = Vec::new();

    let cpu_percent = match metrics.read_cpu_percent().await {
        Ok(value) => Some(round2(value)),
        Err(e) => {
            tracing::warn!("CPU usage unavailable: {}", e);
            errors.push(e.to_string());
            None
        }
    };

    let (cpu_count_logical, cpu_count_physical) = match metrics.read_cpu_counts().await {
        Ok(counts) => (Some(counts.logical), counts.physical),
        Err(e) => {
            tracing::warn!("CPU counts unavailable: {}", e);
            errors.push(e.to_string());
            (None, None)
        }
    };

    let (memory_percent, memory_total_gb, memory_available_gb) = match metrics.read_memory().await
    {
        Ok(memory) => (
            Some(round2(memory.percent)),
            Some(bytes_to_gb(memory.total_bytes)),
            Some(bytes_to_gb(memory.available_bytes)),
        ),
        Err(e) => {
            tracing::warn!("Memory statistics unavailable: {}", e);
            errors.push(e.to_string());
            (None, None, None)
        }
    };

    let load_average = metrics
        .read_load_average()
        .await
        .map(|[one, five, fifteen]| LoadAverage {
            one: round2(one),
            five: round2(five),
            fifteen: round2(fifteen),
        });

    let network_io = match metrics.read_network_totals().await {
        Ok(net) => IoCounters::Available(NetworkIo {
            sent_mb: bytes_to_mb(net.bytes_sent),
            recv_mb: bytes_to_mb(net.bytes_recv),
            packets_sent: net.packets_sent,
            packets_recv: net.packets_recv,
        }),
        Err(e) => {
            tracing::debug!("Network counters unavailable: {}", e);
            IoCounters::unavailable()
        }
    };

    let disk_io = match metrics.read_disk_io().await {
        Ok(io) => IoCounters::Available(DiskIo {
            read_mb: bytes_to_mb(io.bytes_read),
            write_mb: bytes_to_mb(io.bytes_written),
        }),
        Err(e) => {
            tracing::debug!("Disk I/O counters unavailable: {}", e);
            IoCounters::unavailable()
        }
    };

    let mut health_issues = Vec::new();
    let is_critical = |subject: &str, value: Option<f64>| {
        value.is_some_and(|v| {
            classify_with(thresholds, subject, v).category == HealthCategory::Critical
        })
    };
    if is_critical("cpu", cpu_percent) {
        health_issues.push("High CPU usage".to_string());
    }
    if is_critical("memory", memory_percent) {
        health_issues.push("High memory usage".to_string());
    }

    SystemStats {
        cpu_percent,
        cpu_count_logical,
        cpu_count_physical,
        memory_percent,
        memory_free_percent: memory_percent.map(|used| round2(100.0 - used)),
        memory_total_gb,
        memory_available_gb,
        load_average,
        network_io,
        disk_io,
        health_status: if health_issues.is_empty() {
            StatsHealth::Healthy
        } else {
            StatsHealth::AttentionNeeded
        },
        health_issues,
        timestamp: epoch_seconds(),
        errors,
    }
}

/// Build a disk report for an already resolved path
pub async fn disk_report(
    metrics: &dyn MetricsSource,
    config: &Config,
    path: &Path,
) -> AtlasResult<DiskReport> {
    let volume = metrics.read_volume(path).await?;

    let total = volume.total_bytes;
    let free = volume.free_bytes.min(total);
    let used = total - free;
    let usage_percent = if total > 0 {
        round2(used as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    let mut report = DiskReport {
        path: path.display().to_string(),
        mount_point: volume.mount_point,
        total_gb: bytes_to_gb(total),
        used_gb: bytes_to_gb(used),
        free_gb: bytes_to_gb(free),
        usage_percent,
        health: classify_with(&config.health.thresholds(), "disk", usage_percent),
        recommendations: Vec::new(),
        timestamp: epoch_seconds(),
    };
    report.recommendations = cleanup::disk_suggestions(&report);

    Ok(report)
}

// ============================================================================
// Handler Functions
// ============================================================================

pub async fn get_system_stats(
    metrics: &dyn MetricsSource,
    config: &Config,
) -> AtlasResult<SystemStats> {
    Ok(system_stats(metrics, &config.health.thresholds()).await)
}

pub async fn analyze_disk_usage(
    metrics: &dyn MetricsSource,
    config: &Config,
    params: AnalyzeDiskParams,
) -> AtlasResult<DiskReport> {
    let path = resolve_path(params.path.as_deref(), config)?;
    disk_report(metrics, config, &path).await
}

pub async fn find_large_files(
    config: &Config,
    params: FindLargeFilesParams,
) -> AtlasResult<LargeFilesReport> {
    let root = resolve_scan_root(params.path.as_deref(), config)?;
    let threshold_bytes = params.threshold_bytes.unwrap_or(config.scan.threshold_bytes);

    let options = ScanOptions {
        threshold_bytes,
        max_entries: params
            .max_results
            .unwrap_or(config.scan.max_results)
            .min(config.scan.max_results_limit),
        deadline: deadline(params.timeout_secs, config),
        exclude: exclude_paths(config),
        same_file_system: config.scan.same_file_system,
        max_depth: None,
    };

    tracing::info!(root = %root.display(), threshold_bytes, "Scanning for large files");

    let scan_root = root.clone();
    let outcome = tokio::task::spawn_blocking(move || scanner::scan(&scan_root, &options)).await?;

    if outcome.truncated {
        tracing::warn!(root = %root.display(), "Scan hit its deadline, returning partial results");
    }

    Ok(LargeFilesReport {
        path: root.display().to_string(),
        threshold_bytes,
        files_found: outcome.files.len(),
        total_scanned_bytes: outcome.total_bytes,
        total_large_bytes: outcome.files.iter().map(|f| f.size_bytes).sum(),
        files_scanned: outcome.files_scanned,
        skipped: outcome.skipped,
        truncated: outcome.truncated,
        recommendations: cleanup::large_file_suggestions(&outcome.files),
        files: outcome.files,
        timestamp: epoch_seconds(),
    })
}

pub async fn cleanup_recommendations(
    metrics: &dyn MetricsSource,
    config: &Config,
    params: CleanupParams,
) -> AtlasResult<CleanupReport> {
    let root = resolve_scan_root(params.path.as_deref(), config)?;

    let mut errors = Vec::new();
    let disk = match disk_report(metrics, config, &root).await {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!(root = %root.display(), "Volume unavailable for cleanup report: {}", e);
            errors.push(e.to_string());
            None
        }
    };

    let deep = params.deep_analysis.unwrap_or(false);
    let max_depth = (!deep).then_some(config.cleanup.max_depth);
    let deadline = deadline(params.timeout_secs, config);
    let exclude = exclude_paths(config);

    let scan_options = ScanOptions {
        threshold_bytes: config.scan.threshold_bytes,
        max_entries: config.cleanup.max_items,
        deadline,
        exclude: exclude.clone(),
        same_file_system: config.scan.same_file_system,
        max_depth: max_depth.map(|d| d + 1),
    };
    let cleanup_options = CleanupOptions {
        max_depth,
        deadline,
        exclude,
    };

    tracing::info!(root = %root.display(), deep, "Analyzing cleanup opportunities");

    let scan_root = root.clone();
    let (large, findings) = tokio::task::spawn_blocking(move || {
        let large = scanner::scan(&scan_root, &scan_options);
        let findings = cleanup::find_candidates(&scan_root, &cleanup_options);
        (large, findings)
    })
    .await?;

    let mut items = findings.items;
    if deep {
        items.extend(cleanup::large_file_items(&large.files));
    }

    let mut suggestions = disk
        .as_ref()
        .map(cleanup::disk_suggestions)
        .unwrap_or_default();
    suggestions.extend(cleanup::large_file_suggestions(&large.files));

    let potential_savings_bytes = cleanup::total_savings(&items);
    let insights = cleanup::insights(&items, potential_savings_bytes);
    let recommendations_count = items.len();
    cleanup::rank(&mut items, config.cleanup.max_items);

    Ok(CleanupReport {
        path: root.display().to_string(),
        analysis_type: if deep {
            AnalysisType::Deep
        } else {
            AnalysisType::Standard
        },
        disk,
        recommendations_count,
        recommendations: items,
        potential_savings_bytes,
        potential_savings_gb: bytes_to_gb(potential_savings_bytes),
        insights,
        suggestions,
        skipped: large.skipped + findings.skipped,
        truncated: large.truncated || findings.truncated,
        timestamp: epoch_seconds(),
        errors,
    })
}

pub async fn system_health_check(
    metrics: &dyn MetricsSource,
    config: &Config,
) -> AtlasResult<HealthCheckReport> {
    let thresholds = config.health.thresholds();
    let stats = system_stats(metrics, &thresholds).await;

    let cpu = stats
        .cpu_percent
        .map(|v| classify_with(&thresholds, "cpu", v));
    let memory = stats
        .memory_percent
        .map(|v| classify_with(&thresholds, "memory", v));

    let mut disks = Vec::new();
    let mut seen_mounts = HashSet::new();
    for mount in &config.health.mount_points {
        let path = match resolve_path(Some(mount), config) {
            Ok(path) => path,
            Err(AtlasError::NotFound(_)) => continue,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", mount, e);
                continue;
            }
        };
        match disk_report(metrics, config, &path).await {
            Ok(report) => {
                if seen_mounts.insert(report.mount_point.clone()) {
                    disks.push(report);
                }
            }
            Err(e) => tracing::warn!("Skipping {}: {}", mount, e),
        }
    }

    let scored = health::score(cpu.as_ref(), memory.as_ref(), &disks);
    let summary = format!(
        "System health: {} ({}/100)",
        scored.rating.as_str().to_uppercase(),
        scored.score
    );

    let category = health::worst(
        cpu.iter()
            .chain(memory.iter())
            .chain(disks.iter().map(|d| &d.health)),
    );

    Ok(HealthCheckReport {
        assessment: HealthAssessment {
            category,
            message: summary.clone(),
        },
        health_score: scored.score,
        rating: scored.rating,
        cpu,
        memory,
        system_stats: stats,
        disks,
        issues: scored.issues,
        recommendations: scored.recommendations,
        summary,
        timestamp: epoch_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fake::FakeMetrics;
    use crate::metrics::{MetricsError, VolumeReading};
    use crate::types::HealthRating;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> Config {
        let mut config = Config::default();
        config.scan.default_root = root.display().to_string();
        config.scan.exclude = vec![];
        config.health.mount_points = vec![root.display().to_string()];
        config
    }

    #[test]
    fn test_resolve_path_defaults_to_root() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path());
        let resolved = resolve_path(None, &config).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());

        let blank = resolve_path(Some("  "), &config).unwrap();
        assert_eq!(blank, resolved);
    }

    #[test]
    fn test_resolve_path_errors() {
        let config = Config::default();
        assert!(matches!(
            resolve_path(Some("/definitely/not/here"), &config),
            Err(AtlasError::NotFound(_))
        ));
        assert!(matches!(
            resolve_path(Some("bad\0path"), &config),
            Err(AtlasError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scan_root_rejects_excluded() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(dir.path());
        config.scan.exclude = vec![dir.path().display().to_string()];

        let err = resolve_scan_root(None, &config).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidInput(_)));
        assert!(err.to_string().contains("Cannot scan system directory"));
    }

    #[tokio::test]
    async fn test_analyze_nonexistent_path() {
        let result = analyze_disk_usage(
            &FakeMetrics::healthy(),
            &Config::default(),
            AnalyzeDiskParams {
                path: Some("/no/such/atlas/path".to_string()),
            },
        )
        .await;
        assert!(matches!(result, Err(AtlasError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_analyze_disk_usage() {
        let dir = TempDir::new().unwrap();
        let report = analyze_disk_usage(
            &FakeMetrics::healthy(),
            &config_for(dir.path()),
            AnalyzeDiskParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.total_gb, 100.0);
        assert_eq!(report.free_gb, 60.0);
        assert_eq!(report.used_gb, 40.0);
        assert_eq!(report.usage_percent, 40.0);
        assert_eq!(report.health.category, HealthCategory::Ok);
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_free_never_exceeds_total() {
        let dir = TempDir::new().unwrap();
        let mut metrics = FakeMetrics::healthy();
        metrics.volume = Ok(VolumeReading {
            mount_point: "/".to_string(),
            total_bytes: 1024,
            free_bytes: 4096,
        });

        let report = disk_report(&metrics, &config_for(dir.path()), dir.path())
            .await
            .unwrap();
        assert!(report.free_gb <= report.total_gb);
        assert_eq!(report.usage_percent, 0.0);
    }

    #[tokio::test]
    async fn test_zero_sized_volume() {
        let dir = TempDir::new().unwrap();
        let mut metrics = FakeMetrics::healthy();
        metrics.volume = Ok(VolumeReading {
            mount_point: "/".to_string(),
            total_bytes: 0,
            free_bytes: 0,
        });

        let report = disk_report(&metrics, &config_for(dir.path()), dir.path())
            .await
            .unwrap();
        assert_eq!(report.usage_percent, 0.0);
    }

    #[tokio::test]
    async fn test_volume_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut metrics = FakeMetrics::healthy();
        metrics.volume = Err(MetricsError::VolumeNotFound("/x".to_string()));

        let result = disk_report(&metrics, &config_for(dir.path()), dir.path()).await;
        assert!(matches!(result, Err(AtlasError::Metrics(_))));
    }

    #[tokio::test]
    async fn test_system_stats_degrade_gracefully() {
        let mut metrics = FakeMetrics::healthy();
        metrics.cpu = Err(MetricsError::Unavailable("CPU usage".to_string()));

        let stats = system_stats(&metrics, &HealthThresholds::default()).await;
        assert!(stats.cpu_percent.is_none());
        assert_eq!(stats.memory_percent, Some(40.0));
        assert_eq!(stats.memory_total_gb, Some(16.0));
        assert_eq!(stats.cpu_count_logical, Some(8));
        assert!(stats.is_degraded());
        assert_eq!(stats.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_system_stats_io_counters() {
        let stats = system_stats(&FakeMetrics::healthy(), &HealthThresholds::default()).await;

        let net = stats.network_io.as_available().unwrap();
        assert_eq!(net.sent_mb, 3.0);
        assert_eq!(net.recv_mb, 12.0);
        assert_eq!(net.packets_recv, 9_000);
        let disk = stats.disk_io.as_available().unwrap();
        assert_eq!(disk.read_mb, 512.0);
        assert_eq!(stats.memory_free_percent, Some(60.0));
        assert_eq!(stats.health_status, StatsHealth::Healthy);
        assert!(stats.health_issues.is_empty());
    }

    #[tokio::test]
    async fn test_system_stats_missing_io_counters_are_not_errors() {
        let mut metrics = FakeMetrics::healthy();
        metrics.network = Err(MetricsError::Unavailable("network counters".to_string()));
        metrics.disk_io = Err(MetricsError::Unavailable("disk I/O counters".to_string()));

        let stats = system_stats(&metrics, &HealthThresholds::default()).await;
        assert_eq!(stats.network_io, IoCounters::unavailable());
        assert_eq!(stats.disk_io, IoCounters::unavailable());
        assert!(!stats.is_degraded());
    }

    #[tokio::test]
    async fn test_system_stats_flags_critical_pressure() {
        let stats = system_stats(
            &FakeMetrics::with_usage(95.0, 92.0, 10),
            &HealthThresholds::default(),
        )
        .await;
        assert_eq!(stats.health_status, StatsHealth::AttentionNeeded);
        assert_eq!(stats.health_issues, vec!["High CPU usage", "High memory usage"]);

        let warm = system_stats(
            &FakeMetrics::with_usage(85.0, 80.0, 10),
            &HealthThresholds::default(),
        )
        .await;
        assert_eq!(warm.health_status, StatsHealth::Healthy);
    }

    #[tokio::test]
    async fn test_find_large_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 10]).unwrap();
        fs::write(dir.path().join("b"), vec![0u8; 2000]).unwrap();
        fs::write(dir.path().join("c"), vec![0u8; 500]).unwrap();

        let report = find_large_files(
            &config_for(dir.path()),
            FindLargeFilesParams {
                threshold_bytes: Some(100),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let sizes: Vec<u64> = report.files.iter().map(|f| f.size_bytes).collect();
        assert_eq!(sizes, vec![2000, 500]);
        assert_eq!(report.files_found, 2);
        assert_eq!(report.total_large_bytes, 2500);
        assert_eq!(report.total_scanned_bytes, 2510);
        assert!(!report.truncated);
    }

    #[tokio::test]
    async fn test_find_large_files_cap() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 300]).unwrap();
        fs::write(dir.path().join("b"), vec![0u8; 900]).unwrap();

        let report = find_large_files(
            &config_for(dir.path()),
            FindLargeFilesParams {
                threshold_bytes: Some(0),
                max_results: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].size_bytes, 900);
    }

    #[tokio::test]
    async fn test_find_large_files_clamps_max_results() {
        let dir = TempDir::new().unwrap();
        for (name, size) in [("a", 100), ("b", 200), ("c", 300)] {
            fs::write(dir.path().join(name), vec![0u8; size]).unwrap();
        }
        let mut config = config_for(dir.path());
        config.scan.max_results_limit = 2;

        let report = find_large_files(
            &config,
            FindLargeFilesParams {
                threshold_bytes: Some(0),
                max_results: Some(usize::MAX),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let sizes: Vec<u64> = report.files.iter().map(|f| f.size_bytes).collect();
        assert_eq!(sizes, vec![300, 200]);
    }

    #[tokio::test]
    async fn test_cleanup_recommendations() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join(".cache");
        fs::create_dir(&cache).unwrap();
        fs::File::create(cache.join("blob"))
            .unwrap()
            .set_len(5 * 1024 * 1024)
            .unwrap();
        fs::File::create(dir.path().join("huge.log"))
            .unwrap()
            .set_len(20 * 1024 * 1024)
            .unwrap();

        let report = cleanup_recommendations(
            &FakeMetrics::with_usage(10.0, 10.0, 95),
            &config_for(dir.path()),
            CleanupParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.analysis_type, AnalysisType::Standard);
        assert_eq!(report.recommendations_count, 2);
        assert!(report.recommendations[0].path.ends_with("huge.log"));
        assert_eq!(report.insights.len(), 2);
        assert_eq!(
            report.disk.as_ref().unwrap().health.category,
            HealthCategory::Critical
        );
        assert!(report.errors.is_empty());
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("Immediate attention")));
    }

    #[tokio::test]
    async fn test_cleanup_survives_volume_failure() {
        let dir = TempDir::new().unwrap();
        fs::File::create(dir.path().join("huge.log"))
            .unwrap()
            .set_len(20 * 1024 * 1024)
            .unwrap();
        let mut metrics = FakeMetrics::healthy();
        metrics.volume = Err(MetricsError::VolumeNotFound("x".to_string()));

        let report = cleanup_recommendations(
            &metrics,
            &config_for(dir.path()),
            CleanupParams::default(),
        )
        .await
        .unwrap();

        assert!(report.disk.is_none());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("no mounted volume"));
        assert_eq!(report.recommendations_count, 1);
        assert!(report.recommendations[0].path.ends_with("huge.log"));
        assert!(report.suggestions.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_cleanup_counts_unreadable_temp_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("tmp");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("scratch"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running with privileges that ignore permission bits
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = cleanup_recommendations(
            &FakeMetrics::healthy(),
            &config_for(dir.path()),
            CleanupParams::default(),
        )
        .await;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let report = report.unwrap();
        assert!(report.skipped > 0);
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_health_check_scores_host() {
        let dir = TempDir::new().unwrap();
        let report = system_health_check(
            &FakeMetrics::with_usage(95.0, 85.0, 75),
            &config_for(dir.path()),
        )
        .await
        .unwrap();

        assert_eq!(report.cpu.as_ref().unwrap().category, HealthCategory::Critical);
        assert_eq!(report.memory.as_ref().unwrap().category, HealthCategory::Warning);
        assert_eq!(report.disks.len(), 1);
        assert_eq!(report.health_score, 100 - 20 - 15 - 15);
        assert_eq!(report.rating, HealthRating::Fair);
        assert_eq!(report.assessment.category, HealthCategory::Critical);
        assert!(report.summary.contains("FAIR"));
    }

    #[tokio::test]
    async fn test_health_check_dedupes_mounts() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(dir.path());
        config.health.mount_points = vec![
            dir.path().display().to_string(),
            dir.path().display().to_string(),
            "/no/such/mount".to_string(),
        ];

        let report = system_health_check(&FakeMetrics::healthy(), &config)
            .await
            .unwrap();
        assert_eq!(report.disks.len(), 1);
        assert_eq!(report.health_score, 100);
        assert_eq!(report.rating, HealthRating::Excellent);
    }
}
