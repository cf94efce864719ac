//! Server configuration
//!
//! Every tool receives the [`Config`] explicitly. Values come from a TOML
//! file when one is found, otherwise from platform defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::health::HealthThresholds;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "ATLAS_CONFIG_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path used when a tool call omits `path`
    #[serde(default = "default_root")]
    pub default_root: String,
    /// Minimum size for a file to count as large
    #[serde(default = "default_threshold_bytes")]
    pub threshold_bytes: u64,
    /// Upper bound on large files kept per scan
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Ceiling applied to a caller supplied `max_results`
    #[serde(default = "default_max_results_limit")]
    pub max_results_limit: usize,
    /// Scan deadline in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Path prefixes never descended into
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    /// Stay on the filesystem of the scan root
    #[serde(default)]
    pub same_file_system: bool,
}

fn default_root() -> String {
    if cfg!(windows) {
        "C:\\".to_string()
    } else {
        "/".to_string()
    }
}

fn default_threshold_bytes() -> u64 {
    100 * 1024 * 1024 // 100MB
}

fn default_max_results() -> usize {
    100
}

fn default_max_results_limit() -> usize {
    10_000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_exclude() -> Vec<String> {
    if cfg!(windows) {
        vec![
            "C:\\Windows".to_string(),
            "C:\\Program Files".to_string(),
            "C:\\Program Files (x86)".to_string(),
            "C:\\$Recycle.Bin".to_string(),
        ]
    } else if cfg!(target_os = "linux") {
        vec!["/proc".to_string(), "/sys".to_string(), "/dev".to_string()]
    } else {
        vec!["/dev".to_string()]
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            threshold_bytes: default_threshold_bytes(),
            max_results: default_max_results(),
            max_results_limit: default_max_results_limit(),
            timeout_secs: default_timeout_secs(),
            exclude: default_exclude(),
            same_file_system: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_warning_percent")]
    pub warning_percent: f64,
    #[serde(default = "default_critical_percent")]
    pub critical_percent: f64,
    /// Volumes inspected by `system_health_check`
    #[serde(default = "default_mount_points")]
    pub mount_points: Vec<String>,
}

fn default_warning_percent() -> f64 {
    70.0
}

fn default_critical_percent() -> f64 {
    90.0
}

/// Drive roots `A:\` to `Z:\` that exist on this machine
fn drive_roots() -> Vec<String> {
    ('A'..='Z')
        .map(|letter| format!("{}:\\", letter))
        .filter(|root| Path::new(root).exists())
        .collect()
}

fn default_mount_points() -> Vec<String> {
    if cfg!(windows) {
        drive_roots()
    } else {
        vec![
            "/".to_string(),
            "/home".to_string(),
            "/var".to_string(),
            "/tmp".to_string(),
        ]
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            warning_percent: default_warning_percent(),
            critical_percent: default_critical_percent(),
            mount_points: default_mount_points(),
        }
    }
}

impl HealthConfig {
    pub fn thresholds(&self) -> HealthThresholds {
        HealthThresholds {
            warning: self.warning_percent,
            critical: self.critical_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Directory depth explored by a standard (non-deep) analysis
    #[serde(default = "default_cleanup_depth")]
    pub max_depth: usize,
    /// Upper bound on recommendations returned
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

fn default_cleanup_depth() -> usize {
    3
}

fn default_max_items() -> usize {
    20
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            max_depth: default_cleanup_depth(),
            max_items: default_max_items(),
        }
    }
}

impl Config {
    /// Load config from standard file locations
    ///
    /// Searched in order:
    /// 1. `ATLAS_CONFIG_PATH` env var
    /// 2. `~/.binks/atlas.toml`
    /// 3. `./atlas-mcp.toml`
    /// 4. `$XDG_CONFIG_HOME/atlas-mcp/config.toml`
    /// 5. Default config if none found
    pub fn load() -> Self {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(&env_path);
            if path.exists() {
                if let Some(config) = Self::read_file(&path) {
                    return config;
                }
            } else {
                tracing::warn!("{}={} does not exist", CONFIG_ENV_VAR, env_path);
            }
        }

        let mut config_paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            config_paths.push(home.join(".binks").join("atlas.toml"));
        }
        config_paths.push(PathBuf::from("atlas-mcp.toml"));
        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("atlas-mcp").join("config.toml"));
        }

        for path in config_paths {
            if path.exists() {
                if let Some(config) = Self::read_file(&path) {
                    return config;
                }
            }
        }

        tracing::info!("Using default configuration");
        Config::default()
    }

    fn read_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.threshold_bytes, 100 * 1024 * 1024);
        assert_eq!(config.scan.max_results, 100);
        assert_eq!(config.scan.max_results_limit, 10_000);
        assert_eq!(config.health.warning_percent, 70.0);
        assert_eq!(config.health.critical_percent, 90.0);
        assert_eq!(config.cleanup.max_depth, 3);
        if cfg!(unix) {
            assert_eq!(config.scan.default_root, "/");
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            default_root = "/srv"
            max_results = 5

            [health]
            critical_percent = 95.0
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.default_root, "/srv");
        assert_eq!(config.scan.max_results, 5);
        assert_eq!(config.scan.timeout_secs, 30);
        assert_eq!(config.health.warning_percent, 70.0);
        assert_eq!(config.health.thresholds().critical, 95.0);
        assert_eq!(config.cleanup.max_items, 20);
    }

    #[test]
    fn test_default_mount_points() {
        let mounts = default_mount_points();
        if cfg!(windows) {
            assert!(!mounts.is_empty());
            assert!(mounts.iter().all(|m| m.ends_with(":\\") && Path::new(m).exists()));
        } else {
            assert_eq!(mounts, vec!["/", "/home", "/var", "/tmp"]);
        }
    }

    #[test]
    fn test_drive_roots_only_lists_existing_drives() {
        for root in drive_roots() {
            assert_eq!(root.len(), 3);
            assert!(Path::new(&root).exists());
        }
        if cfg!(unix) {
            assert!(drive_roots().is_empty());
        }
    }

    #[test]
    fn test_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scan.timeout_secs, default_timeout_secs());
    }
}
