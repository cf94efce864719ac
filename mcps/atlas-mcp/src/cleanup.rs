//! Cleanup analysis
//!
//! Looks for temp-like directories and oversized log files under a path,
//! and turns disk usage plus large file findings into plain suggestions.

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use walkdir::WalkDir;

use crate::scanner::{self, ScanOptions};
use crate::types::{
    bytes_to_gb, bytes_to_mb, CleanupItem, CleanupKind, DiskReport, FileType, HealthCategory,
    LargeFileEntry, RiskLevel,
};

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Directory names treated as disposable caches
const TEMP_DIR_NAMES: &[&str] = &["tmp", "temp", "__pycache__", ".cache", "node_modules"];

/// Extensions of files that usually compress well or can be truncated
const LOG_EXTENSIONS: &[&str] = &["log", "tmp", "bak", "old"];

const MIN_TEMP_DIR_BYTES: u64 = MIB;
const MIN_LOG_FILE_BYTES: u64 = 10 * MIB;

/// Share of a log file expected back from compression, in percent
const LOG_COMPRESSION_SAVINGS_PERCENT: u64 = 80;

#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Directory depth explored; unlimited when `None`
    pub max_depth: Option<usize>,
    pub deadline: Option<Instant>,
    pub exclude: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct CleanupFindings {
    /// Unsorted, uncapped
    pub items: Vec<CleanupItem>,
    pub skipped: u64,
    pub truncated: bool,
}

fn is_temp_dir_name(name: &str) -> bool {
    TEMP_DIR_NAMES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn is_log_like(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| LOG_EXTENSIONS.contains(&ext.as_str()))
}

/// Walk `root` looking for temp directories and large log files
///
/// Temp directories are sized as a whole and not descended into.
pub fn find_candidates(root: &Path, options: &CleanupOptions) -> CleanupFindings {
    let mut walker = WalkDir::new(root).follow_links(false);
    if let Some(depth) = options.max_depth {
        // Files directly inside the deepest inspected directory still count
        walker = walker.max_depth(depth + 1);
    }

    let mut findings = CleanupFindings::default();
    let now = SystemTime::now();
    let exclude = &options.exclude;
    let mut entries = walker
        .into_iter()
        .filter_entry(|entry| !exclude.iter().any(|ex| entry.path().starts_with(ex)));

    while let Some(entry) = entries.next() {
        if options.deadline.is_some_and(|d| Instant::now() >= d) {
            findings.truncated = true;
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                findings.skipped += 1;
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() && entry.depth() > 0 && is_temp_dir_name(&name) {
            let totals = scanner::scan(
                entry.path(),
                &ScanOptions {
                    deadline: options.deadline,
                    exclude: options.exclude.clone(),
                    ..ScanOptions::totals_only()
                },
            );
            findings.skipped += totals.skipped;
            findings.truncated |= totals.truncated;

            if totals.total_bytes > MIN_TEMP_DIR_BYTES {
                findings.items.push(CleanupItem {
                    kind: CleanupKind::TempDirectory,
                    path: entry.path().display().to_string(),
                    size_bytes: totals.total_bytes,
                    size_mb: bytes_to_mb(totals.total_bytes),
                    file_count: Some(totals.files_scanned),
                    age_days: None,
                    action: "safe_to_delete".to_string(),
                    risk_level: RiskLevel::Low,
                    estimated_savings_bytes: totals.total_bytes,
                });
            }
            entries.skip_current_dir();
            continue;
        }

        if !entry.file_type().is_file() || !is_log_like(entry.path()) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                findings.skipped += 1;
                continue;
            }
        };

        let size = metadata.len();
        if size > MIN_LOG_FILE_BYTES {
            findings.items.push(CleanupItem {
                kind: CleanupKind::LogFile,
                path: entry.path().display().to_string(),
                size_bytes: size,
                size_mb: bytes_to_mb(size),
                file_count: None,
                age_days: scanner::age_days(metadata.modified().ok(), now),
                action: "consider_truncating_or_compressing".to_string(),
                risk_level: RiskLevel::Medium,
                estimated_savings_bytes: size / 100 * LOG_COMPRESSION_SAVINGS_PERCENT,
            });
        }
    }

    findings
}

/// Large files flagged for manual review; no savings are assumed
pub fn large_file_items(files: &[LargeFileEntry]) -> Vec<CleanupItem> {
    files
        .iter()
        .map(|f| CleanupItem {
            kind: CleanupKind::LargeFile,
            path: f.path.clone(),
            size_bytes: f.size_bytes,
            size_mb: f.size_mb,
            file_count: None,
            age_days: f.age_days,
            action: "manual_review_needed".to_string(),
            risk_level: RiskLevel::High,
            estimated_savings_bytes: 0,
        })
        .collect()
}

pub fn total_savings(items: &[CleanupItem]) -> u64 {
    items.iter().map(|i| i.estimated_savings_bytes).sum()
}

/// Sort largest first and keep at most `max_items`
pub fn rank(items: &mut Vec<CleanupItem>, max_items: usize) {
    items.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes).then_with(|| a.path.cmp(&b.path)));
    items.truncate(max_items);
}

/// Summary lines about a set of cleanup items
pub fn insights(items: &[CleanupItem], potential_savings_bytes: u64) -> Vec<String> {
    let mut insights = Vec::new();

    if potential_savings_bytes > GIB {
        insights.push(format!(
            "Significant cleanup potential: {:.1}GB could be recovered",
            bytes_to_gb(potential_savings_bytes)
        ));
    }

    let temp_dirs = items
        .iter()
        .filter(|i| i.kind == CleanupKind::TempDirectory)
        .count();
    if temp_dirs > 0 {
        insights.push(format!(
            "Found {} temporary directories safe for cleanup",
            temp_dirs
        ));
    }

    let logs = items
        .iter()
        .filter(|i| i.kind == CleanupKind::LogFile)
        .count();
    if logs > 0 {
        insights.push(format!(
            "Found {} large log files that could be compressed",
            logs
        ));
    }

    insights
}

/// Suggestions driven by how full a volume is
pub fn disk_suggestions(disk: &DiskReport) -> Vec<String> {
    let mut suggestions = Vec::new();
    if disk.health.category >= HealthCategory::Warning {
        suggestions.push("Consider cleanup operations".to_string());
    }
    if disk.health.category == HealthCategory::Critical {
        suggestions.push("Immediate attention required - disk nearly full".to_string());
    }
    if disk.free_gb < 1.0 {
        suggestions.push("Critical: Less than 1GB free space".to_string());
    }
    suggestions
}

/// Suggestions driven by the large files found under a path
pub fn large_file_suggestions(files: &[LargeFileEntry]) -> Vec<String> {
    let mut suggestions = Vec::new();

    let total: u64 = files.iter().map(|f| f.size_bytes).sum();
    if total > GIB {
        suggestions.push("Consider archiving or compressing old large files".to_string());
    }

    let videos = files
        .iter()
        .filter(|f| f.file_type == FileType::Video)
        .count();
    if videos > 0 {
        suggestions.push(format!(
            "Found {} large video files - consider compression",
            videos
        ));
    }

    let old = files
        .iter()
        .filter(|f| f.age_days.is_some_and(|age| age > 365.0))
        .count();
    if old > 0 {
        suggestions.push(format!("Found {} files older than 1 year", old));
    }

    suggestions
}
