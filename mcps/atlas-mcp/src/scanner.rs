//! Directory scanner
//!
//! Walks a tree depth-first, sums file sizes and keeps the largest files at
//! or above a threshold. Unreadable entries are skipped and counted rather
//! than failing the scan, and an optional deadline cuts the walk short with
//! a partial result.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use walkdir::WalkDir;

use crate::types::{bytes_to_mb, round2, FileType, LargeFileEntry};

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Files of at least this many bytes are reported
    pub threshold_bytes: u64,
    /// Upper bound on reported files; the largest are kept
    pub max_entries: usize,
    /// Stop walking once this instant has passed
    pub deadline: Option<Instant>,
    /// Path prefixes that are pruned from the walk
    pub exclude: Vec<PathBuf>,
    pub same_file_system: bool,
    /// Maximum depth below the root, unlimited when `None`
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            threshold_bytes: 0,
            max_entries: 100,
            deadline: None,
            exclude: Vec::new(),
            same_file_system: false,
            max_depth: None,
        }
    }
}

impl ScanOptions {
    /// Options that only total up sizes, keeping no file list
    pub fn totals_only() -> Self {
        Self {
            threshold_bytes: u64::MAX,
            max_entries: 0,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Combined size of every regular file visited
    pub total_bytes: u64,
    /// Largest first, ties broken by path
    pub files: Vec<LargeFileEntry>,
    pub files_scanned: u64,
    /// Entries that raised an error and were counted as zero bytes
    pub skipped: u64,
    /// The deadline passed before the walk finished
    pub truncated: bool,
}

/// A buffered large file
///
/// Ordered so that "greater" means "more deserving of a slot": larger size
/// first, then the lexically smaller path.
#[derive(Debug)]
struct Candidate {
    size: u64,
    path: String,
    modified: Option<SystemTime>,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the best `cap` candidates using a min-heap of the current winners
struct TopFiles {
    cap: usize,
    heap: BinaryHeap<Reverse<Candidate>>,
}

impl TopFiles {
    fn new(cap: usize) -> Self {
        Self {
            cap,
            heap: BinaryHeap::with_capacity(cap.min(1024)),
        }
    }

    fn offer(&mut self, candidate: Candidate) {
        if self.cap == 0 {
            return;
        }
        if self.heap.len() < self.cap {
            self.heap.push(Reverse(candidate));
            return;
        }
        if let Some(Reverse(worst)) = self.heap.peek() {
            if candidate > *worst {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
            }
        }
    }

    fn into_sorted(self) -> Vec<Candidate> {
        let mut files: Vec<Candidate> = self.heap.into_iter().map(|Reverse(c)| c).collect();
        files.sort_by(|a, b| b.cmp(a));
        files
    }
}

fn is_excluded(path: &Path, exclude: &[PathBuf]) -> bool {
    exclude.iter().any(|ex| path.starts_with(ex))
}

/// Days between `modified` and `now`, rounded to two decimals
pub fn age_days(modified: Option<SystemTime>, now: SystemTime) -> Option<f64> {
    modified
        .and_then(|m| now.duration_since(m).ok())
        .map(|age| round2(age.as_secs_f64() / SECONDS_PER_DAY))
}

/// Build a report entry for a file, computing its age against `now`
pub fn large_file_entry(
    path: &Path,
    size_bytes: u64,
    modified: Option<SystemTime>,
    now: SystemTime,
) -> LargeFileEntry {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    LargeFileEntry {
        path: path.display().to_string(),
        size_bytes,
        size_mb: bytes_to_mb(size_bytes),
        file_type: FileType::from_extension(&extension),
        extension,
        age_days: age_days(modified, now),
    }
}

/// Scan the tree under `root`
pub fn scan(root: &Path, options: &ScanOptions) -> ScanOutcome {
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .same_file_system(options.same_file_system);
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut outcome = ScanOutcome::default();
    let mut top = TopFiles::new(options.max_entries);

    let entries = walker
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.path(), &options.exclude));

    for entry in entries {
        if options.deadline.is_some_and(|d| Instant::now() >= d) {
            outcome.truncated = true;
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                outcome.skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                outcome.skipped += 1;
                continue;
            }
        };

        let size = metadata.len();
        outcome.files_scanned += 1;
        outcome.total_bytes = outcome.total_bytes.saturating_add(size);

        if size >= options.threshold_bytes {
            top.offer(Candidate {
                size,
                path: entry.path().display().to_string(),
                modified: metadata.modified().ok(),
            });
        }
    }

    let now = SystemTime::now();
    outcome.files = top
        .into_sorted()
        .into_iter()
        .map(|c| large_file_entry(Path::new(&c.path), c.size, c.modified, now))
        .collect();

    tracing::debug!(
        root = %root.display(),
        files_scanned = outcome.files_scanned,
        skipped = outcome.skipped,
        truncated = outcome.truncated,
        "Scan finished"
    );

    outcome
}
