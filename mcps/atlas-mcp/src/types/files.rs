//! Large file types

use serde::{Deserialize, Serialize};

/// Coarse file category derived from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Video,
    Archive,
    Log,
    Image,
    Document,
    Other,
}

impl FileType {
    /// Categorize by lowercase extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "mp4" | "avi" | "mkv" | "mov" | "wmv" => FileType::Video,
            "zip" | "rar" | "7z" | "tar" | "gz" => FileType::Archive,
            "log" | "txt" => FileType::Log,
            "jpg" | "png" | "bmp" | "gif" | "tiff" => FileType::Image,
            "pdf" | "doc" | "docx" => FileType::Document,
            _ => FileType::Other,
        }
    }
}

/// A file at or above the scan threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeFileEntry {
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
    /// Lowercase extension without the dot, empty when absent
    pub extension: String,
    pub file_type: FileType,
    /// Days since last modification, when the platform reports it
    pub age_days: Option<f64>,
}

/// Response for find_large_files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargeFilesReport {
    pub path: String,
    pub threshold_bytes: u64,
    pub files_found: usize,
    /// Largest first
    pub files: Vec<LargeFileEntry>,
    /// Size of every file visited, large or not
    pub total_scanned_bytes: u64,
    /// Combined size of the returned files
    pub total_large_bytes: u64,
    pub files_scanned: u64,
    /// Entries that could not be read
    pub skipped: u64,
    /// The scan hit its deadline before finishing
    pub truncated: bool,
    pub recommendations: Vec<String>,
    pub timestamp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("mkv"), FileType::Video);
        assert_eq!(FileType::from_extension("gz"), FileType::Archive);
        assert_eq!(FileType::from_extension("log"), FileType::Log);
        assert_eq!(FileType::from_extension(""), FileType::Other);
        assert_eq!(FileType::from_extension("rs"), FileType::Other);
    }
}
