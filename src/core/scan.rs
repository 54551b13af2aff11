// scan.rs - Directory listing and file name filtering

use regex::bytes::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Order in which alignment files are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Sorted by file name
    #[default]
    Name,
    /// Whatever order the directory listing yields
    Listing,
}

impl FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "sorted" => Ok(ScanOrder::Name),
            "listing" | "unsorted" => Ok(ScanOrder::Listing),
            _ => Err(format!("Invalid scan order: {}. Use: name, listing", s)),
        }
    }
}

impl ScanOrder {
    pub fn description(&self) -> &str {
        match self {
            ScanOrder::Name => "sorted by file name",
            ScanOrder::Listing => "directory listing order",
        }
    }
}

/// Include/exclude patterns applied to raw file name bytes
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
}

impl FileFilter {
    pub fn new(include: Option<Regex>, exclude: Option<Regex>) -> Self {
        Self { include, exclude }
    }

    /// Exclusion wins over inclusion
    pub fn accepts(&self, file_name: &[u8]) -> bool {
        if let Some(re) = &self.exclude {
            if re.is_match(file_name) {
                return false;
            }
        }
        match &self.include {
            Some(re) => re.is_match(file_name),
            None => true,
        }
    }
}

/// List regular files directly inside `dir`.
///
/// Subdirectories and other non-file entries are skipped, symlinks to
/// regular files are kept.
pub fn scan_directory(dir: &Path, order: ScanOrder) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read alignment directory '{}': {}", dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| format!("Failed to list entry in '{}': {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("Skipping non-file entry {}", path.display());
        }
    }

    if order == ScanOrder::Name {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_order_parse() {
        assert_eq!(ScanOrder::from_str("name").unwrap(), ScanOrder::Name);
        assert_eq!(ScanOrder::from_str("LISTING").unwrap(), ScanOrder::Listing);
        assert_eq!(ScanOrder::default(), ScanOrder::Name);
        assert!(ScanOrder::from_str("random").is_err());
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "x").unwrap();

        let files = scan_directory(dir.path(), ScanOrder::Name).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        let unsorted = scan_directory(dir.path(), ScanOrder::Listing).unwrap();
        assert_eq!(unsorted.len(), 2);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = scan_directory(&dir.path().join("absent"), ScanOrder::Name).unwrap_err();
        assert!(err.contains("Failed to read alignment directory"));
    }

    #[test]
    fn test_file_filter() {
        let filter = FileFilter::new(
            Some(Regex::new(r"\.maf$").unwrap()),
            Some(Regex::new("^tmp_").unwrap()),
        );
        assert!(filter.accepts(b"chr1.maf"));
        assert!(!filter.accepts(b"chr1.txt"));
        assert!(!filter.accepts(b"tmp_chr1.maf"));
        assert!(FileFilter::default().accepts(b"anything"));
    }

    #[test]
    fn test_file_filter_non_utf8_name() {
        let filter = FileFilter::new(Some(Regex::new(r"(?-u)^caf\xe9\.maf$").unwrap()), None);
        assert!(filter.accepts(b"caf\xe9.maf"));
        assert!(!filter.accepts("caf\u{fffd}.maf".as_bytes()));
    }
}
