// alignment.rs - Pairwise alignment file contents

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Trimmed lines of one alignment file.
///
/// Lines are raw bytes in file order, so any encoding passes through
/// unchanged. Only ASCII whitespace is trimmed; whitespace-only lines are
/// kept as empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentFile {
    pub path: PathBuf,
    pub lines: Vec<Vec<u8>>,
}

impl AlignmentFile {
    /// Read a file and strip leading/trailing ASCII whitespace from every line
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open alignment file '{}': {}", path.display(), e))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();

        for (line_num, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| {
                format!(
                    "Failed to read line {} from '{}': {}",
                    line_num + 1,
                    path.display(),
                    e
                )
            })?;
            lines.push(line.trim_ascii().to_vec());
        }

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A file with fewer than `min_lines` lines has no usable alignment body
    pub fn is_missing(&self, min_lines: usize) -> bool {
        self.lines.len() < min_lines
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
