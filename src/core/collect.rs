// collect.rs - Concatenate alignment files into one MAF stream

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::scan::{scan_directory, FileFilter, ScanOrder};
use crate::data::AlignmentFile;
use crate::output::MafWriter;

/// Fewest trimmed lines a file needs to be emitted
pub const DEFAULT_MIN_LINES: usize = 2;

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub order: ScanOrder,
    pub filter: FileFilter,
    pub min_lines: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            order: ScanOrder::default(),
            filter: FileFilter::default(),
            min_lines: DEFAULT_MIN_LINES,
        }
    }
}

/// Counters accumulated over one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectSummary {
    pub files_scanned: usize,
    pub files_written: usize,
    pub files_filtered: usize,
    pub missing: usize,
    pub lines_written: usize,
}

/// Write the MAF header, then every usable alignment file in `dir`.
///
/// Files rejected by the name filter are counted in `files_filtered` and
/// never as missing. Any I/O failure stops the pass; blocks already written
/// stay written.
pub fn collect_alignments<W: Write>(
    dir: &Path,
    options: &CollectOptions,
    writer: &mut MafWriter<W>,
) -> Result<CollectSummary, String> {
    writer.write_header()?;

    let files = scan_directory(dir, options.order)?;
    log::info!(
        "Found {} files in {} ({})",
        files.len(),
        dir.display(),
        options.order.description()
    );

    let mut summary = CollectSummary::default();
    for path in files {
        summary.files_scanned += 1;

        let file_name = path.file_name().unwrap_or_default();
        if !options.filter.accepts(file_name.as_encoded_bytes()) {
            log::debug!("Filtered out {}", file_name.to_string_lossy());
            summary.files_filtered += 1;
            continue;
        }

        let alignment = AlignmentFile::from_path(&path)?;
        if alignment.is_missing(options.min_lines) {
            log::debug!(
                "{} has {} line(s), counted as missing",
                alignment.file_name(),
                alignment.line_count()
            );
            summary.missing += 1;
            continue;
        }

        writer.write_block(&alignment.lines)?;
        summary.files_written += 1;
        summary.lines_written += alignment.line_count();
    }

    log::info!(
        "Wrote {} blocks ({} lines), {} missing, {} filtered",
        summary.files_written,
        summary.lines_written,
        summary.missing,
        summary.files_filtered
    );
    Ok(summary)
}
