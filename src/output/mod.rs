// mod.rs - MAF output and run report writers

use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::CollectSummary;

/// Header line opening every MAF stream
pub const MAF_HEADER: &str = "##maf version=1";

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!("Failed to create parent directory '{}': {}", parent.display(), e)
        })?;
    }
    Ok(())
}

/// Streams a MAF header followed by alignment blocks.
///
/// Each block is a blank separator line and then the block lines, each
/// terminated by a newline.
pub struct MafWriter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> MafWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn write_header(&mut self) -> Result<(), String> {
        if self.header_written {
            return Ok(());
        }
        writeln!(self.writer, "{}", MAF_HEADER).map_err(|e| format!("Write error: {}", e))?;
        self.header_written = true;
        Ok(())
    }

    /// Lines are written as raw bytes, whatever their encoding
    pub fn write_block(&mut self, lines: &[Vec<u8>]) -> Result<(), String> {
        self.write_header()?;
        let mut block = Vec::with_capacity(1 + lines.iter().map(|l| l.len() + 1).sum::<usize>());
        block.push(b'\n');
        for line in lines {
            block.extend_from_slice(line);
            block.push(b'\n');
        }
        self.writer
            .write_all(&block)
            .map_err(|e| format!("Write error: {}", e))
    }

    pub fn finish(mut self) -> Result<W, String> {
        self.write_header()?;
        self.writer.flush().map_err(|e| format!("Flush error: {}", e))?;
        Ok(self.writer)
    }
}

/// Open the MAF destination: a file when a path is given, stdout otherwise
pub fn open_output(file_path: Option<&str>) -> Result<MafWriter<Box<dyn Write>>, String> {
    let writer: Box<dyn Write> = match file_path {
        Some(path) => {
            ensure_parent_dir(path)?;
            let file = File::create(path)
                .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;
            log::info!("Writing MAF output to {}", path);
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(MafWriter::new(writer))
}

/// Write the missing-file count with no label (stderr in the binary)
pub fn write_missing_count<W: Write>(writer: &mut W, missing: usize) -> Result<(), String> {
    writeln!(writer, "{}", missing).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

/// JSON summary of one collection run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub tool: String,
    pub version: String,
    pub generated: String,
    pub directory: String,
    pub command: String,
    #[serde(flatten)]
    pub summary: CollectSummary,
}

impl RunReport {
    pub fn new(directory: &str, command_line: &str, summary: CollectSummary) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            directory: directory.to_string(),
            command: command_line.to_string(),
            summary,
        }
    }
}

/// Write the run report as pretty-printed JSON
pub fn write_report(file_path: &str, report: &RunReport) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    log::info!("Run report written to: {}", file_path);
    Ok(())
}
