// lib.rs - mafcollect library root

//! # mafcollect - Collect pairwise alignments into a single MAF stream
//!
//! Reads every regular file of an alignment directory, trims each line and
//! writes the files as blocks after a `##maf version=1` header. Files with too
//! few lines carry no usable alignment and are counted as missing instead.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mafcollect::prelude::*;
//!
//! let mut writer = MafWriter::new(std::io::stdout());
//! let summary = collect_alignments(
//!     std::path::Path::new("./alignment/"),
//!     &CollectOptions::default(),
//!     &mut writer,
//! )?;
//! writer.finish()?;
//! eprintln!("{}", summary.missing);
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{collect_alignments, scan_directory};
    pub use crate::core::{CollectOptions, CollectSummary, FileFilter, ScanOrder};
    pub use crate::data::AlignmentFile;
    pub use crate::output::{MafWriter, RunReport, MAF_HEADER};
}

pub use cli::{Args, ValidationResult};
pub use crate::core::{CollectOptions, CollectSummary, ScanOrder};
pub use data::AlignmentFile;
pub use output::MafWriter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("mafcollect v{} - MAF collector for pairwise alignments", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_has_version() {
        assert!(get_info().contains(VERSION));
    }
}
