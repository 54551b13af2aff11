// mod.rs - Core logic module

pub mod collect;
pub mod scan;

// Re-export main types for convenience
pub use collect::{collect_alignments, CollectOptions, CollectSummary};
pub use scan::{scan_directory, FileFilter, ScanOrder};
