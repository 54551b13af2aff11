// mod.rs - Data structures module

pub mod alignment;

// Re-export main types for convenience
pub use alignment::AlignmentFile;
