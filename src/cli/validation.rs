// validation.rs - Input validation utilities

use regex::bytes::Regex;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::{CollectOptions, FileFilter, ScanOrder};

pub struct ValidationResult {
    pub dir: PathBuf,
    pub options: CollectOptions,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    if args.dir.trim().is_empty() {
        return Err("--dir must not be empty".to_string());
    }

    if args.min_lines == 0 {
        return Err("--min-lines must be at least 1".to_string());
    }

    let order = ScanOrder::from_str(&args.order)?;

    // Compile regex patterns
    let include = if let Some(pattern) = &args.include {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include regex: {}", e))?)
    } else {
        None
    };

    let exclude = if let Some(pattern) = &args.exclude {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        dir: PathBuf::from(&args.dir),
        options: CollectOptions {
            order,
            filter: FileFilter::new(include, exclude),
            min_lines: args.min_lines,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["mafcollect"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let result = validate_args(&parse(&[])).unwrap();
        assert_eq!(result.dir, PathBuf::from("./alignment/"));
        assert_eq!(result.options.order, ScanOrder::Name);
        assert_eq!(result.options.min_lines, 2);
        assert!(result.options.filter.include.is_none());
        assert!(result.options.filter.exclude.is_none());
    }

    #[test]
    fn test_invalid_regex() {
        let err = validate_args(&parse(&["--include", "("])).err().unwrap();
        assert!(err.contains("Invalid include regex"));
        let err = validate_args(&parse(&["--exclude", "[z-a]"])).err().unwrap();
        assert!(err.contains("Invalid exclude regex"));
    }

    #[test]
    fn test_invalid_order_and_threshold() {
        assert!(validate_args(&parse(&["--order", "random"])).is_err());
        assert!(validate_args(&parse(&["--min-lines", "0"])).is_err());
        assert!(validate_args(&parse(&["--dir", " "])).is_err());
    }

    #[test]
    fn test_filters_compiled() {
        let result = validate_args(&parse(&[
            "--include",
            r"\.maf$",
            "--exclude",
            "^tmp",
            "--order",
            "listing",
        ]))
        .unwrap();
        assert_eq!(result.options.order, ScanOrder::Listing);
        assert!(result.options.filter.accepts(b"chr2.maf"));
        assert!(!result.options.filter.accepts(b"tmp.maf"));
    }
}
