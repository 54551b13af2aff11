// config.rs - Configuration file support

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    // Input/Output
    pub dir: Option<String>,
    pub output: Option<String>,
    pub report: Option<String>,

    // File selection
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub order: Option<String>,
    pub min_lines: Option<usize>,

    // Flags
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        log::info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mafcollect.toml - Configuration file for mafcollect
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory containing the pairwise alignment files
dir = "./alignment/"

# Write MAF output to a file instead of stdout
# output = "all.maf"

# Write a JSON run summary
# report = "mafcollect_report.json"

# =============================================================================
# FILE SELECTION
# =============================================================================

# Include only files whose name matches regex pattern
# include = "\\.maf$"

# Exclude files whose name matches regex pattern
# exclude = "^tmp_"

# File visiting order: name, listing
order = "name"

# Files with fewer lines than this are counted as missing
min_lines = 2

# =============================================================================
# FLAGS
# =============================================================================

# Log progress to stderr
verbose = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.dir.as_deref(), Some("./alignment/"));
        assert_eq!(config.order.as_deref(), Some("name"));
        assert_eq!(config.min_lines, Some(2));
        assert_eq!(config.verbose, Some(false));
        assert!(config.output.is_none());
        assert!(config.include.is_none());
    }

    #[test]
    fn test_config_file_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mafcollect.toml");
        fs::write(
            &path,
            "dir = \"lagan_out\"\ninclude = '\\.maf$'\nmin_lines = 3\n",
        )
        .unwrap();

        let loaded = Config::from_file(&path).unwrap();
        let expected = Config {
            dir: Some("lagan_out".to_string()),
            include: Some(r"\.maf$".to_string()),
            min_lines: Some(3),
            ..Config::default()
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "min_lines = \"many\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
        assert!(Config::from_file(dir.path().join("none.toml")).is_err());
    }
}
