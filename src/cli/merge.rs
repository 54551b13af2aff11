// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_DIR, DEFAULT_ORDER};
use crate::cli::{Args, Config};
use crate::core::collect::DEFAULT_MIN_LINES;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output (only override defaults, not explicit CLI values)
        if self.dir == DEFAULT_DIR {
            if let Some(dir) = config.dir {
                self.dir = dir;
            }
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.report.is_none() {
            self.report = config.report;
        }

        // File selection
        if self.include.is_none() {
            self.include = config.include;
        }
        if self.exclude.is_none() {
            self.exclude = config.exclude;
        }
        if self.order == DEFAULT_ORDER {
            if let Some(order) = config.order {
                self.order = order;
            }
        }
        if self.min_lines == DEFAULT_MIN_LINES {
            if let Some(min_lines) = config.min_lines {
                self.min_lines = min_lines;
            }
        }

        // Flags (only set if not already true from CLI)
        if !self.verbose {
            self.verbose = config.verbose.unwrap_or(false);
        }

        self
    }

    /// Load and merge configuration file
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
