// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default directory holding the pairwise alignment files
pub const DEFAULT_DIR: &str = "./alignment/";

/// Default scan order
pub const DEFAULT_ORDER: &str = "name";

#[derive(FromArgs, Debug)]
/// mafcollect - Collect pairwise alignment files into a single MAF stream
pub struct Args {
    /// directory containing the alignment files (default: ./alignment/)
    #[argh(option, default = "String::from(DEFAULT_DIR)")]
    pub dir: String,

    /// write MAF output to this file instead of stdout
    #[argh(option)]
    pub output: Option<String>,

    /// include only files whose name matches regex pattern
    #[argh(option)]
    pub include: Option<String>,

    /// exclude files whose name matches regex pattern
    #[argh(option)]
    pub exclude: Option<String>,

    /// minimum number of lines for a file to be emitted, smaller files count as missing (default: 2)
    #[argh(option, default = "crate::core::collect::DEFAULT_MIN_LINES")]
    pub min_lines: usize,

    /// file visiting order: name, listing (default: name)
    #[argh(option, default = "String::from(DEFAULT_ORDER)")]
    pub order: String,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub report: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// log progress to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// print version and exit
    #[argh(switch)]
    pub version: bool,
}

impl Args {
    /// Log level from `--verbose` alone; the environment is never consulted
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }
}
