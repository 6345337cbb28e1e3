//! Command-line arguments.

use clap::{ArgAction, Parser};
use precis_config::Config;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Cut HTML down to a preview-sized snippet without breaking its markup.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// HTML file to truncate; reads standard input when omitted or `-`.
    pub input: Option<PathBuf>,
    /// Visible characters to keep.
    #[arg(short = 'n', long)]
    pub length: Option<usize>,
    /// Marker placed where content was cut.
    #[arg(long)]
    pub ellipsis: Option<String>,
    /// Only parse the first BYTES of the input.
    #[arg(long, value_name = "BYTES")]
    pub input_limit: Option<usize>,
    /// Configuration file, layered over the user configuration.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// More logging; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}
impl Cli {
    /// The input file, or `None` for standard input.
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Layers the command-line flags over a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(ellipsis) = &self.ellipsis {
            config.ellipsis = ellipsis.clone();
        }
        if self.input_limit.is_some() {
            config.input_limit = self.input_limit;
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
