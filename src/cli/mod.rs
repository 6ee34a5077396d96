// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod value_enum;

pub use value_enum::CliIgnoreMatching;

#[derive(Parser, Debug)]
#[command(
    name = "loc_stats",
    version = crate::VERSION,
    about = "Count lines of .js, .ts, .tsx, .css and .html files under a directory"
)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// How ignored folder names are matched against directory paths
    #[arg(long, value_enum, default_value_t = CliIgnoreMatching::Substring)]
    pub ignore_match: CliIgnoreMatching,

    /// Log debug events (pruned directories, unreadable files) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
