// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use loc_stats::{app, cli::Args, config::Config, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose);
    let config = Config::try_from(args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&config, &mut out)
}
