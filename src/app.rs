// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use loc_stats_domain::StatsReport;
use loc_stats_infra::{TreeWalker, Utf8LineCounter};
use loc_stats_usecase::CollectStats;

use crate::{config::Config, output};

/// Walks `config.root` and returns the accumulated totals.
pub fn collect(config: &Config) -> Result<StatsReport> {
    let walker = TreeWalker::new();
    let lines = Utf8LineCounter::new();
    tracing::info!(root = %config.root.display(), matching = ?config.ignore_matching, "walk started");
    let report = CollectStats::new(&walker, &lines).run(&config.walk_plan())?;
    tracing::info!(
        files = report.total_files().value(),
        lines = report.total_lines().value(),
        "walk finished"
    );
    Ok(report)
}

/// Prints the banner, collects stats and prints the report to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    output::write_banner(out).context("failed to write banner")?;
    let report = collect(config).context("failed to collect stats")?;
    output::write_report(&report, out).context("failed to write report")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
