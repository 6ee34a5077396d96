// src/output.rs
use std::io::{self, Write};

use loc_stats_domain::StatsReport;

const RULE_WIDTH: usize = 50;

/// Line printed before the walk begins.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Starting...")
}

/// Writes the totals followed by one row per extension that has lines.
pub fn write_report<W: Write>(report: &StatsReport, out: &mut W) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "Lines of Code Statistics:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total Lines: {}", report.total_lines())?;
    writeln!(out, "Total Files: {}", report.total_files())?;
    writeln!(out)?;
    writeln!(out, "Breakdown by Extension:")?;
    writeln!(out, "{rule}")?;
    for tally in report.breakdown() {
        writeln!(out, "{:<5} Files: {:>4} | Lines: {:>6}", tally.extension, tally.files, tally.lines)?;
    }
    Ok(())
}
