use loc_stats_shared_kernel::{FileCount, FileExtension, LineCount};

use super::ExtensionTally;
use crate::config::ExtensionRegistry;

/// Per-extension and grand totals accumulated over one walk.
///
/// Counters only ever grow. Tallies keep the registry's declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    tallies: Vec<ExtensionTally>,
    total_lines: LineCount,
    total_files: FileCount,
}

impl StatsReport {
    pub fn new(registry: &ExtensionRegistry) -> Self {
        Self {
            tallies: registry.iter().cloned().map(ExtensionTally::new).collect(),
            total_lines: LineCount::zero(),
            total_files: FileCount::zero(),
        }
    }

    /// Adds a file's line count under its extension.
    ///
    /// Returns `false` and leaves every counter untouched when the extension
    /// is not tracked.
    pub fn record(&mut self, ext: &FileExtension, lines: LineCount) -> bool {
        let Some(tally) = self.tallies.iter_mut().find(|t| &t.extension == ext) else {
            return false;
        };
        tally.record(lines);
        self.total_lines += lines;
        self.total_files.increment();
        true
    }

    pub fn total_lines(&self) -> LineCount {
        self.total_lines
    }

    pub fn total_files(&self) -> FileCount {
        self.total_files
    }

    /// Every tracked extension, including ones that saw no files.
    pub fn tallies(&self) -> &[ExtensionTally] {
        &self.tallies
    }

    /// Rows for the printed breakdown: extensions with at least one line.
    pub fn breakdown(&self) -> impl Iterator<Item = &ExtensionTally> {
        self.tallies.iter().filter(|t| !t.lines.is_zero())
    }
}

impl Default for StatsReport {
    fn default() -> Self {
        Self::new(&ExtensionRegistry::default())
    }
}
