use loc_stats_shared_kernel::{FileCount, FileExtension, LineCount};

/// Running totals for one tracked extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTally {
    pub extension: FileExtension,
    pub lines: LineCount,
    pub files: FileCount,
}

impl ExtensionTally {
    pub fn new(extension: FileExtension) -> Self {
        Self { extension, lines: LineCount::zero(), files: FileCount::zero() }
    }

    /// Adds one file. The file counts even when it contributed no lines.
    pub fn record(&mut self, lines: LineCount) {
        self.lines += lines;
        self.files.increment();
    }
}
