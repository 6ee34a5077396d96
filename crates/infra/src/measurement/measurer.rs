// crates/infra/src/measurement/measurer.rs
use std::path::Path;

use loc_stats_ports::measurement::LineSource;
use loc_stats_shared_kernel::{InfraResult, InfrastructureError, LineCount};

use crate::{measurement::strategies::count_text_lines, persistence::FileReader};

/// Reads whole files as strict UTF-8 and counts their lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8LineCounter;

impl Utf8LineCounter {
    pub fn new() -> Self {
        Self
    }

    /// Counts lines, reporting why a file could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileRead`] when the file cannot be opened
    /// or read, and [`InfrastructureError::InvalidEncoding`] when its content is
    /// not valid UTF-8.
    pub fn try_count_lines(&self, path: &Path) -> InfraResult<LineCount> {
        let buf = FileReader::read_to_end(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        std::str::from_utf8(&buf)
            .map_err(|source| InfrastructureError::InvalidEncoding { path: path.to_path_buf(), source })?;
        Ok(LineCount::new(count_text_lines(&buf)))
    }
}

impl LineSource for Utf8LineCounter {
    fn count_lines(&self, path: &Path) -> LineCount {
        match self.try_count_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "unreadable file counted as zero lines");
                LineCount::zero()
            }
        }
    }
}
