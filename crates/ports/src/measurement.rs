// crates/ports/src/measurement.rs
use std::path::Path;

use loc_stats_shared_kernel::LineCount;

/// Port for counting the lines of one file.
///
/// Never fails: an unreadable file reports zero lines.
pub trait LineSource: Send + Sync {
    fn count_lines(&self, path: &Path) -> LineCount;
}
