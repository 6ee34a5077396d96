// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use loc_stats_domain::IgnoreSet;
use loc_stats_shared_kernel::{FileExtension, Result};

/// Input parameters controlling a walk.
#[derive(Debug, Clone)]
pub struct WalkPlan {
    pub root: PathBuf,
    pub ignore: IgnoreSet,
}

impl WalkPlan {
    pub fn new(root: impl Into<PathBuf>, ignore: IgnoreSet) -> Self {
        Self { root: root.into(), ignore }
    }
}

/// DTO for a file discovered under a non-pruned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub ext: Option<FileExtension>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ext = FileExtension::from_path(&path);
        Self { path, ext }
    }
}

/// Port for enumerating the files of a tree in traversal order.
pub trait SourceWalker: Send + Sync {
    fn collect(&self, plan: &WalkPlan) -> Result<Vec<SourceFile>>;
}
