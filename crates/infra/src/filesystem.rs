// crates/infra/src/filesystem.rs
use std::{
    io,
    path::{Component, Path},
};

use ignore::{DirEntry, WalkBuilder};
use loc_stats_ports::filesystem::{SourceFile, SourceWalker, WalkPlan};
use loc_stats_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `SourceWalker` port.
///
/// The walk is sequential and sorted by file name. Hidden entries are
/// included and ignore files (`.gitignore`, `.ignore`) are not consulted; only
/// the plan's ignore set prunes directories. Directory symlinks are never
/// entered.
#[derive(Debug, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }
}

impl SourceWalker for TreeWalker {
    fn collect(&self, plan: &WalkPlan) -> Result<Vec<SourceFile>> {
        walk_plan(plan)
    }
}

fn walk_plan(plan: &WalkPlan) -> Result<Vec<SourceFile>> {
    ensure_directory(&plan.root)?;

    let mut builder = WalkBuilder::new(&plan.root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let root = plan.root.clone();
    let ignore = plan.ignore.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let relative = relative_key(&root, entry.path());
        if ignore.should_prune(&name, &relative) {
            tracing::debug!(dir = %relative, "pruned ignored directory");
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "walk error skipped");
                continue;
            }
        };
        if entry.depth() > 0 && is_countable_file(&entry) {
            files.push(SourceFile::new(entry.into_path()));
        }
    }
    Ok(files)
}

fn ensure_directory(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|source| InfrastructureError::FileSystemOperation {
        operation: "walk".to_string(),
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::FileSystemOperation {
            operation: "walk".to_string(),
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        }
        .into());
    }
    Ok(())
}

// Regular files and symlinks that do not lead to a directory. A dangling link
// stays a candidate and later reads as zero lines. FIFOs, sockets and devices
// are dropped so that reading never blocks.
fn is_countable_file(entry: &DirEntry) -> bool {
    let Some(ft) = entry.file_type() else {
        return false;
    };
    if ft.is_file() {
        return true;
    }
    if !ft.is_symlink() {
        return false;
    }
    match std::fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(_) => true,
    }
}

/// Path of `path` below `root` with components joined by `/`.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
