use loc_stats_domain::{ExtensionRegistry, StatsReport};
use loc_stats_ports::{
    filesystem::{SourceWalker, WalkPlan},
    measurement::LineSource,
};
use loc_stats_shared_kernel::{ApplicationError, Result};

/// Walks a tree once and tallies lines and files per tracked extension.
pub struct CollectStats<'a> {
    walker: &'a dyn SourceWalker,
    lines: &'a dyn LineSource,
    registry: ExtensionRegistry,
}

impl<'a> CollectStats<'a> {
    pub fn new(walker: &'a dyn SourceWalker, lines: &'a dyn LineSource) -> Self {
        Self { walker, lines, registry: ExtensionRegistry::default() }
    }

    pub fn with_registry(mut self, registry: ExtensionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Files are read one at a time in walk order. Untracked files are never
    /// opened, and an unreadable tracked file still counts with zero lines.
    pub fn run(&self, plan: &WalkPlan) -> Result<StatsReport> {
        tracing::debug!(root = %plan.root.display(), "collecting stats");
        let files = self.walker.collect(plan).map_err(|e| ApplicationError::FileCollectionFailed {
            reason: format!("cannot walk '{}'", plan.root.display()),
            source: Some(Box::new(e)),
        })?;

        let mut report = StatsReport::new(&self.registry);
        for file in &files {
            let Some(ext) = file.ext.as_ref().filter(|ext| self.registry.contains(ext)) else {
                continue;
            };
            let lines = self.lines.count_lines(&file.path);
            report.record(ext, lines);
        }

        tracing::info!(
            scanned = files.len(),
            counted = report.total_files().value(),
            lines = report.total_lines().value(),
            "stats collected"
        );
        Ok(report)
    }
}
