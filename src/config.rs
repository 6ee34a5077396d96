// src/config.rs
use std::path::PathBuf;

use loc_stats_domain::{IgnoreMatching, IgnoreSet};
use loc_stats_ports::filesystem::WalkPlan;
use loc_stats_shared_kernel::{PresentationError, PresentationResult};

use crate::cli::Args;

/// Validated runtime settings built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub ignore_matching: IgnoreMatching,
    pub verbose: bool,
}

impl Config {
    pub fn walk_plan(&self) -> WalkPlan {
        WalkPlan::new(&self.root, IgnoreSet::default().with_matching(self.ignore_matching))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { root: PathBuf::from("."), ignore_matching: IgnoreMatching::default(), verbose: false }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        if !args.root.is_dir() {
            return Err(PresentationError::InvalidValue {
                flag: "ROOT".to_string(),
                value: args.root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(Self { root: args.root, ignore_matching: args.ignore_match.into(), verbose: args.verbose })
    }
}
