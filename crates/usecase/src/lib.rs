//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: walk the tree, count tracked files, accumulate totals
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::CollectStats;
