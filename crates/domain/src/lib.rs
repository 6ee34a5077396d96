//! # Domain
//!
//! Pure counting rules with no filesystem access:
//!
//! - [`config`]: the tracked extension registry and the ignore set
//! - [`analytics`]: the per-extension accumulator behind the report

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;

pub use analytics::{ExtensionTally, StatsReport};
pub use config::{ExtensionRegistry, IgnoreMatching, IgnoreSet};
