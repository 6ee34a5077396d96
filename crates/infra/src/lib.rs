// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;

pub use filesystem::TreeWalker;
pub use measurement::Utf8LineCounter;
