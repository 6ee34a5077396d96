//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal that honours the ignore set
//! - [`measurement`]: reading a file and counting its lines
//!
//! The use cases depend on these traits only, never on the adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
