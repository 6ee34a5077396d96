// src/version.rs

/// Version reported by `--version`, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
