pub mod ignore_set;
pub mod registry;

pub use ignore_set::{IgnoreMatching, IgnoreSet};
pub use registry::ExtensionRegistry;
