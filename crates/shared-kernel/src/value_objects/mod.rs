// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_info;

pub use counts::{FileCount, LineCount};
pub use file_info::FileExtension;
