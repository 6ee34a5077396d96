// crates/shared-kernel/src/value_objects/file_info.rs
use std::{fmt, path::Path};

/// Lowercased file suffix including its leading dot, e.g. `.tsx`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileExtension(String);

impl FileExtension {
    /// Wraps an already normalised suffix. Callers own the leading dot.
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into())
    }

    /// Derives the suffix from the final path component.
    ///
    /// Only the last dot counts (`app.test.js` → `.js`). A name whose only dot
    /// is the leading one (`.eslintrc`) or that ends in a dot has no suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        let idx = name.rfind('.')?;
        if idx == 0 || idx + 1 == name.len() {
            return None;
        }
        Some(Self(name[idx..].to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for FileExtension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FileExtension {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FileExtension {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
