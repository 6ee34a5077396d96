use loc_stats_shared_kernel::{DomainError, DomainResult, FileExtension};

/// Extensions tracked when nothing else is configured, in report order.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".js", ".ts", ".tsx", ".css", ".html"];

/// Ordered set of file suffixes whose lines are counted.
///
/// Declaration order is preserved because the breakdown is printed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRegistry {
    extensions: Vec<FileExtension>,
}

impl ExtensionRegistry {
    /// Builds a registry from dotted suffixes such as `.js`.
    ///
    /// Suffixes are lowercased. A suffix without a leading dot, a bare dot, or
    /// a repeated suffix is rejected.
    pub fn new<I, S>(extensions: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<FileExtension> = Vec::new();
        for raw in extensions {
            let raw = raw.as_ref();
            if !raw.starts_with('.') || raw.len() < 2 || raw[1..].contains('.') {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("extension '{raw}' must be a single dotted suffix like '.js'"),
                });
            }
            let ext = FileExtension::new(raw.to_lowercase());
            if parsed.contains(&ext) {
                return Err(DomainError::InvalidConfiguration { reason: format!("extension '{raw}' listed twice") });
            }
            parsed.push(ext);
        }
        Ok(Self { extensions: parsed })
    }

    pub fn contains(&self, ext: &FileExtension) -> bool {
        self.extensions.contains(ext)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileExtension> {
        self.extensions.iter()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self { extensions: DEFAULT_EXTENSIONS.iter().map(|e| FileExtension::new(*e)).collect() }
    }
}
