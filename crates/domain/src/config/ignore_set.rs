use loc_stats_shared_kernel::{DomainError, DomainResult};

/// Directory fragments pruned when nothing else is configured.
pub const DEFAULT_IGNORE_FOLDERS: [&str; 6] =
    ["build", "dist", "public", "node_modules", "server/node_modules", "server/dist"];

/// How an ignore entry is compared against a directory's relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IgnoreMatching {
    /// Prune when the relative path contains an entry anywhere, so `dist`
    /// also prunes `my-dist-files` and `distribution`.
    #[default]
    Substring,
    /// Prune only on whole `/`-separated segments: the directory name equals
    /// an entry, or the relative path ends with a multi-segment entry.
    Segment,
}

/// Read-only set of directory fragments that cut whole subtrees from a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: Vec<String>,
    matching: IgnoreMatching,
}

impl IgnoreSet {
    pub fn new<I, S>(entries: I, matching: IgnoreMatching) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed: Vec<String> = Vec::new();
        for entry in entries {
            let entry: String = entry.into();
            let entry = entry.trim_matches('/').to_string();
            // An empty fragment is a substring of every path.
            if entry.is_empty() {
                return Err(DomainError::InvalidConfiguration { reason: "ignore folder entries must not be empty".into() });
            }
            if !parsed.contains(&entry) {
                parsed.push(entry);
            }
        }
        Ok(Self { entries: parsed, matching })
    }

    pub fn with_matching(mut self, matching: IgnoreMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn matching(&self) -> IgnoreMatching {
        self.matching
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Whether a directory must be skipped together with everything below it.
    ///
    /// `name` is the directory's own name and `relative` its path from the walk
    /// root with components joined by `/`.
    pub fn should_prune(&self, name: &str, relative: &str) -> bool {
        if self.entries.iter().any(|entry| entry == name) {
            return true;
        }
        match self.matching {
            IgnoreMatching::Substring => self.entries.iter().any(|entry| relative.contains(entry.as_str())),
            IgnoreMatching::Segment => self.entries.iter().any(|entry| {
                relative == entry
                    || relative
                        .strip_suffix(entry.as_str())
                        .is_some_and(|prefix| prefix.ends_with('/'))
            }),
        }
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_IGNORE_FOLDERS.iter().map(|e| (*e).to_string()).collect(),
            matching: IgnoreMatching::default(),
        }
    }
}
