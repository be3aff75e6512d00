use std::fmt;

/// What the rename pipeline does with instances no rule recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum UnmatchedPolicy {
    /// Leave the file out of the output tree
    #[default]
    Skip,
    /// Copy the file unrenamed into the study's unclassified folder
    Passthrough,
}

impl UnmatchedPolicy {
    pub fn simple_name(&self) -> &'static str {
        match self {
            UnmatchedPolicy::Skip => "skip",
            UnmatchedPolicy::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for UnmatchedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Configuration for the rename pipeline
///
/// # Example
///
/// ```
/// use mrseries_core::{RenameOptions, UnmatchedPolicy};
///
/// let options = RenameOptions::default()
///     .unmatched(UnmatchedPolicy::Passthrough)
///     .threads(Some(4))
///     .dry_run(true);
///
/// assert_eq!(options.unmatched, UnmatchedPolicy::Passthrough);
/// assert_eq!(options.threads, Some(4));
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct RenameOptions {
    /// Handling of `NoMatch` instances
    pub unmatched: UnmatchedPolicy,

    /// Replace files already present at the destination
    pub overwrite: bool,

    /// Compute destinations without touching the filesystem
    pub dry_run: bool,

    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,

    /// Folder name used for passthrough copies
    pub unclassified_dir: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            unmatched: UnmatchedPolicy::Skip,
            overwrite: false,
            dry_run: false,
            threads: None,
            unclassified_dir: "UNCLASSIFIED".to_string(),
        }
    }
}

impl RenameOptions {
    /// Builder: Set the unmatched policy
    pub fn unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// Builder: Replace existing destination files
    ///
    /// # Example
    ///
    /// ```
    /// use mrseries_core::RenameOptions;
    ///
    /// let options = RenameOptions::default().overwrite(true);
    /// assert!(options.overwrite);
    /// ```
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Builder: Plan only
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builder: Set the worker thread count
    ///
    /// Zero is treated like `None`.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|n| *n > 0);
        self
    }

    /// Builder: Set the passthrough folder name
    pub fn unclassified_dir(mut self, name: &str) -> Self {
        self.unclassified_dir = name.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenameOptions::default();
        assert_eq!(options.unmatched, UnmatchedPolicy::Skip);
        assert!(!options.overwrite);
        assert!(!options.dry_run);
        assert_eq!(options.threads, None);
        assert_eq!(options.unclassified_dir, "UNCLASSIFIED");
    }

    #[test]
    fn test_zero_threads_means_default_pool() {
        let options = RenameOptions::default().threads(Some(0));
        assert_eq!(options.threads, None);
    }

    #[test]
    fn test_builder_pattern() {
        let options = RenameOptions::default()
            .unmatched(UnmatchedPolicy::Passthrough)
            .overwrite(true)
            .unclassified_dir("OTHER");

        assert_eq!(options.unmatched, UnmatchedPolicy::Passthrough);
        assert!(options.overwrite);
        assert_eq!(options.unclassified_dir, "OTHER");
    }
}
