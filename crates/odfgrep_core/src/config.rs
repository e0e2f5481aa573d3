//! Run configuration.
//!
//! One `SearchConfig` is built after argument parsing and shared by
//! reference for the whole run; nothing in it changes once the first
//! document begins.

use crate::action::ActionKind;
use crate::pattern::PatternFlavor;

/// When to attach the document name to output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilenameMode {
    /// Attach the name only when more than one document is searched.
    #[default]
    Auto,
    /// Never attach the name.
    Never,
    /// Always attach the name.
    Always,
}

impl FilenameMode {
    /// Resolves the policy against the number of documents in the run.
    pub fn resolve(self, document_count: usize) -> bool {
        match self {
            Self::Auto => document_count > 1,
            Self::Never => false,
            Self::Always => true,
        }
    }
}

/// Configuration for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// The pattern text as supplied on the command line or read from a file.
    pub pattern: String,
    /// Pattern syntax flavor.
    pub flavor: PatternFlavor,
    /// Whether matching ignores case distinctions.
    pub ignore_case: bool,
    /// Whether a text unit is accepted when the pattern does NOT match.
    pub invert: bool,
    /// Whether to search the metadata stream in addition to the content
    /// stream.
    pub search_meta: bool,
    /// Whether to search text under deletion markers.
    pub search_deleted: bool,
    /// Maximum number of matches per document; 0 means unbounded.
    pub max_count: u64,
    /// Filename-echo policy.
    pub filename_mode: FilenameMode,
    /// The output action invoked for accepted text units.
    pub action: ActionKind,
}

impl SearchConfig {
    /// Creates a configuration for the given pattern with default settings.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Sets the pattern syntax flavor.
    pub fn flavor(mut self, flavor: PatternFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Enables or disables case-insensitive matching.
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    /// Enables or disables match inversion.
    pub fn invert(mut self, yes: bool) -> Self {
        self.invert = yes;
        self
    }

    /// Enables or disables searching the metadata stream.
    pub fn search_meta(mut self, yes: bool) -> Self {
        self.search_meta = yes;
        self
    }

    /// Enables or disables searching deletion-marked text.
    pub fn search_deleted(mut self, yes: bool) -> Self {
        self.search_deleted = yes;
        self
    }

    /// Sets the per-document match cutoff; 0 means unbounded.
    pub fn max_count(mut self, count: u64) -> Self {
        self.max_count = count;
        self
    }

    /// Sets the filename-echo policy.
    pub fn filename_mode(mut self, mode: FilenameMode) -> Self {
        self.filename_mode = mode;
        self
    }

    /// Sets the output action.
    pub fn action(mut self, action: ActionKind) -> Self {
        self.action = action;
        self
    }
}
