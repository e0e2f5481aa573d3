//! Pattern compilation.

use odfgrep_text::CodePointSequence;
use regex::RegexBuilder;
use thiserror::Error;

use crate::config::SearchConfig;

/// The pattern could not be compiled.
///
/// This is fatal to the whole run and surfaces before any document is
/// processed.
#[derive(Debug, Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// Pattern syntax flavor selected on the command line.
///
/// The regex engine has a single syntax, so `Basic`, `Extended` and `Perl`
/// all compile through it unchanged; only `Fixed` alters compilation. The
/// flags are still accepted and recorded so invocations written for other
/// grep tools keep working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternFlavor {
    /// Basic POSIX syntax.
    #[default]
    Basic,
    /// Extended POSIX syntax.
    Extended,
    /// Perl syntax.
    Perl,
    /// Newline-separated literal strings, no metacharacters.
    Fixed,
}

/// A compiled search pattern.
#[derive(Debug)]
pub struct Pattern {
    regex: regex::Regex,
}

impl Pattern {
    /// Compiles the configured pattern.
    ///
    /// For the `Fixed` flavor the pattern is a list of newline-separated
    /// strings; each is escaped and the list becomes an alternation. The
    /// grep-lineage flavors also treat a newline as an alternation
    /// separator, which is how a pattern file with one pattern per line
    /// turns into a single compiled pattern.
    pub fn compile(config: &SearchConfig) -> Result<Self, PatternError> {
        let source = match config.flavor {
            PatternFlavor::Fixed => config
                .pattern
                .lines()
                .map(|line| regex::escape(line))
                .collect::<Vec<_>>()
                .join("|"),
            PatternFlavor::Basic | PatternFlavor::Extended => {
                if config.pattern.contains('\n') {
                    config
                        .pattern
                        .lines()
                        .map(|line| format!("(?:{line})"))
                        .collect::<Vec<_>>()
                        .join("|")
                } else {
                    config.pattern.clone()
                }
            }
            PatternFlavor::Perl => config.pattern.clone(),
        };
        let regex = RegexBuilder::new(&source)
            .case_insensitive(config.ignore_case)
            .build()?;
        Ok(Self { regex })
    }

    /// Returns true if the pattern matches anywhere in the decoded text.
    pub fn is_match(&self, text: &CodePointSequence) -> bool {
        self.regex.is_match(&text.to_string_lossy())
    }
}
