//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use odfgrep_core::{ActionKind, FilenameMode, PatternFlavor};

const ACTION_FLAGS: [&str; 4] = ["count", "files_with_match", "files_without_match", "quiet"];
const FLAVOR_FLAGS: [&str; 4] = [
    "basic_regexp",
    "extended_regexp",
    "perl_regexp",
    "fixed_strings",
];

/// odfgrep - search for regular expressions in OpenDocument text files
#[derive(Parser)]
#[command(name = "odfgrep")]
#[command(version, about)]
#[command(
    long_about = "Each named file is opened as an OASIS Open Document Format \
document, that is, as a ZIP archive of XML streams. The main content stream \
(content.xml) is parsed and its text paragraphs are compared with PATTERN; \
matching paragraphs are printed to standard output.\n\n\
ODF documents use UTF-8 encoding, so PATTERN is also interpreted as UTF-8 \
regardless of the current locale."
)]
pub struct Cli {
    /// Pattern followed by the documents to search; the pattern is taken
    /// from -e or -f instead when one of them is given
    #[arg(value_name = "PATTERN|DOCUMENT", required = true)]
    pub args: Vec<String>,

    /// Match PATTERN; use this option if PATTERN starts with -
    #[arg(
        short = 'e',
        long = "regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub regexp: Option<String>,

    /// Read the pattern from FILE, one regexp per line
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "regexp")]
    pub file: Option<PathBuf>,

    /// Do not echo matching text, but count the number of matches per
    /// document (or with -v, non-matching text units)
    #[arg(short = 'c', long = "count", overrides_with_all = ACTION_FLAGS)]
    pub count: bool,

    /// Print only names of documents that match PATTERN
    #[arg(short = 'l', long = "files-with-match", overrides_with_all = ACTION_FLAGS)]
    pub files_with_match: bool,

    /// Print only names of documents that contain no match for PATTERN
    #[arg(short = 'L', long = "files-without-match", overrides_with_all = ACTION_FLAGS)]
    pub files_without_match: bool,

    /// Do not write anything; the exit status is 0 for a match
    #[arg(short = 'q', long = "quiet", overrides_with_all = ACTION_FLAGS)]
    pub quiet: bool,

    /// Ignore case distinctions
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Invert the match: accept text units that do not match PATTERN
    #[arg(short = 'v', long = "invert-match")]
    pub invert_match: bool,

    /// Stop reading a document after COUNT matches
    #[arg(short = 'm', long = "max-count", value_name = "COUNT", default_value_t = 0)]
    pub max_count: u64,

    /// Search the metadata stream (meta.xml) in addition to the content
    #[arg(short = 'M', long = "meta")]
    pub meta: bool,

    /// Search in deleted (tracked-changes) text
    #[arg(short = 'd', long = "deleted")]
    pub deleted: bool,

    /// PATTERN uses basic POSIX syntax
    #[arg(short = 'G', long = "basic-regexp", overrides_with_all = FLAVOR_FLAGS)]
    pub basic_regexp: bool,

    /// PATTERN uses extended POSIX syntax
    #[arg(short = 'E', long = "extended-regexp", overrides_with_all = FLAVOR_FLAGS)]
    pub extended_regexp: bool,

    /// PATTERN uses Perl syntax
    #[arg(short = 'P', long = "perl-regexp", overrides_with_all = FLAVOR_FLAGS)]
    pub perl_regexp: bool,

    /// PATTERN is a list of newline-separated strings, not regexps
    #[arg(short = 'F', long = "fixed-strings", overrides_with_all = FLAVOR_FLAGS)]
    pub fixed_strings: bool,

    /// Print the document name even if only one document is named
    #[arg(short = 'H', long = "with-filename", overrides_with = "no_filename")]
    pub with_filename: bool,

    /// Do not print document names, even if several documents are named
    #[arg(long = "no-filename", overrides_with = "with_filename")]
    pub no_filename: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the selected output action; the last action flag wins.
    pub fn action(&self) -> ActionKind {
        if self.count {
            ActionKind::Count
        } else if self.files_with_match {
            ActionKind::EchoFile
        } else if self.files_without_match {
            ActionKind::EchoNoMatch
        } else if self.quiet {
            ActionKind::Quiet
        } else {
            ActionKind::EchoText
        }
    }

    /// Returns the selected pattern flavor; the last flavor flag wins.
    pub fn flavor(&self) -> PatternFlavor {
        if self.extended_regexp {
            PatternFlavor::Extended
        } else if self.perl_regexp {
            PatternFlavor::Perl
        } else if self.fixed_strings {
            PatternFlavor::Fixed
        } else {
            PatternFlavor::Basic
        }
    }

    /// Returns the filename-echo policy.
    pub fn filename_mode(&self) -> FilenameMode {
        if self.with_filename {
            FilenameMode::Always
        } else if self.no_filename {
            FilenameMode::Never
        } else {
            FilenameMode::Auto
        }
    }
}
