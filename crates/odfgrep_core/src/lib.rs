//! # odfgrep_core
//!
//! Core search engine for odfgrep.
//!
//! This crate provides:
//! - The immutable `SearchConfig` built once after argument parsing
//! - Pattern compilation over the `regex` crate
//! - The content walker extracting text units from a document tree
//! - The match engine applying cutoff and inversion policies
//! - The five output actions and the run orchestration
//!
//! ## Example
//!
//! ```rust,ignore
//! use odfgrep_core::{ActionKind, SearchConfig, run};
//!
//! let config = SearchConfig::new("deadline").action(ActionKind::Count);
//! let status = run(&config, &documents, &mut std::io::stdout().lock())?;
//! std::process::exit(status.exit_code().into());
//! ```

mod action;
mod config;
mod engine;
mod error;
mod pattern;
mod run;
mod status;
mod walker;

pub use action::{Action, ActionKind, Flow};
pub use config::{FilenameMode, SearchConfig};
pub use error::DocumentError;
pub use pattern::{Pattern, PatternError, PatternFlavor};
pub use run::run;
pub use status::RunStatus;
