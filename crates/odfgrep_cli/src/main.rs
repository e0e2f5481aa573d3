//! odfgrep CLI
//!
//! grep for OASIS Open Document Format text documents.

mod cli;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use miette::{Context, IntoDiagnostic, Result, miette};
use odfgrep_core::{RunStatus, SearchConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Exit code for command-line and pattern errors.
const USAGE_ERROR: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_ERROR),
            };
        }
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<RunStatus> {
    let (pattern, documents) = resolve_arguments(&cli)?;

    let config = SearchConfig::new(pattern)
        .flavor(cli.flavor())
        .ignore_case(cli.ignore_case)
        .invert(cli.invert_match)
        .search_meta(cli.meta)
        .search_deleted(cli.deleted)
        .max_count(cli.max_count)
        .filename_mode(cli.filename_mode())
        .action(cli.action());

    let mut stdout = std::io::stdout().lock();
    odfgrep_core::run(&config, &documents, &mut stdout).into_diagnostic()
}

/// Splits the positional arguments into the pattern and the documents.
///
/// The first positional argument is the pattern unless `-e` or `-f`
/// supplied one, in which case every positional argument is a document.
fn resolve_arguments(cli: &Cli) -> Result<(String, Vec<PathBuf>)> {
    let mut args = cli.args.iter();

    let pattern = if let Some(pattern) = &cli.regexp {
        pattern.clone()
    } else if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read pattern file {}", path.display()))?;
        text.trim_end_matches('\n').to_string()
    } else {
        args.next()
            .cloned()
            .ok_or_else(|| miette!("missing pattern"))?
    };

    let documents: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if documents.is_empty() {
        return Err(miette!("no documents to search"));
    }
    Ok((pattern, documents))
}
