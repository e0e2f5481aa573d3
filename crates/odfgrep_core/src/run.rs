//! Run orchestration.
//!
//! Documents are processed strictly sequentially. All resources for one
//! document (container handle, member buffer, parsed tree) are dropped
//! before the next document is opened. A failure on one document never
//! stops the run; only the quiet action's stop signal does that.

use std::io::Write;
use std::path::{Path, PathBuf};

use odfgrep_odf::{CONTENT_MEMBER, META_MEMBER, OdfPackage, XmlElement};
use tracing::{debug, error};

use crate::action::{Action, ActionKind, Count, EchoFile, EchoNoMatch, EchoText, Flow, Quiet};
use crate::config::SearchConfig;
use crate::engine::MatchEngine;
use crate::error::DocumentError;
use crate::pattern::{Pattern, PatternError};
use crate::status::RunStatus;
use crate::walker::{walk_content, walk_meta};

/// Searches every document in order and returns the run status.
///
/// Output is written to `out`. Pattern compilation failures surface here,
/// before any document is opened; they are the only error this function
/// returns, everything else is reported and folded into the status.
pub fn run(
    config: &SearchConfig,
    documents: &[PathBuf],
    out: &mut dyn Write,
) -> Result<RunStatus, PatternError> {
    let pattern = Pattern::compile(config)?;
    let status = match config.action {
        ActionKind::Count => run_with(config, &pattern, documents, &mut Count::new(&mut *out)),
        ActionKind::EchoText => {
            run_with(config, &pattern, documents, &mut EchoText::new(&mut *out))
        }
        ActionKind::EchoFile => {
            run_with(config, &pattern, documents, &mut EchoFile::new(&mut *out))
        }
        ActionKind::EchoNoMatch => {
            run_with(config, &pattern, documents, &mut EchoNoMatch::new(&mut *out))
        }
        ActionKind::Quiet => run_with(config, &pattern, documents, &mut Quiet),
    };
    Ok(status)
}

fn run_with<A: Action>(
    config: &SearchConfig,
    pattern: &Pattern,
    documents: &[PathBuf],
    action: &mut A,
) -> RunStatus {
    let print_filename = config.filename_mode.resolve(documents.len());
    let mut status = RunStatus::default();

    for document in documents {
        debug!("searching {}", document.display());
        let label = if print_filename {
            document.display().to_string()
        } else {
            String::new()
        };

        let mut engine = MatchEngine::new(pattern, config, action, &mut status);
        let flow = match search_document(config, document, &label, &mut engine) {
            Ok(flow) => flow,
            Err(err) => {
                error!("{}: {err}", document.display());
                engine.record_read_error();
                Flow::Continue
            }
        };
        engine.finish_document(&label);

        if flow == Flow::StopRun {
            debug!("run stopped by action");
            break;
        }
    }

    action.finish_run();
    status
}

/// Searches the streams of one document.
///
/// A stop signal from the metadata stream also skips the content stream:
/// early termination is per document, not per stream.
fn search_document<A: Action>(
    config: &SearchConfig,
    document: &Path,
    label: &str,
    engine: &mut MatchEngine<'_, A>,
) -> Result<Flow, DocumentError> {
    let mut package = OdfPackage::open(document)?;

    if config.search_meta {
        let bytes = package.read_member(META_MEMBER)?;
        let root = XmlElement::parse(&bytes)?;
        let flow = walk_meta(&root, engine, label)?;
        if flow != Flow::Continue {
            return Ok(flow);
        }
    }

    let bytes = package.read_member(CONTENT_MEMBER)?;
    let root = XmlElement::parse(&bytes)?;
    Ok(walk_content(&root, engine, label, config.search_deleted)?)
}
