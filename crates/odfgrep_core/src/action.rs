//! Output actions.
//!
//! One action is active for an entire run. The match engine invokes it for
//! every accepted text unit and at end of document and end of run; the
//! returned `Flow` drives the walker's early termination and, for the quiet
//! action, aborts the remaining documents outright.

use std::io::Write;

/// Control-flow signal returned by an action.
///
/// The quiet action's historical in-place process exit is expressed as
/// `StopRun` bubbling up through the engine and run loop, so callers and
/// tests observe it without the process ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep searching the current document.
    Continue,
    /// Stop searching the current document, move to the next.
    StopDocument,
    /// Stop the run; no further document is opened.
    StopRun,
}

/// Which output action a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionKind {
    /// Print the number of matches per document.
    Count,
    /// Print every matching text unit.
    #[default]
    EchoText,
    /// Print only the names of documents that match.
    EchoFile,
    /// Print only the names of documents that do not match.
    EchoNoMatch,
    /// Print nothing; only the exit status reports the outcome.
    Quiet,
}

/// Behavior invoked when a text unit is accepted.
pub trait Action {
    /// Handles one accepted text unit.
    ///
    /// `text` is the original encoded text of the unit and `label` its
    /// qualifying label (empty when filenames are suppressed).
    fn perform(&mut self, text: &[u8], label: &str) -> Flow;

    /// Called once per document after its search finishes or aborts, with
    /// the number of accepted units.
    fn finish_document(&mut self, label: &str, count: u64) {
        let _ = (label, count);
    }

    /// Called exactly once after the last document.
    fn finish_run(&mut self) {}
}

/// Counts matches per document; output happens at end of document.
pub struct Count<W> {
    out: W,
}

impl<W: Write> Count<W> {
    /// Creates the action writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Action for Count<W> {
    fn perform(&mut self, _text: &[u8], _label: &str) -> Flow {
        Flow::Continue
    }

    fn finish_document(&mut self, label: &str, count: u64) {
        if label.is_empty() {
            let _ = writeln!(self.out, "{count}");
        } else {
            let _ = writeln!(self.out, "{label}: {count}");
        }
    }
}

/// Echoes every accepted text unit.
pub struct EchoText<W> {
    out: W,
}

impl<W: Write> EchoText<W> {
    /// Creates the action writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Action for EchoText<W> {
    fn perform(&mut self, text: &[u8], label: &str) -> Flow {
        if !label.is_empty() {
            let _ = write!(self.out, "{label}: ");
        }
        let _ = self.out.write_all(text);
        let _ = self.out.write_all(b"\n");
        Flow::Continue
    }
}

/// Echoes the document name once; presence is all that matters.
pub struct EchoFile<W> {
    out: W,
}

impl<W: Write> EchoFile<W> {
    /// Creates the action writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Action for EchoFile<W> {
    fn perform(&mut self, _text: &[u8], label: &str) -> Flow {
        let _ = writeln!(self.out, "{label}");
        Flow::StopDocument
    }
}

/// Echoes the names of documents with no accepted unit.
pub struct EchoNoMatch<W> {
    out: W,
}

impl<W: Write> EchoNoMatch<W> {
    /// Creates the action writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Action for EchoNoMatch<W> {
    fn perform(&mut self, _text: &[u8], _label: &str) -> Flow {
        // One accepted unit settles the question for this document.
        Flow::StopDocument
    }

    fn finish_document(&mut self, label: &str, count: u64) {
        if count == 0 {
            let _ = writeln!(self.out, "{label}");
        }
    }
}

/// Writes nothing; the first accepted unit ends the run.
pub struct Quiet;

impl Action for Quiet {
    fn perform(&mut self, _text: &[u8], _label: &str) -> Flow {
        Flow::StopRun
    }
}
