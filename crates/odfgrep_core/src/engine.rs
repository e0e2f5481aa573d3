//! The match engine.
//!
//! One engine is created per document. It owns the per-document match
//! count and applies the cutoff and inversion policies before anything
//! reaches the action.

use odfgrep_text::{EncodingError, decode};
use tracing::debug;

use crate::action::{Action, Flow};
use crate::config::SearchConfig;
use crate::pattern::Pattern;
use crate::status::RunStatus;

/// Per-document match state.
///
/// The pattern and inversion flag are fixed for the run; the count starts
/// at zero for every document. The run-level status is written here and
/// nowhere else.
pub struct MatchEngine<'a, A> {
    pattern: &'a Pattern,
    invert: bool,
    max_count: u64,
    action: &'a mut A,
    status: &'a mut RunStatus,
    match_count: u64,
}

impl<'a, A: Action> MatchEngine<'a, A> {
    /// Creates an engine for one document.
    pub fn new(
        pattern: &'a Pattern,
        config: &SearchConfig,
        action: &'a mut A,
        status: &'a mut RunStatus,
    ) -> Self {
        Self {
            pattern,
            invert: config.invert,
            max_count: config.max_count,
            action,
            status,
            match_count: 0,
        }
    }

    /// Offers one text unit to the engine.
    ///
    /// The unit's bytes are decoded, matched, and on acceptance routed to
    /// the action. A decoding failure is fatal for the current document.
    pub fn offer(&mut self, text: &[u8], label: &str) -> Result<Flow, EncodingError> {
        let decoded = decode(text)?;
        let accepted = self.pattern.is_match(&decoded) != self.invert;
        if !accepted {
            return Ok(Flow::Continue);
        }
        if self.max_count != 0 && self.match_count == self.max_count {
            // Already at the cutoff: the unit is skipped without reaching
            // the action and without advancing the count.
            debug!("match cutoff reached, skipping unit");
            return Ok(Flow::Continue);
        }
        let flow = self.action.perform(text, label);
        self.status.record_match();
        self.match_count += 1;
        Ok(flow)
    }

    /// Records a failure to read the current document.
    pub fn record_read_error(&mut self) {
        self.status.record_read_error();
    }

    /// Notifies the action that the document is finished and resets the
    /// count for the next document.
    pub fn finish_document(&mut self, label: &str) {
        self.action.finish_document(label, self.match_count);
        self.match_count = 0;
    }
}
