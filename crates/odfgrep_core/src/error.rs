//! Search error types.

use odfgrep_odf::{PackageError, XmlError};
use odfgrep_text::EncodingError;
use thiserror::Error;

/// Errors that abort the search of one document.
///
/// Each aborts the current document only; the run continues with the next
/// document and the failure is recorded as a read error unless a later
/// document still matches.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The container could not be opened or a member stream was missing.
    #[error(transparent)]
    Package(#[from] PackageError),

    /// A member stream was not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A text unit carried malformed encoded text.
    #[error("invalid text encoding: {0}")]
    Encoding(#[from] EncodingError),
}
