//! Package and XML error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading an ODF package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The container file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the container file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The container is not a readable ZIP archive.
    #[error("{path} is not a readable document package: {source}")]
    Archive {
        /// Path of the container file.
        path: PathBuf,
        /// Underlying archive error.
        source: zip::result::ZipError,
    },

    /// The named member stream does not exist in the container.
    #[error("{path} has no member stream {name:?}")]
    MemberNotFound {
        /// Path of the container file.
        path: PathBuf,
        /// Name of the missing member.
        name: String,
    },
}

/// Errors that can occur while building an element tree.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The byte stream is not well-formed XML.
    #[error("malformed xml: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// The stream ended with elements still open.
    #[error("unexpected end of document inside <{tag}>")]
    UnclosedElement {
        /// Local name of the innermost open element.
        tag: String,
    },

    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag </{tag}>")]
    UnexpectedClose {
        /// Local name of the stray closing tag.
        tag: String,
    },

    /// A second element followed the document root.
    #[error("content after document root")]
    TrailingContent,

    /// The stream contained no root element.
    #[error("document has no root element")]
    NoRoot,
}
