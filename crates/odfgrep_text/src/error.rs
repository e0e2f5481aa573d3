//! Decoding error types.

use thiserror::Error;

/// Errors that can occur while decoding a UTF-8 byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A continuation byte appeared where a lead byte was expected.
    #[error("unexpected continuation byte 0x{byte:02x} at offset {offset}")]
    UnexpectedContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset into the buffer.
        offset: usize,
    },

    /// A byte matched no UTF-8 lead pattern.
    #[error("invalid lead byte 0x{byte:02x} at offset {offset}")]
    InvalidLead {
        /// The offending byte.
        byte: u8,
        /// Byte offset into the buffer.
        offset: usize,
    },

    /// A multi-byte sequence was missing a continuation byte, either because
    /// the buffer ended or because the byte at this offset was not a
    /// continuation byte.
    #[error("expected continuation byte at offset {offset}")]
    BadContinuation {
        /// Byte offset where a continuation byte was required.
        offset: usize,
    },
}

impl EncodingError {
    /// Returns the byte offset at which decoding failed.
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedContinuation { offset, .. } => offset,
            Self::InvalidLead { offset, .. } => offset,
            Self::BadContinuation { offset } => offset,
        }
    }
}
