//! # odfgrep_text
//!
//! Text decoding for odfgrep.
//!
//! ODF streams are UTF-8 encoded regardless of the current locale, and
//! pattern matching runs over fixed-width code points. This crate provides
//! the conversion: a structural UTF-8 decoder that rejects malformed byte
//! sequences deterministically without attempting full Unicode conformance.

mod decode;
mod error;

pub use decode::{CodePointSequence, decode};
pub use error::EncodingError;
