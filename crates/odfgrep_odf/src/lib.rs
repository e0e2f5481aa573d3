//! # odfgrep_odf
//!
//! ODF package access and XML element trees for odfgrep.
//!
//! An OASIS Open Document Format document is a ZIP archive of XML streams.
//! This crate provides:
//! - `OdfPackage`: opening a document container and bulk-reading a named
//!   member stream
//! - `XmlElement`: a navigable element tree built from the member bytes,
//!   exposing tag names, attributes, children in document order, and
//!   flattened text content
//!
//! The search engine in `odfgrep_core` consumes both through these types
//! only; no ZIP or XML detail leaks past this crate.

mod element;
mod error;
mod package;

pub use element::{XmlElement, XmlNode};
pub use error::{PackageError, XmlError};
pub use package::{CONTENT_MEMBER, META_MEMBER, OdfPackage};
