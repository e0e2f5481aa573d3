//! The content walker.
//!
//! Extracts text units from a parsed document tree in document order and
//! offers each one to the match engine. A stop signal from the engine
//! propagates out of every enclosing recursive call; no further node is
//! visited.

use odfgrep_odf::XmlElement;
use odfgrep_text::EncodingError;

use crate::action::{Action, Flow};
use crate::engine::MatchEngine;

const PARAGRAPH_TAG: &str = "p";
const HEADING_TAG: &str = "h";
const DELETION_TAG: &str = "deletion";
const BODY_TAG: &str = "body";
const TEXT_TAG: &str = "text";
const META_TAG: &str = "meta";

/// Walks the main content tree.
///
/// The searchable text lives under the `text` element of the `body`
/// element; a document without either simply yields no units.
pub fn walk_content<A: Action>(
    root: &XmlElement,
    engine: &mut MatchEngine<'_, A>,
    label: &str,
    search_deleted: bool,
) -> Result<Flow, EncodingError> {
    let Some(body) = root.child(BODY_TAG) else {
        return Ok(Flow::Continue);
    };
    let Some(text) = body.child(TEXT_TAG) else {
        return Ok(Flow::Continue);
    };
    walk_node(text, engine, label, search_deleted)
}

/// Recursive pre-order descent below the `text` element.
///
/// Paragraphs and headings each yield exactly one text unit from their
/// flattened content; sections, tables, lists and the like are descended
/// into. Deletion markers hold tracked-changes content and are skipped
/// unless deleted-text search is enabled.
fn walk_node<A: Action>(
    parent: &XmlElement,
    engine: &mut MatchEngine<'_, A>,
    label: &str,
    search_deleted: bool,
) -> Result<Flow, EncodingError> {
    for child in parent.children() {
        match child.name() {
            PARAGRAPH_TAG | HEADING_TAG => {
                let text = child.text_content();
                let flow = engine.offer(text.as_bytes(), label)?;
                if flow != Flow::Continue {
                    return Ok(flow);
                }
            }
            DELETION_TAG if !search_deleted => {}
            _ => {
                let flow = walk_node(child, engine, label, search_deleted)?;
                if flow != Flow::Continue {
                    return Ok(flow);
                }
            }
        }
    }
    Ok(Flow::Continue)
}

/// Walks the metadata tree.
///
/// Each immediate child of the `meta` element is one text unit; its label
/// is the document label suffixed with the field's tag name.
pub fn walk_meta<A: Action>(
    root: &XmlElement,
    engine: &mut MatchEngine<'_, A>,
    label: &str,
) -> Result<Flow, EncodingError> {
    let Some(meta) = root.child(META_TAG) else {
        return Ok(Flow::Continue);
    };
    for field in meta.children() {
        let text = field.text_content();
        let field_label = if label.is_empty() {
            String::new()
        } else {
            format!("{label}<{}>", field.name())
        };
        let flow = engine.offer(text.as_bytes(), &field_label)?;
        if flow != Flow::Continue {
            return Ok(flow);
        }
    }
    Ok(Flow::Continue)
}
