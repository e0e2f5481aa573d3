//! XML element trees.
//!
//! The tree is built from `quick-xml`'s pull events. Namespace prefixes
//! are stripped at parse time: ODF role dispatch (`p`, `h`, `deletion`,
//! `body`, `text`, `meta`) keys on local names only.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

use crate::error::XmlError;

/// One child of an element: a nested element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(XmlElement),
    /// Character data, entity references resolved.
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Parses a byte buffer into the document's root element.
    pub fn parse(bytes: &[u8]) -> Result<XmlElement, XmlError> {
        let mut reader = Reader::from_reader(bytes);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(Self::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Event::End(end) => {
                    let Some(element) = stack.pop() else {
                        return Err(XmlError::UnexpectedClose {
                            tag: local_name(end.name()),
                        });
                    };
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    if let Some(open) = stack.last_mut() {
                        open.children
                            .push(XmlNode::Text(text.unescape()?.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if let Some(open) = stack.last_mut() {
                        open.children.push(XmlNode::Text(
                            String::from_utf8_lossy(data.as_ref()).into_owned(),
                        ));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and
                // doctypes carry no searchable content.
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::UnclosedElement {
                tag: open.name.clone(),
            });
        }
        root.ok_or(XmlError::NoRoot)
    }

    /// Returns the element's local tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute value by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns all children (elements and text) in document order.
    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates over element children in document order.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Returns the first element child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children().find(|child| child.name == name)
    }

    /// Flattens the element's text content: every descendant text run
    /// concatenated in document order, markup ignored.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(XmlElement {
            name: local_name(start.name()),
            attributes,
            children: Vec::new(),
        })
    }

    fn attach(
        element: XmlElement,
        stack: &mut Vec<XmlElement>,
        root: &mut Option<XmlElement>,
    ) -> Result<(), XmlError> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(XmlNode::Element(element));
        } else if root.is_none() {
            *root = Some(element);
        } else {
            return Err(XmlError::TrailingContent);
        }
        Ok(())
    }
}

fn local_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}
