//! Pull reader for TJS XML documents.
//!
//! [`XmlReader`] wraps a `quick_xml` reader and hands out owned start tags
//! and text, so generated `XmlValue` implementations can walk the document
//! without touching `quick_xml` types directly.

use crate::error::XmlError;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Options controlling XML decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    strict: bool,
}

impl DecodeOptions {
    /// Creates lenient decode options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    ///
    /// # Arguments
    /// * `strict` - Reject unknown elements, attributes and stray text
    ///   instead of skipping them
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if unknown content is rejected.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Attribute of a start tag with its value unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Namespace prefix, if any.
    pub prefix: Option<String>,
    /// Local name.
    pub local: String,
    /// Unescaped value.
    pub value: String,
}

/// Owned start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Namespace prefix, if any.
    pub prefix: Option<String>,
    /// Local name.
    pub name: String,
    /// Attributes other than namespace declarations and `xsi:*`.
    pub attributes: Vec<XmlAttribute>,
    /// Whether the tag is self-closing.
    pub empty: bool,
}

impl StartTag {
    /// Returns the attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.local == local)
            .map(|attr| attr.value.as_str())
    }
}

/// Content item of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Nested element.
    Element(StartTag),
    /// Non-whitespace character data.
    Text(String),
}

enum Node {
    Start(StartTag),
    Text(String),
    End,
    Eof,
}

/// Pull reader over an XML string.
pub struct XmlReader<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
    options: DecodeOptions,
}

impl<'a> XmlReader<'a> {
    /// Creates a reader over an XML string.
    ///
    /// # Arguments
    /// * `xml` - XML content
    /// * `options` - Decode options
    #[must_use]
    pub fn new(xml: &'a str, options: DecodeOptions) -> Self {
        Self {
            reader: Reader::from_str(xml),
            buf: Vec::new(),
            options,
        }
    }

    /// Returns the decode options.
    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Advances to the root element.
    ///
    /// # Returns
    /// The root start tag, or `None` if the document has no element.
    ///
    /// # Errors
    /// Returns an error on malformed XML or character data before the root.
    pub fn root(&mut self) -> Result<Option<StartTag>, XmlError> {
        loop {
            match self.next_node()? {
                Node::Start(tag) => return Ok(Some(tag)),
                Node::Text(text) if text.trim().is_empty() => {}
                Node::Text(text) => {
                    return Err(XmlError::UnexpectedText {
                        text,
                        context: "document",
                    });
                }
                Node::End | Node::Eof => return Ok(None),
            }
        }
    }

    /// Reads the next child of an open element.
    ///
    /// Whitespace-only text is skipped.
    ///
    /// # Arguments
    /// * `parent` - Start tag of the element being read
    ///
    /// # Returns
    /// The next child, or `None` once the parent's end tag is consumed.
    ///
    /// # Errors
    /// Returns an error on malformed XML or premature end of input.
    pub fn next_child(&mut self, parent: &StartTag) -> Result<Option<Child>, XmlError> {
        if parent.empty {
            return Ok(None);
        }
        loop {
            match self.next_node()? {
                Node::Start(tag) => return Ok(Some(Child::Element(tag))),
                Node::Text(text) if text.trim().is_empty() => {}
                Node::Text(text) => return Ok(Some(Child::Text(text))),
                Node::End => return Ok(None),
                Node::Eof => {
                    return Err(XmlError::UnexpectedEof {
                        element: parent.name.clone(),
                    });
                }
            }
        }
    }

    /// Reads the character content of an element up to its end tag.
    ///
    /// Text of nested elements is ignored, which lets mixed content such as
    /// an `Abstract` with markup collapse to its own text.
    ///
    /// # Returns
    /// The character content with whitespace preserved.
    ///
    /// # Errors
    /// Returns an error on malformed XML or premature end of input.
    pub fn read_text(&mut self, tag: &StartTag) -> Result<String, XmlError> {
        if tag.empty {
            return Ok(String::new());
        }
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.next_node()? {
                Node::Text(chunk) if depth == 0 => text.push_str(&chunk),
                Node::Text(_) => {}
                Node::Start(nested) => {
                    tracing::trace!(
                        element = %tag.name,
                        nested = %nested.name,
                        "skipping markup in text content"
                    );
                    if !nested.empty {
                        depth += 1;
                    }
                }
                Node::End if depth == 0 => break,
                Node::End => depth -= 1,
                Node::Eof => {
                    return Err(XmlError::UnexpectedEof {
                        element: tag.name.clone(),
                    });
                }
            }
        }
        Ok(text)
    }

    /// Consumes an element and everything inside it.
    ///
    /// # Errors
    /// Returns an error on malformed XML or premature end of input.
    pub fn skip(&mut self, tag: &StartTag) -> Result<(), XmlError> {
        if tag.empty {
            return Ok(());
        }
        let mut depth = 0usize;
        loop {
            match self.next_node()? {
                Node::Start(nested) if !nested.empty => depth += 1,
                Node::End if depth == 0 => return Ok(()),
                Node::End => depth -= 1,
                Node::Eof => {
                    return Err(XmlError::UnexpectedEof {
                        element: tag.name.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    /// Handles an element the enclosing type does not declare.
    ///
    /// # Errors
    /// Returns [`XmlError::UnknownElement`] in strict mode.
    pub fn unknown_element(
        &mut self,
        context: &'static str,
        tag: &StartTag,
    ) -> Result<(), XmlError> {
        if self.options.strict {
            return Err(XmlError::unknown_element(&tag.name, context));
        }
        tracing::debug!(element = %tag.name, context, "skipping unknown element");
        self.skip(tag)
    }

    /// Handles a repeated occurrence of a single-valued element.
    ///
    /// In lenient mode the repeat is skipped and the first value kept.
    ///
    /// # Errors
    /// Returns [`XmlError::DuplicateElement`] in strict mode.
    pub fn duplicate_element(
        &mut self,
        context: &'static str,
        tag: &StartTag,
    ) -> Result<(), XmlError> {
        if self.options.strict {
            return Err(XmlError::DuplicateElement {
                element: tag.name.clone(),
                context,
            });
        }
        tracing::warn!(element = %tag.name, context, "skipping repeated single-valued element");
        self.skip(tag)
    }

    /// Handles an attribute the enclosing type does not declare.
    ///
    /// # Errors
    /// Returns [`XmlError::UnknownAttribute`] in strict mode.
    pub fn unknown_attribute(
        &self,
        context: &'static str,
        attribute: &XmlAttribute,
    ) -> Result<(), XmlError> {
        if self.options.strict {
            return Err(XmlError::unknown_attribute(&attribute.local, context));
        }
        tracing::debug!(attribute = %attribute.local, context, "ignoring unknown attribute");
        Ok(())
    }

    /// Handles character data inside an element-only type.
    ///
    /// # Errors
    /// Returns [`XmlError::UnexpectedText`] in strict mode.
    pub fn unexpected_text(&self, context: &'static str, text: &str) -> Result<(), XmlError> {
        if self.options.strict {
            return Err(XmlError::UnexpectedText {
                text: text.to_owned(),
                context,
            });
        }
        tracing::debug!(context, "ignoring character data in element-only content");
        Ok(())
    }

    fn next_node(&mut self) -> Result<Node, XmlError> {
        loop {
            self.buf.clear();
            let node = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref e) => Node::Start(start_tag(e, false)?),
                Event::Empty(ref e) => Node::Start(start_tag(e, true)?),
                Event::End(_) => Node::End,
                Event::Text(ref e) => {
                    Node::Text(unescape(std::str::from_utf8(e)?)?.into_owned())
                }
                Event::CData(ref e) => Node::Text(std::str::from_utf8(e)?.to_owned()),
                Event::GeneralRef(ref e) => {
                    let name = std::str::from_utf8(e)?;
                    Node::Text(unescape(&format!("&{name};"))?.into_owned())
                }
                Event::Eof => Node::Eof,
                _ => continue,
            };
            return Ok(node);
        }
    }
}

fn split_name(name: &str) -> (Option<String>, String) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_owned()), local.to_owned()),
        None => (None, name.to_owned()),
    }
}

fn start_tag(e: &BytesStart<'_>, empty: bool) -> Result<StartTag, XmlError> {
    let (prefix, name) = split_name(std::str::from_utf8(e.name().as_ref())?);

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == "xmlns" || key.starts_with("xmlns:") || key.starts_with("xsi:") {
            continue;
        }
        let (prefix, local) = split_name(key);
        let value = unescape(std::str::from_utf8(&attr.value)?)?.into_owned();
        attributes.push(XmlAttribute {
            prefix,
            local,
            value,
        });
    }

    Ok(StartTag {
        prefix,
        name,
        attributes,
        empty,
    })
}
