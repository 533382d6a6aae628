//! Marshaling traits between schema types and XML.
//!
//! [`XmlText`] covers simple types that appear in attributes and text
//! content. [`XmlValue`] covers anything that can be a child element.

use crate::decoder::{StartTag, XmlAttribute, XmlReader};
use crate::encoder::{ElementStart, XmlWriter};
use crate::error::{Error, Result, XmlError};
use crate::types::{Decimal, QName};
use std::borrow::Cow;

/// Simple type with a lexical representation.
pub trait XmlText: Sized {
    /// Parses the lexical form.
    ///
    /// # Errors
    /// Returns an error if `text` is not in the type's lexical space.
    fn parse_text(text: &str) -> Result<Self>;

    /// Returns the canonical lexical form.
    fn to_text(&self) -> Cow<'_, str>;
}

/// Type that can be read from and written as an XML element.
pub trait XmlValue: Sized {
    /// Reads the element whose start tag was just consumed, through its end
    /// tag.
    ///
    /// # Errors
    /// Returns an error on malformed XML or invalid content.
    fn read_xml(reader: &mut XmlReader<'_>, tag: &StartTag) -> std::result::Result<Self, XmlError>;

    /// Writes the value as an element with the given name.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn write_xml(&self, writer: &mut XmlWriter, name: QName) -> std::result::Result<(), XmlError>;
}

/// Parses an attribute value for a generated decoder.
///
/// # Errors
/// Returns [`XmlError::InvalidAttribute`] if the value does not parse.
pub fn parse_attribute<T: XmlText>(
    context: &'static str,
    attribute: &XmlAttribute,
) -> std::result::Result<T, XmlError> {
    T::parse_text(&attribute.value).map_err(|source| XmlError::InvalidAttribute {
        attribute: attribute.local.clone(),
        context,
        source,
    })
}

/// Parses the text content of an element.
///
/// # Errors
/// Returns [`XmlError::InvalidContent`] if the text does not parse.
pub fn parse_content<T: XmlText>(tag: &StartTag, text: &str) -> std::result::Result<T, XmlError> {
    T::parse_text(text).map_err(|source| XmlError::InvalidContent {
        element: tag.name.clone(),
        source,
    })
}

/// Reads an element with simple content.
///
/// # Errors
/// Returns an error on malformed XML or if the content does not parse.
pub fn read_simple<T: XmlText>(
    reader: &mut XmlReader<'_>,
    tag: &StartTag,
) -> std::result::Result<T, XmlError> {
    let text = reader.read_text(tag)?;
    parse_content(tag, &text)
}

/// Writes an element with simple content.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_simple<T: XmlText>(
    value: &T,
    writer: &mut XmlWriter,
    name: QName,
) -> std::result::Result<(), XmlError> {
    writer.write_text_element(ElementStart::new(name), &value.to_text())
}

impl XmlText for String {
    fn parse_text(text: &str) -> Result<Self> {
        Ok(text.to_owned())
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl XmlText for bool {
    fn parse_text(text: &str) -> Result<Self> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(Error::invalid_value("boolean", other)),
        }
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl XmlText for u64 {
    fn parse_text(text: &str) -> Result<Self> {
        let text = text.trim();
        text.strip_prefix('+')
            .unwrap_or(text)
            .parse()
            .map_err(|_| Error::invalid_value("integer", text))
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl XmlText for Decimal {
    fn parse_text(text: &str) -> Result<Self> {
        text.parse()
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

macro_rules! simple_content {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl XmlValue for $ty {
                fn read_xml(
                    reader: &mut XmlReader<'_>,
                    tag: &StartTag,
                ) -> std::result::Result<Self, XmlError> {
                    read_simple(reader, tag)
                }

                fn write_xml(
                    &self,
                    writer: &mut XmlWriter,
                    name: QName,
                ) -> std::result::Result<(), XmlError> {
                    write_simple(self, writer, name)
                }
            }
        )+
    };
}

simple_content!(String, bool, u64, Decimal);
