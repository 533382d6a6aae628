//! XML writer for TJS documents.

use crate::error::XmlError;
use crate::types::{Namespace, QName};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Options controlling XML encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    indent: Option<usize>,
    declaration: bool,
    tjs_prefix: String,
    ows_prefix: String,
    xlink_prefix: String,
    schema_location: Option<String>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
            tjs_prefix: "tjs".to_string(),
            ows_prefix: "ows".to_string(),
            xlink_prefix: "xlink".to_string(),
            schema_location: None,
        }
    }
}

impl EncodeOptions {
    /// Creates the default options: two-space indent, XML declaration and
    /// the conventional `tjs`, `ows` and `xlink` prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width, `None` for compact output.
    #[must_use]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables the `<?xml ...?>` declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Sets the prefix bound to a namespace.
    ///
    /// An empty TJS prefix makes TJS the default namespace.
    ///
    /// # Arguments
    /// * `namespace` - Namespace to bind
    /// * `prefix` - Prefix to use
    #[must_use]
    pub fn with_prefix(mut self, namespace: Namespace, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        match namespace {
            Namespace::Tjs => self.tjs_prefix = prefix,
            Namespace::Ows => self.ows_prefix = prefix,
            Namespace::Xlink => self.xlink_prefix = prefix,
            Namespace::Unqualified => {}
        }
        self
    }

    /// Adds an `xsi:schemaLocation` attribute to the root element.
    #[must_use]
    pub fn with_schema_location(mut self, location: impl Into<String>) -> Self {
        self.schema_location = Some(location.into());
        self
    }

    /// Returns the indentation width.
    #[must_use]
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Returns the prefix bound to a namespace.
    #[must_use]
    pub fn prefix(&self, namespace: Namespace) -> Option<&str> {
        match namespace {
            Namespace::Unqualified => None,
            Namespace::Tjs => Some(&self.tjs_prefix),
            Namespace::Ows => Some(&self.ows_prefix),
            Namespace::Xlink => Some(&self.xlink_prefix),
        }
    }
}

/// Start tag being assembled by an `XmlValue` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStart {
    name: QName,
    attributes: Vec<(QName, String)>,
}

impl ElementStart {
    /// Creates a start tag without attributes.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn push_attribute(&mut self, name: QName, value: impl Into<String>) {
        self.attributes.push((name, value.into()));
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> QName {
        self.name
    }
}

/// XML writer that resolves namespace prefixes from [`EncodeOptions`].
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
    options: EncodeOptions,
    root_written: bool,
}

impl XmlWriter {
    /// Creates a writer.
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        let writer = match options.indent {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };
        Self {
            writer,
            options,
            root_written: false,
        }
    }

    /// Returns the encode options.
    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Writes the XML declaration if enabled.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_declaration(&mut self) -> Result<(), XmlError> {
        if self.options.declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        Ok(())
    }

    /// Writes a start tag.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_start(&mut self, start: ElementStart) -> Result<(), XmlError> {
        let tag = self.start_tag(start);
        self.writer.write_event(Event::Start(tag))?;
        Ok(())
    }

    /// Writes a self-closing tag.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_empty(&mut self, start: ElementStart) -> Result<(), XmlError> {
        let tag = self.start_tag(start);
        self.writer.write_event(Event::Empty(tag))?;
        Ok(())
    }

    /// Writes escaped character data.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_text(&mut self, text: &str) -> Result<(), XmlError> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Writes an end tag.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_end(&mut self, name: QName) -> Result<(), XmlError> {
        let name = self.qualify(name);
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes an element with simple content, self-closing if `text` is
    /// empty.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_text_element(&mut self, start: ElementStart, text: &str) -> Result<(), XmlError> {
        if text.is_empty() {
            return self.write_empty(start);
        }
        let name = start.name;
        self.write_start(start)?;
        self.write_text(text)?;
        self.write_end(name)
    }

    /// Returns the document written so far.
    ///
    /// # Errors
    /// Returns an error if the output is not valid UTF-8.
    pub fn finish(self) -> Result<String, XmlError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| XmlError::Utf8(e.utf8_error()))
    }

    fn qualify(&self, name: QName) -> String {
        match self.options.prefix(name.namespace) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", name.local),
            _ => name.local.to_string(),
        }
    }

    fn start_tag(&mut self, start: ElementStart) -> BytesStart<'static> {
        let mut tag = BytesStart::new(self.qualify(start.name));
        if !self.root_written {
            self.root_written = true;
            for namespace in [Namespace::Tjs, Namespace::Ows, Namespace::Xlink] {
                let (Some(prefix), Some(uri)) = (self.options.prefix(namespace), namespace.uri())
                else {
                    continue;
                };
                let key = if prefix.is_empty() {
                    "xmlns".to_string()
                } else {
                    format!("xmlns:{prefix}")
                };
                tag.push_attribute((key.as_str(), uri));
            }
            if let Some(location) = &self.options.schema_location {
                tag.push_attribute(("xmlns:xsi", Namespace::XSI_URI));
                tag.push_attribute(("xsi:schemaLocation", location.as_str()));
            }
        }
        for (name, value) in &start.attributes {
            let key = self.qualify(*name);
            tag.push_attribute((key.as_str(), value.as_str()));
        }
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> EncodeOptions {
        EncodeOptions::new()
            .with_indent(None)
            .with_declaration(false)
    }

    #[test]
    fn test_root_declares_namespaces() {
        let mut writer = XmlWriter::new(compact());
        let mut start = ElementStart::new(QName::tjs("Status"));
        start.push_attribute(QName::new(Namespace::Xlink, "href"), "http://example.com/s");
        writer.write_start(start).expect("Failed to write");
        writer
            .write_empty(ElementStart::new(QName::tjs("Completed")))
            .expect("Failed to write");
        writer.write_end(QName::tjs("Status")).expect("Failed to write");
        let xml = writer.finish().expect("Failed to finish");

        assert_eq!(
            xml,
            "<tjs:Status xmlns:tjs=\"http://www.opengis.net/tjs/1.0\" \
             xmlns:ows=\"http://www.opengis.net/ows/1.1\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             xlink:href=\"http://example.com/s\"><tjs:Completed/></tjs:Status>"
        );
    }

    #[test]
    fn test_default_namespace_and_escaping() {
        let options = compact().with_prefix(Namespace::Tjs, "");
        let mut writer = XmlWriter::new(options);
        let mut start = ElementStart::new(QName::tjs("Parameter"));
        start.push_attribute(QName::new(Namespace::Unqualified, "name"), "a<b");
        writer
            .write_text_element(start, "x & y")
            .expect("Failed to write");
        let xml = writer.finish().expect("Failed to finish");

        assert!(xml.starts_with("<Parameter xmlns=\"http://www.opengis.net/tjs/1.0\""));
        assert!(xml.contains("name=\"a&lt;b\""));
        assert!(xml.ends_with(">x &amp; y</Parameter>"));
    }

    #[test]
    fn test_declaration_and_schema_location() {
        let options = EncodeOptions::new()
            .with_indent(None)
            .with_schema_location("http://www.opengis.net/tjs/1.0 tjsAll.xsd");
        let mut writer = XmlWriter::new(options);
        writer.write_declaration().expect("Failed to write");
        writer
            .write_empty(ElementStart::new(QName::tjs("Failed")))
            .expect("Failed to write");
        let xml = writer.finish().expect("Failed to finish");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xsi:schemaLocation=\"http://www.opengis.net/tjs/1.0 tjsAll.xsd\""));
    }

    #[test]
    fn test_empty_text_element_is_self_closing() {
        let mut writer = XmlWriter::new(compact());
        writer
            .write_text_element(ElementStart::new(QName::tjs("Title")), "")
            .expect("Failed to write");
        let xml = writer.finish().expect("Failed to finish");
        assert!(xml.ends_with("/>"));
    }
}
