//! Simple-content types shared by frameworks, datasets and value domains.

use tjs_derive::TjsType;

/// Free-text description, possibly spanning several paragraphs.
///
/// Markup nested in the element is flattened to its own text on decode.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AbstractType")]
pub struct AbstractType {
    #[tjs(text)]
    value: Option<String>,
}

impl AbstractType {
    /// Creates an abstract with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().with_value(text)
    }
}

impl From<&str> for AbstractType {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Reference date of a framework or dataset, optionally a period.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ReferenceDateType")]
pub struct ReferenceDateType {
    #[tjs(attribute = "startDate")]
    start_date: Option<String>,
    #[tjs(text)]
    value: Option<String>,
}

impl ReferenceDateType {
    /// Creates a reference date.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self::default().with_value(date)
    }
}

/// Link to a `DescribeDatasets` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeDatasetsRequestType")]
pub struct DescribeDatasetsRequestType {
    #[tjs(attribute = "xlink:href", required)]
    href: Option<String>,
}

/// Link to a `DescribeData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeDataRequestType")]
pub struct DescribeDataRequestType {
    #[tjs(attribute = "xlink:href", required)]
    href: Option<String>,
}

/// Link to a `GetData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "GetDataRequestType")]
pub struct GetDataRequestType {
    #[tjs(attribute = "xlink:href", required)]
    href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{DecodeOptions, EncodeOptions, Namespace, QName, XmlReader, XmlValue, XmlWriter};

    fn write<T: XmlValue>(value: &T, local: &'static str) -> String {
        let mut writer = XmlWriter::new(
            EncodeOptions::new()
                .with_indent(None)
                .with_declaration(false)
                .with_prefix(Namespace::Tjs, ""),
        );
        value
            .write_xml(&mut writer, QName::tjs(local))
            .expect("Failed to write");
        writer.finish().expect("Failed to finish")
    }

    fn read<T: XmlValue>(xml: &str) -> T {
        let mut reader = XmlReader::new(xml, DecodeOptions::new());
        let tag = reader.root().expect("Failed to parse").expect("no root");
        T::read_xml(&mut reader, &tag).expect("Failed to parse")
    }

    #[test]
    fn test_abstract_flattens_markup() {
        let value: AbstractType = read("<Abstract>Counts of <b>people</b> by state</Abstract>");
        assert_eq!(value.value(), Some("Counts of  by state"));
    }

    #[test]
    fn test_reference_date_attribute_and_text() {
        let date = ReferenceDateType::new("2001-12-31").with_start_date("2001-01-01");
        let xml = write(&date, "ReferenceDate");
        assert!(xml.contains("startDate=\"2001-01-01\""));
        assert!(xml.ends_with(">2001-12-31</ReferenceDate>"));

        let back: ReferenceDateType = read(&xml);
        assert_eq!(back, date);
    }

    #[test]
    fn test_empty_text_stays_unset() {
        let value: AbstractType = read("<Abstract/>");
        assert!(!value.is_set_value());
        assert!(write(&value, "Abstract").ends_with("/>"));
    }

    #[test]
    fn test_href_is_xlink_qualified() {
        let link = GetDataRequestType::default()
            .with_href("http://example.org/tjs?request=GetData");
        let xml = write(&link, "GetDataRequest");
        assert!(xml.contains("xlink:href=\"http://example.org/tjs?request=GetData\""));

        let back: GetDataRequestType = read(&xml);
        assert_eq!(back.href(), Some("http://example.org/tjs?request=GetData"));
    }
}
