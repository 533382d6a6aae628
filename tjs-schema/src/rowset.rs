//! Tabular data: framework key rows and attribute rows.

use crate::framework::FrameworkType3;
use tjs_derive::TjsType;

/// Key values of a framework.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RowsetType")]
pub struct RowsetType {
    #[tjs(element = "Row", required)]
    row: Vec<RowType>,
}

/// One framework feature: its key and an optional title.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RowType")]
pub struct RowType {
    #[tjs(element = "K", required)]
    k: Vec<KType>,
    #[tjs(element = "Title")]
    title: Option<String>,
}

/// Attribute rows of a dataset.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RowsetType1")]
pub struct RowsetType1 {
    #[tjs(element = "Row", required)]
    row: Vec<RowType1>,
}

/// One attribute row: key values followed by attribute values.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RowType1")]
pub struct RowType1 {
    #[tjs(element = "K", required)]
    k: Vec<KType>,
    #[tjs(element = "V", required)]
    v: Vec<VType>,
}

impl RowType1 {
    /// Returns the key values of this row.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.k.iter().map(|k| k.value().unwrap_or_default())
    }

    /// Returns the attribute values, with `None` for null cells.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.v.iter().map(VType::cell)
    }
}

/// Key value.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "KType")]
pub struct KType {
    #[tjs(attribute = "aid")]
    aid: Option<String>,
    #[tjs(text)]
    value: Option<String>,
}

impl KType {
    /// Creates a key value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::default().with_value(value)
    }
}

impl From<&str> for KType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Attribute value, optionally marked null.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "VType")]
pub struct VType {
    #[tjs(attribute = "aid")]
    aid: Option<String>,
    #[tjs(attribute = "null", default = "false")]
    null: Option<bool>,
    #[tjs(text)]
    value: Option<String>,
}

impl VType {
    /// Creates an attribute value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::default().with_value(value)
    }

    /// Creates a null cell holding the given null identifier.
    #[must_use]
    pub fn null_cell(identifier: impl Into<String>) -> Self {
        Self::new(identifier).with_null(true)
    }

    /// Returns the value unless the cell is null.
    #[must_use]
    pub fn cell(&self) -> Option<&str> {
        if self.null() {
            None
        } else {
            Some(self.value().unwrap_or_default())
        }
    }
}

impl From<&str> for VType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// `GetData` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "GDASType")]
pub struct GDASType {
    #[tjs(element = "Framework", required)]
    framework: Option<FrameworkType3>,
    #[tjs(attribute = "capabilities", required)]
    capabilities: Option<String>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{DecodeOptions, Reflective, Value, XmlReader, XmlValue};

    #[test]
    fn test_row_cells() {
        let row = RowType1::default()
            .with_k("06")
            .with_v("39538223")
            .with_v(VType::null_cell("-99"));

        assert_eq!(row.keys().collect::<Vec<_>>(), ["06"]);
        assert_eq!(row.values().collect::<Vec<_>>(), [Some("39538223"), None]);
        assert_eq!(row.v()[1].value(), Some("-99"));
    }

    #[test]
    fn test_null_default() {
        let mut cell = VType::new("12");
        assert!(!cell.null());
        assert!(!cell.is_set_null());

        let value = cell
            .e_get(VType::NULL)
            .expect("Failed to get")
            .expect("default is returned");
        assert_eq!(value, Value::Boolean(false));

        cell.e_set(VType::NULL, Value::Boolean(true)).expect("Failed to set");
        assert!(cell.null());
        cell.e_unset(VType::NULL).expect("Failed to unset");
        assert!(!cell.is_set_null());
    }

    #[test]
    fn test_decode_rowset() {
        let xml = r#"<Rowset>
            <Row><K>01</K><V>4903185</V><V null="true">-99</V></Row>
            <Row><K aid="fips">02</K><V>731545</V><V>0.4</V></Row>
        </Rowset>"#;
        let mut reader = XmlReader::new(xml, DecodeOptions::new());
        let tag = reader.root().expect("Failed to parse").expect("no root");
        let rowset = RowsetType1::read_xml(&mut reader, &tag).expect("Failed to decode");

        assert_eq!(rowset.row().len(), 2);
        assert!(rowset.row()[0].v()[1].null());
        assert_eq!(rowset.row()[1].k()[0].aid(), Some("fips"));
        assert_eq!(rowset.row()[1].values().collect::<Vec<_>>(), [Some("731545"), Some("0.4")]);
    }

    #[test]
    fn test_invalid_null_literal() {
        let mut reader = XmlReader::new("<V null=\"yes\">1</V>", DecodeOptions::new());
        let tag = reader.root().expect("Failed to parse").expect("no root");
        assert!(VType::read_xml(&mut reader, &tag).is_err());
    }
}
