//! Error types for reflective access and XML marshaling.

use crate::value::ValueKind;
use thiserror::Error;

/// Error type for object-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Feature identifier is not defined on the type.
    #[error("type '{type_name}' has no feature with id {feature}")]
    InvalidFieldAccess {
        /// Schema name of the type.
        type_name: &'static str,
        /// Offending feature identifier.
        feature: usize,
    },

    /// No feature with the given name.
    #[error("type '{type_name}' has no feature named '{name}'")]
    UnknownFeature {
        /// Schema name of the type.
        type_name: &'static str,
        /// Requested feature name.
        name: String,
    },

    /// Reflective value does not match the feature's type.
    #[error("feature '{type_name}.{feature}' expects {expected}, found {found}")]
    TypeMismatch {
        /// Schema name of the type.
        type_name: &'static str,
        /// Feature name.
        feature: &'static str,
        /// Kind the feature stores.
        expected: ValueKind,
        /// Kind that was supplied.
        found: ValueKind,
    },

    /// Unknown enumeration literal.
    #[error("invalid literal '{literal}' for enumeration '{type_name}'")]
    InvalidLiteral {
        /// Schema name of the enumeration.
        type_name: &'static str,
        /// Rejected literal.
        literal: String,
    },

    /// Lexical form does not parse as the simple type.
    #[error("invalid {kind} value '{text}'")]
    InvalidValue {
        /// Simple type name (boolean, decimal, ...).
        kind: &'static str,
        /// Rejected text.
        text: String,
    },
}

impl Error {
    /// Creates an invalid field access error.
    #[must_use]
    pub fn invalid_field(type_name: &'static str, feature: usize) -> Self {
        Self::InvalidFieldAccess { type_name, feature }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(kind: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            text: text.into(),
        }
    }
}

/// Result type alias using the object-model error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for XML reading and writing.
#[derive(Debug, Error)]
pub enum XmlError {
    /// XML syntax error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute.
    #[error("attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Invalid character or entity reference.
    #[error("escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Element not declared by the enclosing type.
    #[error("unknown element '{element}' in '{context}'")]
    UnknownElement {
        /// Local name of the element.
        element: String,
        /// Type being decoded.
        context: &'static str,
    },

    /// Second occurrence of a single-valued element.
    #[error("duplicate element '{element}' in '{context}'")]
    DuplicateElement {
        /// Local name of the element.
        element: String,
        /// Type being decoded.
        context: &'static str,
    },

    /// Attribute not declared by the enclosing type.
    #[error("unknown attribute '{attribute}' on '{context}'")]
    UnknownAttribute {
        /// Local name of the attribute.
        attribute: String,
        /// Type being decoded.
        context: &'static str,
    },

    /// Character data where only elements are allowed.
    #[error("unexpected text '{text}' in '{context}'")]
    UnexpectedText {
        /// Offending text.
        text: String,
        /// Type being decoded.
        context: &'static str,
    },

    /// Input ended inside an element.
    #[error("unexpected end of input inside '{element}'")]
    UnexpectedEof {
        /// Element left open.
        element: String,
    },

    /// Attribute value does not parse as its declared type.
    #[error("invalid value for attribute '{attribute}' on '{context}': {source}")]
    InvalidAttribute {
        /// Local name of the attribute.
        attribute: String,
        /// Type being decoded.
        context: &'static str,
        /// Conversion failure.
        source: Error,
    },

    /// Element content does not parse as its declared type.
    #[error("invalid content in element '{element}': {source}")]
    InvalidContent {
        /// Local name of the element.
        element: String,
        /// Conversion failure.
        source: Error,
    },
}

impl XmlError {
    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: &'static str) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context,
        }
    }

    /// Creates an unknown attribute error.
    pub fn unknown_attribute(attribute: impl Into<String>, context: &'static str) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_field("RequestBaseType", 7);
        assert_eq!(
            err.to_string(),
            "type 'RequestBaseType' has no feature with id 7"
        );

        let err = Error::TypeMismatch {
            type_name: "KType",
            feature: "aid",
            expected: ValueKind::Boolean,
            found: ValueKind::Text,
        };
        assert_eq!(
            err.to_string(),
            "feature 'KType.aid' expects boolean, found text"
        );
    }

    #[test]
    fn test_xml_error_display() {
        let err = XmlError::unknown_element("Bogus", "ColumnsetType");
        assert_eq!(err.to_string(), "unknown element 'Bogus' in 'ColumnsetType'");

        let err = XmlError::InvalidContent {
            element: "North".to_string(),
            source: Error::invalid_value("decimal", "abc"),
        };
        assert!(err.to_string().contains("invalid decimal value 'abc'"));
    }
}
