//! Dynamically typed feature values.
//!
//! [`Value`] is the currency of the reflective API: `e_get` returns one and
//! `e_set` consumes one. [`FieldValue`] converts between a field's static type
//! and its dynamic representation.

use crate::error::{Error, Result};
use crate::reflect::Reflective;
use crate::types::Decimal;
use std::fmt;

/// Kind of a [`Value`], used in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `xsd:string`, `xsd:anyURI` and other text.
    Text,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:nonNegativeInteger` and friends.
    Integer,
    /// `xsd:decimal`.
    Decimal,
    /// Enumeration with the given schema name.
    Enum(&'static str),
    /// Complex type with the given schema name.
    Object(&'static str),
    /// Multi-valued feature.
    List,
}

impl ValueKind {
    /// Returns true if values of this kind are contained objects.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::Decimal => f.write_str("decimal"),
            Self::Enum(name) => write!(f, "enum {name}"),
            Self::Object(name) => write!(f, "object {name}"),
            Self::List => f.write_str("list"),
        }
    }
}

/// Dynamically typed value of a feature.
#[derive(Debug)]
pub enum Value {
    /// Text value.
    Text(String),
    /// Boolean value.
    Boolean(bool),
    /// Non-negative integer value.
    Integer(u64),
    /// Decimal value.
    Decimal(Decimal),
    /// Enumeration literal.
    Enum {
        /// Schema name of the enumeration.
        type_name: &'static str,
        /// Literal of the selected value.
        literal: &'static str,
    },
    /// Contained object.
    Object(Box<dyn Reflective>),
    /// Items of a multi-valued feature, in order.
    List(Vec<Value>),
}

impl Value {
    /// Wraps a model object.
    #[must_use]
    pub fn object<T: Reflective>(object: T) -> Self {
        Self::Object(Box::new(object))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Enum { type_name, .. } => ValueKind::Enum(*type_name),
            Self::Object(object) => ValueKind::Object(object.type_name()),
            Self::List(_) => ValueKind::List,
        }
    }

    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the literal if this is an enumeration value.
    #[must_use]
    pub fn as_literal(&self) -> Option<&'static str> {
        match self {
            Self::Enum { literal, .. } => Some(*literal),
            _ => None,
        }
    }

    /// Returns the contained object if this is an object value.
    #[must_use]
    pub fn as_object(&self) -> Option<&dyn Reflective> {
        match self {
            Self::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }

    /// Returns the items if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Moves the contained object out as a concrete type.
    ///
    /// # Errors
    /// Returns the kind actually held if this is not an object of type `T`.
    pub fn downcast<T: Reflective>(self) -> std::result::Result<T, ValueKind> {
        match self {
            Self::Object(object) => {
                let found = ValueKind::Object(object.type_name());
                object
                    .into_any()
                    .downcast::<T>()
                    .map(|boxed| *boxed)
                    .map_err(|_| found)
            }
            other => Err(other.kind()),
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.clone()),
            Self::Boolean(value) => Self::Boolean(*value),
            Self::Integer(value) => Self::Integer(*value),
            Self::Decimal(value) => Self::Decimal(*value),
            Self::Enum { type_name, literal } => Self::Enum {
                type_name: *type_name,
                literal: *literal,
            },
            Self::Object(object) => Self::Object(object.clone_boxed()),
            Self::List(items) => Self::List(items.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (
                Self::Enum {
                    type_name: ta,
                    literal: la,
                },
                Self::Enum {
                    type_name: tb,
                    literal: lb,
                },
            ) => ta == tb && la == lb,
            (Self::Object(a), Self::Object(b)) => a.eq_dyn(b.as_ref()),
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// Conversion between a field's static type and [`Value`].
pub trait FieldValue: Sized + Clone {
    /// Kind every value of this type converts to.
    const KIND: ValueKind;

    /// Converts to a dynamic value.
    fn to_value(&self) -> Value;

    /// Converts from a dynamic value.
    ///
    /// # Errors
    /// Returns the kind of the rejected value.
    fn from_value(value: Value) -> std::result::Result<Self, ValueKind>;

    /// Returns this value as a contained object, if it is one.
    fn as_reflective(&self) -> Option<&dyn Reflective> {
        None
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> std::result::Result<Self, ValueKind> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(other.kind()),
        }
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, ValueKind> {
        match value {
            Value::Boolean(value) => Ok(value),
            other => Err(other.kind()),
        }
    }
}

impl FieldValue for u64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, ValueKind> {
        match value {
            Value::Integer(value) => Ok(value),
            other => Err(other.kind()),
        }
    }
}

impl FieldValue for Decimal {
    const KIND: ValueKind = ValueKind::Decimal;

    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, ValueKind> {
        match value {
            Value::Decimal(value) => Ok(value),
            Value::Integer(value) => i64::try_from(value)
                .map(|mantissa| Decimal::new(mantissa, 0))
                .map_err(|_| ValueKind::Integer),
            other => Err(other.kind()),
        }
    }
}

/// Converts a reflective value for a single-valued feature.
///
/// # Errors
/// Returns [`Error::TypeMismatch`] if the value has the wrong kind.
pub fn convert<T: FieldValue>(
    type_name: &'static str,
    feature: &'static str,
    value: Value,
) -> Result<T> {
    T::from_value(value).map_err(|found| Error::TypeMismatch {
        type_name,
        feature,
        expected: T::KIND,
        found,
    })
}

/// Converts a reflective value for a multi-valued feature.
///
/// # Errors
/// Returns [`Error::TypeMismatch`] if the value is not a list or an item
/// has the wrong kind.
pub fn convert_list<T: FieldValue>(
    type_name: &'static str,
    feature: &'static str,
    value: Value,
) -> Result<Vec<T>> {
    match value {
        Value::List(items) => items
            .into_iter()
            .map(|item| convert(type_name, feature, item))
            .collect(),
        other => Err(Error::TypeMismatch {
            type_name,
            feature,
            expected: ValueKind::List,
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::from(3u64).kind(), ValueKind::Integer);
        assert_eq!(Value::List(Vec::new()).kind(), ValueKind::List);
        assert!(ValueKind::Object("RowType").is_object());
        assert!(!ValueKind::Enum("gaussianType").is_object());
    }

    #[test]
    fn test_convert() {
        let text: String = convert("KType", "value", Value::from("NY")).expect("Failed to convert");
        assert_eq!(text, "NY");

        let err = convert::<bool>("VType", "null", Value::from("true")).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                type_name: "VType",
                feature: "null",
                expected: ValueKind::Boolean,
                found: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_convert_list() {
        let items = Value::List(vec![Value::from("a"), Value::from("b")]);
        let list: Vec<String> =
            convert_list("LanguagesType", "language", items).expect("Failed to convert");
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);

        let err =
            convert_list::<String>("LanguagesType", "language", Value::from("a")).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: ValueKind::List,
                ..
            }
        ));
    }

    #[test]
    fn test_decimal_accepts_integer() {
        let dec: Decimal = convert("BoundingCoordinatesType", "north", Value::from(45u64))
            .expect("Failed to convert");
        assert_eq!(dec, Decimal::new(45, 0));
    }
}
