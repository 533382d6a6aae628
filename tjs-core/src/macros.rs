//! Declarative macro for schema enumerations.

/// Declares a schema enumeration with its XML literals.
///
/// The first variant is the default value, matching the first literal of the
/// schema enumeration. The generated type implements [`FieldValue`],
/// [`XmlText`] and [`XmlValue`] so it can be used as a feature of a derived
/// schema type.
///
/// [`FieldValue`]: crate::value::FieldValue
/// [`XmlText`]: crate::codec::XmlText
/// [`XmlValue`]: crate::codec::XmlValue
///
/// # Example
/// ```
/// tjs_core::xml_enum! {
///     /// Kind of values in a column.
///     pub enum Purpose : "PurposeType" {
///         /// Spatial key.
///         SpatialComponentIdentifier = "SpatialComponentIdentifier",
///         /// Attribute value.
///         Attribute = "Attribute",
///     }
/// }
///
/// assert_eq!(Purpose::default(), Purpose::SpatialComponentIdentifier);
/// assert_eq!("Attribute".parse::<Purpose>().ok(), Some(Purpose::Attribute));
/// ```
#[macro_export]
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $schema:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Schema name of the enumeration.
            pub const TYPE_NAME: &'static str = $schema;

            /// All values in declaration order.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the XML literal.
            #[must_use]
            pub const fn literal(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// Looks up a value by its XML literal.
            #[must_use]
            pub fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::VALUES[0]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.literal())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_literal(s).ok_or_else(|| $crate::Error::InvalidLiteral {
                    type_name: Self::TYPE_NAME,
                    literal: s.to_owned(),
                })
            }
        }

        impl $crate::value::FieldValue for $name {
            const KIND: $crate::value::ValueKind = $crate::value::ValueKind::Enum($schema);

            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Enum {
                    type_name: Self::TYPE_NAME,
                    literal: self.literal(),
                }
            }

            fn from_value(
                value: $crate::value::Value,
            ) -> ::std::result::Result<Self, $crate::value::ValueKind> {
                let kind = value.kind();
                let parsed = match &value {
                    $crate::value::Value::Enum { type_name, literal }
                        if *type_name == Self::TYPE_NAME =>
                    {
                        Self::from_literal(literal)
                    }
                    $crate::value::Value::Text(text) => Self::from_literal(text),
                    _ => None,
                };
                parsed.ok_or(kind)
            }
        }

        impl $crate::codec::XmlText for $name {
            fn parse_text(text: &str) -> $crate::Result<Self> {
                text.trim().parse()
            }

            fn to_text(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(self.literal())
            }
        }

        impl $crate::codec::XmlValue for $name {
            fn read_xml(
                reader: &mut $crate::decoder::XmlReader<'_>,
                tag: &$crate::decoder::StartTag,
            ) -> ::std::result::Result<Self, $crate::XmlError> {
                $crate::codec::read_simple(reader, tag)
            }

            fn write_xml(
                &self,
                writer: &mut $crate::encoder::XmlWriter,
                name: $crate::types::QName,
            ) -> ::std::result::Result<(), $crate::XmlError> {
                $crate::codec::write_simple(self, writer, name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::codec::XmlText;
    use crate::value::{FieldValue, Value, ValueKind};

    crate::xml_enum! {
        /// Test enumeration.
        pub enum Update : "UpdateType" {
            /// Enabled.
            True = "true",
            /// Disabled.
            False = "false",
        }
    }

    #[test]
    fn test_literals_and_default() {
        assert_eq!(Update::default(), Update::True);
        assert_eq!(Update::False.literal(), "false");
        assert_eq!(Update::from_literal("true"), Some(Update::True));
        assert_eq!(Update::from_literal("TRUE"), None);
        assert_eq!(Update::VALUES.len(), 2);
        assert_eq!(Update::False.to_string(), "false");
    }

    #[test]
    fn test_from_str_error() {
        let err = "maybe".parse::<Update>().unwrap_err();
        assert_eq!(
            err,
            crate::Error::InvalidLiteral {
                type_name: "UpdateType",
                literal: "maybe".to_string(),
            }
        );
    }

    #[test]
    fn test_field_value_conversion() {
        assert_eq!(Update::KIND, ValueKind::Enum("UpdateType"));
        let value = Update::False.to_value();
        assert_eq!(value.as_literal(), Some("false"));
        assert_eq!(Update::from_value(value), Ok(Update::False));
        assert_eq!(Update::from_value(Value::from("true")), Ok(Update::True));
        assert_eq!(
            Update::from_value(Value::Boolean(true)),
            Err(ValueKind::Boolean)
        );
        let foreign = Value::Enum {
            type_name: "GaussianType",
            literal: "true",
        };
        assert_eq!(
            Update::from_value(foreign),
            Err(ValueKind::Enum("GaussianType"))
        );
    }

    #[test]
    fn test_xml_text() {
        assert_eq!(Update::parse_text(" false ").expect("Failed to parse"), Update::False);
        assert_eq!(Update::True.to_text(), "true");
    }
}
