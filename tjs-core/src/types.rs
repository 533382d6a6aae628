//! Simple schema types shared by every binding.
//!
//! This module provides the `xsd:decimal` representation and the XML
//! namespaces and qualified names used by the TJS 1.0 schema.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Exact `xsd:decimal` value.
///
/// Decimals are represented as a mantissa and exponent pair and keep the
/// number of fraction digits they were written with, so `"12.50"` prints
/// back as `"12.50"`. The actual value is: mantissa * 10^exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    /// The mantissa (significand).
    pub mantissa: i64,
    /// The exponent (power of 10).
    pub exponent: i8,
}

impl Decimal {
    /// Creates a new decimal value.
    ///
    /// # Arguments
    /// * `mantissa` - The mantissa (significand)
    /// * `exponent` - The exponent (power of 10)
    #[must_use]
    pub const fn new(mantissa: i64, exponent: i8) -> Self {
        Self { mantissa, exponent }
    }

    /// Creates a decimal from a floating point value with specified precision.
    ///
    /// # Arguments
    /// * `value` - The floating point value
    /// * `exponent` - The desired exponent (negative for decimal places)
    #[must_use]
    pub fn from_f64(value: f64, exponent: i8) -> Self {
        let multiplier = 10f64.powi(-i32::from(exponent));
        let mantissa = (value * multiplier).round() as i64;
        Self { mantissa, exponent }
    }

    /// Converts the decimal to a floating point value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 * 10f64.powi(i32::from(self.exponent))
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses the `xsd:decimal` lexical space: an optional sign, digits and
    /// an optional fraction. Exponent notation is not part of the type.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_value("decimal", s);
        let text = s.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let mut mantissa: i64 = 0;
        for byte in int_part.bytes().chain(frac_part.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(invalid());
            }
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(byte - b'0')))
                .ok_or_else(invalid)?;
        }
        let exponent = i8::try_from(frac_part.len())
            .map(|digits| -digits)
            .map_err(|_| invalid())?;

        Ok(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            exponent,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent >= 0 {
            write!(f, "{}", self.mantissa)?;
            for _ in 0..self.exponent {
                f.write_str("0")?;
            }
            return Ok(());
        }

        let scale = usize::from(self.exponent.unsigned_abs());
        let digits = self.mantissa.unsigned_abs().to_string();
        if self.mantissa < 0 {
            f.write_str("-")?;
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{int_part}.{frac_part}")
        } else {
            write!(f, "0.{digits:0>scale$}")
        }
    }
}

/// XML namespaces used by TJS documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// No namespace (unqualified attributes and text).
    Unqualified,
    /// Table Joining Service 1.0.
    Tjs,
    /// OGC Web Services Common 1.1.
    Ows,
    /// XML Linking Language.
    Xlink,
}

impl Namespace {
    /// TJS 1.0 namespace URI.
    pub const TJS_URI: &'static str = "http://www.opengis.net/tjs/1.0";
    /// OWS 1.1 namespace URI.
    pub const OWS_URI: &'static str = "http://www.opengis.net/ows/1.1";
    /// XLink namespace URI.
    pub const XLINK_URI: &'static str = "http://www.w3.org/1999/xlink";
    /// XML Schema instance namespace URI.
    pub const XSI_URI: &'static str = "http://www.w3.org/2001/XMLSchema-instance";

    /// Returns the namespace URI, if any.
    #[must_use]
    pub const fn uri(self) -> Option<&'static str> {
        match self {
            Self::Unqualified => None,
            Self::Tjs => Some(Self::TJS_URI),
            Self::Ows => Some(Self::OWS_URI),
            Self::Xlink => Some(Self::XLINK_URI),
        }
    }

    /// Returns the conventional prefix.
    #[must_use]
    pub const fn default_prefix(self) -> Option<&'static str> {
        match self {
            Self::Unqualified => None,
            Self::Tjs => Some("tjs"),
            Self::Ows => Some("ows"),
            Self::Xlink => Some("xlink"),
        }
    }
}

/// Namespace-qualified XML name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace of the name.
    pub namespace: Namespace,
    /// Local part of the name.
    pub local: &'static str,
}

impl QName {
    /// Creates a qualified name.
    #[must_use]
    pub const fn new(namespace: Namespace, local: &'static str) -> Self {
        Self { namespace, local }
    }

    /// Creates a name in the TJS namespace.
    #[must_use]
    pub const fn tjs(local: &'static str) -> Self {
        Self::new(Namespace::Tjs, local)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.default_prefix() {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => f.write_str(self.local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        let dec = Decimal::new(15050, -2);
        assert!((dec.to_f64() - 150.50).abs() < 0.001);

        let dec2 = Decimal::from_f64(150.50, -2);
        assert_eq!(dec2.mantissa, 15050);
        assert_eq!(dec2.exponent, -2);
    }

    #[test]
    fn test_decimal_parse() {
        let dec: Decimal = "-74.0125".parse().expect("Failed to parse");
        assert_eq!(dec, Decimal::new(-740125, -4));

        let dec: Decimal = "+3".parse().expect("Failed to parse");
        assert_eq!(dec, Decimal::new(3, 0));

        let dec: Decimal = ".5".parse().expect("Failed to parse");
        assert_eq!(dec, Decimal::new(5, -1));

        assert!("".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!("1e5".parse::<Decimal>().is_err());
        assert!("12.3.4".parse::<Decimal>().is_err());
        assert!("99999999999999999999".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_decimal_display_keeps_scale() {
        assert_eq!(Decimal::new(1250, -2).to_string(), "12.50");
        assert_eq!(Decimal::new(-5, -2).to_string(), "-0.05");
        assert_eq!(Decimal::new(42, 0).to_string(), "42");
        assert_eq!(Decimal::new(42, 2).to_string(), "4200");

        let text = "49.000";
        let dec: Decimal = text.parse().expect("Failed to parse");
        assert_eq!(dec.to_string(), text);
    }

    #[test]
    fn test_namespace() {
        assert_eq!(Namespace::Tjs.uri(), Some("http://www.opengis.net/tjs/1.0"));
        assert_eq!(Namespace::Unqualified.uri(), None);
        assert_eq!(Namespace::Xlink.default_prefix(), Some("xlink"));
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::tjs("Title").to_string(), "tjs:Title");
        assert_eq!(
            QName::new(Namespace::Unqualified, "service").to_string(),
            "service"
        );
    }
}
