//! Value domains of attribute columns.

use crate::common::AbstractType;
use crate::enums::{DataClassType, GaussianType};
use tjs_derive::TjsType;

/// Value domain of a column; exactly one of the four classes is present.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ValuesType")]
pub struct ValuesType {
    #[tjs(element = "Nominal")]
    nominal: Option<NominalType>,
    #[tjs(element = "Ordinal")]
    ordinal: Option<OrdinalType>,
    #[tjs(element = "Count")]
    count: Option<CountType>,
    #[tjs(element = "Measure")]
    measure: Option<MeasureType>,
}

impl ValuesType {
    /// Returns the class of the domain that is present.
    ///
    /// When several are set the first in schema order wins.
    #[must_use]
    pub fn data_class(&self) -> Option<DataClassType> {
        if self.nominal.is_some() {
            Some(DataClassType::Nominal)
        } else if self.ordinal.is_some() {
            Some(DataClassType::Ordinal)
        } else if self.count.is_some() {
            Some(DataClassType::Count)
        } else if self.measure.is_some() {
            Some(DataClassType::Measure)
        } else {
            None
        }
    }

    /// Returns how many of the alternatives are set.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        [
            self.nominal.is_some(),
            self.ordinal.is_some(),
            self.count.is_some(),
            self.measure.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Unordered categorical domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "NominalType")]
pub struct NominalType {
    #[tjs(element = "Classes")]
    classes: Option<ClassesType1>,
    #[tjs(element = "Exceptions")]
    exceptions: Option<NominalOrdinalExceptions>,
}

/// Ordered categorical domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OrdinalType")]
pub struct OrdinalType {
    #[tjs(element = "Classes", required)]
    classes: Option<ClassesType>,
    #[tjs(element = "Exceptions")]
    exceptions: Option<NominalOrdinalExceptions>,
}

/// Count domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "CountType")]
pub struct CountType {
    #[tjs(element = "UOM", required)]
    uom: Option<UOMType>,
    #[tjs(element = "Uncertainty")]
    uncertainty: Option<UncertaintyType>,
    #[tjs(element = "Exceptions")]
    exceptions: Option<MeasureCountExceptions>,
}

/// Measured quantity domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "MeasureType")]
pub struct MeasureType {
    #[tjs(element = "UOM", required)]
    uom: Option<UOMType>,
    #[tjs(element = "Uncertainty")]
    uncertainty: Option<UncertaintyType>,
    #[tjs(element = "Exceptions")]
    exceptions: Option<MeasureCountExceptions>,
}

/// Ranked classes of an ordinal domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ClassesType")]
pub struct ClassesType {
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "Value", required)]
    value: Vec<ValueType>,
}

/// Classes of a nominal domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ClassesType1")]
pub struct ClassesType1 {
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "Value", required)]
    value: Vec<ValueType1>,
}

/// Ranked class value.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ValueType")]
pub struct ValueType {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title")]
    title: Option<String>,
    #[tjs(element = "Abstract")]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(attribute = "color")]
    color: Option<String>,
    #[tjs(attribute = "rank", required)]
    rank: Option<u64>,
}

impl ValueType {
    /// Creates a ranked class value.
    #[must_use]
    pub fn new(identifier: impl Into<String>, rank: u64) -> Self {
        Self::default().with_identifier(identifier).with_rank(rank)
    }
}

/// Unranked class value.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ValueType1")]
pub struct ValueType1 {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title")]
    title: Option<String>,
    #[tjs(element = "Abstract")]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(attribute = "color")]
    color: Option<String>,
}

/// Null value of a numeric domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "NullType")]
pub struct NullType {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
}

/// Null value of a categorical domain, with a display color.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "NullType1")]
pub struct NullType1 {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(attribute = "color")]
    color: Option<String>,
}

/// Null values of a nominal or ordinal domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "NominalOrdinalExceptions")]
pub struct NominalOrdinalExceptions {
    #[tjs(element = "Null", required)]
    null: Vec<NullType1>,
}

/// Null values of a count or measure domain.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "MeasureCountExceptions")]
pub struct MeasureCountExceptions {
    #[tjs(element = "Null", required)]
    null: Vec<NullType>,
}

/// Unit of measure.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "UOMType")]
pub struct UOMType {
    #[tjs(element = "ShortForm", required)]
    short_form: Option<String>,
    #[tjs(element = "LongForm", required)]
    long_form: Option<String>,
    #[tjs(attribute = "reference")]
    reference: Option<String>,
}

impl UOMType {
    /// Creates a unit from its short and long names.
    #[must_use]
    pub fn new(short_form: impl Into<String>, long_form: impl Into<String>) -> Self {
        Self::default()
            .with_short_form(short_form)
            .with_long_form(long_form)
    }
}

/// Name of the uncertainty column and its distribution.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "UncertaintyType")]
pub struct UncertaintyType {
    #[tjs(attribute = "gaussian", required, default = "GaussianType::True")]
    gaussian: Option<GaussianType>,
    #[tjs(text)]
    value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{DecodeOptions, EncodeOptions, Namespace, QName, XmlReader, XmlValue, XmlWriter};

    fn encode<T: XmlValue>(value: &T, local: &'static str) -> String {
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

    fn decode<T: XmlValue>(xml: &str) -> T {
        let mut reader = XmlReader::new(xml, DecodeOptions::new());
        let tag = reader.root().expect("Failed to parse").expect("no root");
        T::read_xml(&mut reader, &tag).expect("Failed to parse")
    }

    #[test]
    fn test_data_class() {
        let mut values = ValuesType::default();
        assert_eq!(values.data_class(), None);
        assert_eq!(values.choice_count(), 0);

        values.set_measure(MeasureType::default().with_uom(UOMType::new("km", "kilometre")));
        assert_eq!(values.data_class(), Some(DataClassType::Measure));
        assert_eq!(values.choice_count(), 1);

        values.set_nominal(NominalType::default());
        assert_eq!(values.data_class(), Some(DataClassType::Nominal));
        assert_eq!(values.choice_count(), 2);
    }

    #[test]
    fn test_uncertainty_default() {
        let mut uncertainty = UncertaintyType::default().with_value("POP_ERR");
        assert_eq!(uncertainty.gaussian(), GaussianType::True);
        assert!(!encode(&uncertainty, "Uncertainty").contains("gaussian="));

        uncertainty.set_gaussian(GaussianType::Unknown);
        let xml = encode(&uncertainty, "Uncertainty");
        assert!(xml.contains("gaussian=\"unknown\""));

        let back: UncertaintyType = decode(&xml);
        assert_eq!(back.gaussian(), GaussianType::Unknown);
        assert_eq!(back.value(), Some("POP_ERR"));
    }

    #[test]
    fn test_ordinal_classes_round_trip() {
        let ordinal = OrdinalType::default().with_classes(
            ClassesType::default()
                .with_title("Income bands")
                .with_abstract("Household income")
                .with_value(ValueType::new("low", 1).with_color("#00FF00"))
                .with_value(ValueType::new("high", 2)),
        );
        let xml = encode(&ordinal, "Ordinal");
        assert!(xml.contains("rank=\"1\""));

        let back: OrdinalType = decode(&xml);
        assert_eq!(back, ordinal);
        let ranks: Vec<_> = back
            .classes()
            .map(|c| c.value().iter().filter_map(ValueType::rank).collect())
            .unwrap_or_default();
        assert_eq!(ranks, [1, 2]);
    }

    #[test]
    fn test_invalid_rank_is_reported() {
        let mut reader = XmlReader::new(
            "<Value rank=\"first\"><Identifier>a</Identifier></Value>",
            DecodeOptions::new(),
        );
        let tag = reader.root().expect("Failed to parse").expect("no root");
        let err = ValueType::read_xml(&mut reader, &tag).unwrap_err();
        assert!(matches!(err, tjs_core::XmlError::InvalidAttribute { .. }));
    }
}
