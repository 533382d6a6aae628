//! Enumerated simple types of the TJS schema.
//!
//! The first value of each enumeration is its default.

use tjs_core::xml_enum;

xml_enum! {
    /// Class of data held by an attribute column.
    pub enum DataClassType : "DataClassType" {
        /// Unordered categories.
        Nominal = "nominal",
        /// Ordered categories.
        Ordinal = "ordinal",
        /// Measured quantities.
        Measure = "measure",
        /// Counts.
        Count = "count",
    }
}

xml_enum! {
    /// Whether uncertainty values follow a gaussian distribution.
    pub enum GaussianType : "gaussianType" {
        /// Gaussian.
        True = "true",
        /// Not gaussian.
        False = "false",
        /// Unknown distribution.
        Unknown = "unknown",
    }
}

xml_enum! {
    /// Role of a column in a dataset.
    pub enum PurposeType : "purposeType" {
        /// Key identifying a spatial framework feature.
        SpatialComponentIdentifier = "SpatialComponentIdentifier",
        /// Proportion of a spatial feature.
        SpatialComponentProportion = "SpatialComponentProportion",
        /// Percentage of a spatial feature.
        SpatialComponentPercentage = "SpatialComponentPercentage",
        /// Key identifying a time period.
        TemporalIdentifier = "TemporalIdentifier",
        /// Time value.
        TemporalValue = "TemporalValue",
        /// Key identifying a vertical position.
        VerticalIdentifier = "VerticalIdentifier",
        /// Vertical position value.
        VerticalValue = "VerticalValue",
        /// Other spatial key.
        OtherSpatialIdentifier = "OtherSpatialIdentifier",
        /// Non-spatial key.
        NonSpatialIdentifier = "NonSpatialIdentifier",
        /// Attribute value.
        Attribute = "Attribute",
    }
}

xml_enum! {
    /// Service type identifier.
    pub enum RequestServiceType : "RequestServiceType" {
        /// Table Joining Service.
        Tjs = "TJS",
    }
}

xml_enum! {
    /// XML Schema datatype of a column.
    pub enum TypeType : "typeType" {
        /// `xsd:string`.
        String = "http://www.w3.org/TR/xmlschema-2/#string",
        /// `xsd:boolean`.
        Boolean = "http://www.w3.org/TR/xmlschema-2/#boolean",
        /// `xsd:integer`.
        Integer = "http://www.w3.org/TR/xmlschema-2/#integer",
        /// `xsd:decimal`.
        Decimal = "http://www.w3.org/TR/xmlschema-2/#decimal",
        /// `xsd:float`.
        Float = "http://www.w3.org/TR/xmlschema-2/#float",
        /// `xsd:double`.
        Double = "http://www.w3.org/TR/xmlschema-2/#double",
        /// `xsd:dateTime`.
        Datetime = "http://www.w3.org/TR/xmlschema-2/#datetime",
    }
}

xml_enum! {
    /// Whether a join request updates previously joined data.
    pub enum UpdateType : "updateType" {
        /// Update.
        True = "true",
        /// Do not update.
        False = "false",
    }
}

xml_enum! {
    /// Protocol version accepted by `GetCapabilities`.
    pub enum VersionType : "VersionType" {
        /// Version 1.0.
        V10 = "1.0",
    }
}

xml_enum! {
    /// Protocol version of an operation request.
    pub enum VersionType2 : "versionType" {
        /// Version 1.
        V1 = "1",
        /// Version 1.0.
        V10 = "1.0",
        /// Version 1.0.0.
        V100 = "1.0.0",
    }
}

xml_enum! {
    /// Name of a TJS operation.
    pub enum RequestName : "RequestName" {
        /// `GetCapabilities`.
        GetCapabilities = "GetCapabilities",
        /// `DescribeFrameworks`.
        DescribeFrameworks = "DescribeFrameworks",
        /// `DescribeDatasets`.
        DescribeDatasets = "DescribeDatasets",
        /// `DescribeData`.
        DescribeData = "DescribeData",
        /// `DescribeJoinAbilities`.
        DescribeJoinAbilities = "DescribeJoinAbilities",
        /// `DescribeKey`.
        DescribeKey = "DescribeKey",
        /// `GetData`.
        GetData = "GetData",
        /// `JoinData`.
        JoinData = "JoinData",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_literals() {
        assert_eq!(PurposeType::default(), PurposeType::SpatialComponentIdentifier);
        assert_eq!(TypeType::default(), TypeType::String);
        assert_eq!(VersionType2::default().literal(), "1");
        assert_eq!(GaussianType::default(), GaussianType::True);
        assert_eq!(DataClassType::default(), DataClassType::Nominal);
    }

    #[test]
    fn test_literal_round_trip() {
        for value in TypeType::VALUES {
            let parsed: TypeType = value.literal().parse().expect("Failed to parse");
            assert_eq!(parsed, *value);
        }
        assert_eq!(PurposeType::VALUES.len(), 10);
        assert_eq!(RequestName::VALUES.len(), 8);
    }

    #[test]
    fn test_unknown_literal() {
        let err = "2.0".parse::<VersionType2>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid literal '2.0' for enumeration 'versionType'"
        );
        assert!("tjs".parse::<RequestServiceType>().is_err());
    }

    #[test]
    fn test_display_uses_literal() {
        assert_eq!(VersionType2::V100.to_string(), "1.0.0");
        assert_eq!(
            TypeType::Decimal.to_string(),
            "http://www.w3.org/TR/xmlschema-2/#decimal"
        );
    }
}
