//! Attribute dataset descriptions.

use crate::common::{AbstractType, DescribeDataRequestType, GetDataRequestType, ReferenceDateType};
use crate::enums::{PurposeType, TypeType};
use crate::framework::{FrameworkDatasetDescribeDataType, FrameworkKeyType1, FrameworkType4};
use crate::rowset::RowsetType1;
use crate::values::ValuesType;
use tjs_derive::TjsType;

/// Dataset listed in a `DatasetDescriptions` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DatasetType")]
pub struct DatasetType {
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Organization", required)]
    organization: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "ReferenceDate", required)]
    reference_date: Option<ReferenceDateType>,
    #[tjs(element = "Version", required)]
    version: Option<String>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "DescribeDataRequest", required)]
    describe_data_request: Option<DescribeDataRequestType>,
}

/// Dataset of a `DataDescriptions` response, with its columns.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DatasetType1")]
pub struct DatasetType1 {
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Organization", required)]
    organization: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "ReferenceDate", required)]
    reference_date: Option<ReferenceDateType>,
    #[tjs(element = "Version", required)]
    version: Option<String>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "DescribeDataRequest", required)]
    describe_data_request: Option<DescribeDataRequestType>,
    #[tjs(element = "Columnset", required)]
    columnset: Option<ColumnsetType>,
}

/// Dataset of a `GDAS` response, with its columns and rows.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DatasetType2")]
pub struct DatasetType2 {
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Organization", required)]
    organization: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "ReferenceDate", required)]
    reference_date: Option<ReferenceDateType>,
    #[tjs(element = "Version", required)]
    version: Option<String>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "DescribeDataRequest", required)]
    describe_data_request: Option<DescribeDataRequestType>,
    #[tjs(element = "Columnset", required)]
    columnset: Option<ColumnsetType>,
    #[tjs(element = "Rowset", required)]
    rowset: Option<RowsetType1>,
}

/// Dataset echoed in the `DataInputs` of a `JoinData` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DatasetType3")]
pub struct DatasetType3 {
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Organization", required)]
    organization: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "ReferenceDate", required)]
    reference_date: Option<ReferenceDateType>,
    #[tjs(element = "Version", required)]
    version: Option<String>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "DescribeDataRequest", required)]
    describe_data_request: Option<DescribeDataRequestType>,
    #[tjs(element = "Columnset", required)]
    columnset: Option<ColumnsetType>,
}

/// Key and attribute columns of a dataset.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ColumnsetType")]
pub struct ColumnsetType {
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType1>,
    #[tjs(element = "Attributes", required)]
    attributes: Option<AttributesType>,
}

/// Attribute columns of a dataset.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AttributesType")]
pub struct AttributesType {
    #[tjs(element = "Column", required)]
    column: Vec<ColumnType1>,
}

/// Attribute column with its value domain.
///
/// `purpose` defaults to `SpatialComponentIdentifier` and `type` to
/// `xsd:string` when absent from the document.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ColumnType1")]
pub struct ColumnType1 {
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<AbstractType>,
    #[tjs(element = "Documentation")]
    documentation: Option<String>,
    #[tjs(element = "Values", required)]
    values: Option<ValuesType>,
    #[tjs(element = "GetDataRequest")]
    get_data_request: Option<GetDataRequestType>,
    #[tjs(attribute = "decimals")]
    decimals: Option<u64>,
    #[tjs(attribute = "length", required)]
    length: Option<u64>,
    #[tjs(attribute = "name", required)]
    name: Option<String>,
    #[tjs(attribute = "purpose", required, default = "PurposeType::SpatialComponentIdentifier")]
    purpose: Option<PurposeType>,
    #[tjs(attribute = "type", required, default = "TypeType::String")]
    type_: Option<TypeType>,
}

/// `DescribeDatasets` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DatasetDescriptionsType")]
pub struct DatasetDescriptionsType {
    #[tjs(element = "Framework", required)]
    framework: Vec<FrameworkType4>,
    #[tjs(attribute = "capabilities", required)]
    capabilities: Option<String>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

/// `DescribeData` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DataDescriptionsType")]
pub struct DataDescriptionsType {
    #[tjs(element = "Framework", required)]
    framework: Vec<FrameworkDatasetDescribeDataType>,
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
    use tjs_core::{Reflective, TypeInfo, Value};

    #[test]
    fn test_column_defaults() {
        let mut column = ColumnType1::default().with_name("POP2020").with_length(12u64);
        assert_eq!(column.purpose(), PurposeType::SpatialComponentIdentifier);
        assert_eq!(column.type_(), TypeType::String);
        assert!(!column.is_set_purpose());

        column.set_purpose(PurposeType::Attribute);
        column.set_type(TypeType::Integer);
        assert_eq!(column.purpose(), PurposeType::Attribute);
        assert!(column.is_set_type());

        column.unset_type();
        assert_eq!(column.type_(), TypeType::String);
        assert!(!column.is_set_type());
    }

    #[test]
    fn test_default_reported_through_reflection() {
        let column = ColumnType1::default();
        let purpose = column
            .e_get(ColumnType1::PURPOSE)
            .expect("Failed to get")
            .expect("default is returned");
        assert_eq!(purpose.as_literal(), Some("SpatialComponentIdentifier"));
        assert!(!column.e_is_set(ColumnType1::PURPOSE).expect("Failed to query"));

        let def = &ColumnType1::FEATURES[ColumnType1::PURPOSE.index()];
        assert!(def.unsettable);
        assert!(!ColumnType1::FEATURES[ColumnType1::NAME.index()].unsettable);
    }

    #[test]
    fn test_enum_set_from_text() {
        let mut column = ColumnType1::default();
        column
            .e_set(ColumnType1::TYPE, Value::from("http://www.w3.org/TR/xmlschema-2/#integer"))
            .expect("Failed to set");
        assert_eq!(column.type_(), TypeType::Integer);

        let err = column.e_set(ColumnType1::TYPE, Value::from("integer")).unwrap_err();
        assert!(matches!(err, tjs_core::Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_columnset_structure() {
        let columnset = ColumnsetType::default().with_attributes(
            AttributesType::default()
                .with_column(ColumnType1::default().with_name("A").with_length(4u64))
                .with_column(ColumnType1::default().with_name("B").with_length(8u64)),
        );
        let names: Vec<_> = columnset
            .attributes()
            .map(|attrs| attrs.column().iter().filter_map(ColumnType1::name).collect())
            .unwrap_or_default();
        assert_eq!(names, ["A", "B"]);
        assert!(!columnset.is_set_framework_key());
    }
}
