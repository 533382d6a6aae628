//! Spatial framework descriptions.
//!
//! A framework is a set of geographic features with a unique key. The schema
//! declares one framework type per response context; they share the same
//! leading description elements and differ in what follows.

use crate::common::{AbstractType, DescribeDatasetsRequestType, ReferenceDateType};
use crate::dataset::{DatasetType, DatasetType1, DatasetType2};
use crate::enums::TypeType;
use crate::rowset::RowsetType;
use tjs_core::Decimal;
use tjs_derive::TjsType;

/// Framework listed in the `JoinAbilities` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkType")]
pub struct FrameworkType {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
}

/// Framework listed in the `FrameworkDescriptions` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkType1")]
pub struct FrameworkType1 {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "DescribeDatasetsRequest", required)]
    describe_datasets_request: Option<DescribeDatasetsRequestType>,
}

/// Framework echoed in the `DataInputs` of a `JoinData` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkType2")]
pub struct FrameworkType2 {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "DescribeDatasetsRequest", required)]
    describe_datasets_request: Option<DescribeDatasetsRequestType>,
}

/// Framework of a `GDAS` response, holding the returned dataset.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkType3")]
pub struct FrameworkType3 {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "DescribeDatasetsRequest", required)]
    describe_datasets_request: Option<DescribeDatasetsRequestType>,
    #[tjs(element = "Dataset", required)]
    dataset: Option<DatasetType2>,
}

/// Framework of a `DatasetDescriptions` response with its datasets.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkType4")]
pub struct FrameworkType4 {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "DescribeDatasetsRequest", required)]
    describe_datasets_request: Option<DescribeDatasetsRequestType>,
    #[tjs(element = "Dataset", required)]
    dataset: Vec<DatasetType>,
}

/// Framework of a `DataDescriptions` response with its described datasets.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkDatasetDescribeDataType")]
pub struct FrameworkDatasetDescribeDataType {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "DescribeDatasetsRequest", required)]
    describe_datasets_request: Option<DescribeDatasetsRequestType>,
    #[tjs(element = "Dataset", required)]
    dataset: Vec<DatasetType1>,
}

/// Framework of a `FrameworkKeyDescription` response with its key values.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeFrameworkKeyType")]
pub struct DescribeFrameworkKeyType {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
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
    #[tjs(element = "FrameworkKey", required)]
    framework_key: Option<FrameworkKeyType>,
    #[tjs(element = "BoundingCoordinates", required)]
    bounding_coordinates: Option<BoundingCoordinatesType>,
    #[tjs(element = "Rowset", required)]
    rowset: Option<RowsetType>,
}

/// Key columns identifying framework features.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkKeyType")]
pub struct FrameworkKeyType {
    #[tjs(element = "Column", required)]
    column: Vec<ColumnType>,
}

/// Key columns of a dataset, with its relationship to the framework.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkKeyType1")]
pub struct FrameworkKeyType1 {
    #[tjs(element = "Column", required)]
    column: Vec<ColumnType2>,
    #[tjs(attribute = "complete", required)]
    complete: Option<String>,
    #[tjs(attribute = "relationship", required)]
    relationship: Option<String>,
}

/// Key column of a framework.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ColumnType")]
pub struct ColumnType {
    #[tjs(attribute = "decimals")]
    decimals: Option<u64>,
    #[tjs(attribute = "length", required)]
    length: Option<u64>,
    #[tjs(attribute = "name", required)]
    name: Option<String>,
    #[tjs(attribute = "type", required)]
    type_: Option<TypeType>,
}

impl ColumnType {
    /// Creates a key column.
    ///
    /// # Arguments
    /// * `name` - Column name
    /// * `type_` - XML Schema datatype of the key
    /// * `length` - Maximum length of the key values
    #[must_use]
    pub fn new(name: impl Into<String>, type_: TypeType, length: u64) -> Self {
        Self::default()
            .with_name(name)
            .with_type(type_)
            .with_length(length)
    }
}

/// Key column of a dataset.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ColumnType2")]
pub struct ColumnType2 {
    #[tjs(attribute = "decimals")]
    decimals: Option<u64>,
    #[tjs(attribute = "length", required)]
    length: Option<u64>,
    #[tjs(attribute = "name", required)]
    name: Option<String>,
    #[tjs(attribute = "type", required)]
    type_: Option<TypeType>,
}

/// Geographic extent in decimal degrees.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "BoundingCoordinatesType")]
pub struct BoundingCoordinatesType {
    #[tjs(element = "North", required)]
    north: Option<Decimal>,
    #[tjs(element = "South", required)]
    south: Option<Decimal>,
    #[tjs(element = "East", required)]
    east: Option<Decimal>,
    #[tjs(element = "West", required)]
    west: Option<Decimal>,
}

impl BoundingCoordinatesType {
    /// Creates an extent from its four edges.
    #[must_use]
    pub fn new(north: Decimal, south: Decimal, east: Decimal, west: Decimal) -> Self {
        Self {
            north: Some(north),
            south: Some(south),
            east: Some(east),
            west: Some(west),
        }
    }
}

/// Frameworks a `JoinData` request can join to.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "SpatialFrameworksType")]
pub struct SpatialFrameworksType {
    #[tjs(element = "Framework", required)]
    framework: Vec<FrameworkType>,
}

/// `DescribeFrameworks` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkDescriptionsType")]
pub struct FrameworkDescriptionsType {
    #[tjs(element = "Framework", required)]
    framework: Vec<FrameworkType1>,
    #[tjs(attribute = "capabilities", required)]
    capabilities: Option<String>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

/// `DescribeKey` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FrameworkKeyDescriptionType")]
pub struct FrameworkKeyDescriptionType {
    #[tjs(element = "Framework", required)]
    framework: Option<DescribeFrameworkKeyType>,
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
    use tjs_core::{Multiplicity, Reflective, TypeInfo, Value};

    fn states() -> FrameworkType1 {
        FrameworkType1::default()
            .with_framework_uri("http://example.org/frameworks/states")
            .with_organization("Example Census Bureau")
            .with_title("States")
            .with_abstract("State boundaries")
            .with_reference_date(ReferenceDateType::new("2020"))
            .with_version("1")
            .with_framework_key(
                FrameworkKeyType::default().with_column(ColumnType::new(
                    "STATE",
                    TypeType::String,
                    2,
                )),
            )
            .with_bounding_coordinates(BoundingCoordinatesType::new(
                Decimal::new(72, 0),
                Decimal::new(18, 0),
                Decimal::new(-66, 0),
                Decimal::new(-180, 0),
            ))
    }

    #[test]
    fn test_typed_access() {
        let framework = states();
        assert_eq!(framework.title(), Some("States"));
        assert_eq!(
            framework.abstract_().and_then(AbstractType::value),
            Some("State boundaries")
        );
        let key = framework.framework_key().expect("key is set");
        assert_eq!(key.column()[0].type_(), Some(&TypeType::String));
        assert_eq!(key.column()[0].length(), Some(2));
        assert!(!framework.is_set_describe_datasets_request());
    }

    #[test]
    fn test_take_moves_child_between_parents() {
        let mut source = states();
        let mut target = FrameworkType2::default();

        let key = source.take_framework_key().expect("key is set");
        target.set_framework_key(key);

        assert!(!source.is_set_framework_key());
        assert_eq!(
            target.framework_key().map(|k| k.column().len()),
            Some(1)
        );
    }

    #[test]
    fn test_reflective_containment_set() {
        let mut framework = FrameworkType1::default();
        let coords = BoundingCoordinatesType::new(
            Decimal::new(1, 0),
            Decimal::new(0, 0),
            Decimal::new(1, 0),
            Decimal::new(0, 0),
        );
        framework
            .e_set(FrameworkType1::BOUNDING_COORDINATES, Value::object(coords.clone()))
            .expect("Failed to set");
        assert_eq!(framework.bounding_coordinates(), Some(&coords));

        let value = framework
            .e_get(FrameworkType1::BOUNDING_COORDINATES)
            .expect("Failed to get")
            .expect("value is set");
        let object = value.as_object().expect("containment yields an object");
        assert_eq!(object.type_name(), "BoundingCoordinatesType");

        let err = framework
            .e_set(FrameworkType1::FRAMEWORK_KEY, Value::object(coords))
            .unwrap_err();
        assert!(matches!(err, tjs_core::Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_feature_metadata() {
        let dataset = &FrameworkType4::FEATURES[FrameworkType4::DATASET.index()];
        assert!(dataset.is_containment());
        assert_eq!(dataset.multiplicity, Multiplicity::OneOrMore);

        let documentation = &FrameworkType4::FEATURES[FrameworkType4::DOCUMENTATION.index()];
        assert!(!documentation.is_containment());
        assert!(!documentation.is_required());
    }

    #[test]
    fn test_envelope_defaults() {
        let mut response = FrameworkDescriptionsType::default();
        assert_eq!(response.service(), "TJS");
        assert_eq!(response.version(), "1.0");
        response.set_version("1.0");
        assert!(response.is_set_version());
        response.add_framework(states());
        assert_eq!(response.framework().len(), 1);
    }
}
