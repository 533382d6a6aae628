//! Creation of schema objects by type name.

use crate::capabilities::*;
use crate::common::*;
use crate::dataset::*;
use crate::enums::*;
use crate::framework::*;
use crate::join::*;
use crate::ows::*;
use crate::request::*;
use crate::rowset::*;
use crate::values::*;
use tjs_core::{Error, FieldValue, Reflective, Result, TypeInfo, Value};

struct Entry {
    name: &'static str,
    create: fn() -> Box<dyn Reflective>,
}

fn make<T: Reflective + Default>() -> Box<dyn Reflective> {
    Box::new(T::default())
}

macro_rules! registry {
    ($($ty:ty),+ $(,)?) => {
        /// Schema names of all complex types the factory can create.
        pub const TYPE_NAMES: &[&str] = &[$(<$ty as TypeInfo>::TYPE_NAME),+];

        static REGISTRY: &[Entry] = &[
            $(Entry {
                name: <$ty as TypeInfo>::TYPE_NAME,
                create: make::<$ty>,
            }),+
        ];
    };
}

macro_rules! enumerations {
    ($($ty:ty),+ $(,)?) => {
        /// Schema names of all enumerations.
        pub const ENUM_NAMES: &[&str] = &[$(<$ty>::TYPE_NAME),+];

        /// Converts a literal of the named enumeration to a reflective value.
        ///
        /// # Errors
        /// Returns [`Error::InvalidLiteral`] for a literal the enumeration does
        /// not declare, or [`Error::InvalidValue`] for an unknown enumeration.
        pub fn enum_value(type_name: &str, literal: &str) -> Result<Value> {
            $(
                if type_name == <$ty>::TYPE_NAME {
                    return literal.parse::<$ty>().map(|value| value.to_value());
                }
            )+
            Err(Error::invalid_value("enumeration", type_name))
        }
    };
}

registry!(
    // requests
    RequestBaseType,
    GetCapabilitiesType,
    AcceptVersionsType,
    DescribeFrameworksType,
    DescribeDatasetsType,
    DescribeDataType,
    DescribeKeyType,
    GetDataType,
    JoinDataType,
    AttributeDataType,
    GetDataXMLType,
    MapStylingType,
    // capabilities
    TjsCapabilitiesType,
    LanguagesType,
    WSDLType,
    // frameworks
    FrameworkType,
    FrameworkType1,
    FrameworkType2,
    FrameworkType3,
    FrameworkType4,
    FrameworkDatasetDescribeDataType,
    DescribeFrameworkKeyType,
    FrameworkKeyType,
    FrameworkKeyType1,
    ColumnType,
    ColumnType2,
    BoundingCoordinatesType,
    SpatialFrameworksType,
    FrameworkDescriptionsType,
    FrameworkKeyDescriptionType,
    // datasets
    DatasetType,
    DatasetType1,
    DatasetType2,
    DatasetType3,
    DatasetDescriptionsType,
    DataDescriptionsType,
    ColumnsetType,
    AttributesType,
    ColumnType1,
    DescribeDataRequestType,
    DescribeDatasetsRequestType,
    GetDataRequestType,
    ReferenceDateType,
    AbstractType,
    // value domains
    ValuesType,
    NominalType,
    OrdinalType,
    CountType,
    MeasureType,
    ClassesType,
    ClassesType1,
    ValueType,
    ValueType1,
    NullType,
    NullType1,
    NominalOrdinalExceptions,
    MeasureCountExceptions,
    UOMType,
    UncertaintyType,
    // data
    RowsetType,
    RowsetType1,
    RowType,
    RowType1,
    KType,
    VType,
    GDASType,
    // joining
    JoinAbilitiesType,
    OutputMechanismsType,
    MechanismType,
    OutputStylingsType1,
    StylingType,
    JoinDataResponseType,
    StatusType,
    FailedType,
    DataInputsType,
    JoinedOutputsType,
    OutputType,
    ResourceType,
    ParameterType,
    ExceptionReportType,
    // ows
    ServiceIdentificationType,
    KeywordsType,
    ServiceProviderType,
    OnlineResourceType,
    ResponsiblePartySubsetType,
    OperationsMetadataType,
    OperationType,
    DcpType,
    HttpType,
    RequestMethodType,
    DomainType,
    AllowedValuesType,
    AcceptFormatsType,
    ExceptionType,
);

enumerations!(
    DataClassType,
    GaussianType,
    PurposeType,
    RequestServiceType,
    TypeType,
    UpdateType,
    VersionType,
    VersionType2,
    RequestName,
);

/// Creates a default instance of the named schema type.
///
/// # Returns
/// `None` if no complex type has that name.
#[must_use]
pub fn create(type_name: &str) -> Option<Box<dyn Reflective>> {
    let entry = REGISTRY.iter().find(|entry| entry.name == type_name)?;
    tracing::trace!(type_name, "creating schema object");
    Some((entry.create)())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_name_creates_its_type() {
        for name in TYPE_NAMES {
            let object = create(name).expect("registered type");
            assert_eq!(object.type_name(), *name);
        }
        assert!(create("NoSuchType").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = TYPE_NAMES.iter().collect();
        assert_eq!(names.len(), TYPE_NAMES.len());
        assert_eq!(TYPE_NAMES.len(), 94);
    }

    #[test]
    fn test_created_object_is_reflective() {
        let mut object = create("KType").expect("registered type");
        object
            .e_set_by_name("value", Value::from("06"))
            .expect("Failed to set");
        let key = object.downcast_ref::<KType>().expect("KType");
        assert_eq!(key.value(), Some("06"));
    }

    #[test]
    fn test_enum_value() {
        let value = enum_value("gaussianType", "unknown").expect("Failed to convert");
        assert_eq!(value.as_literal(), Some("unknown"));

        let err = enum_value("gaussianType", "maybe").unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral { .. }));

        let err = enum_value("colorType", "red").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(ENUM_NAMES.len(), 9);
    }
}
