//! # TJS Schema
//!
//! Typed bindings for the OGC Table Joining Service 1.0 XML schema.
//!
//! This crate provides:
//! - One record type per schema complex type, with typed accessors,
//!   reflective feature access and XML marshaling
//! - The OWS 1.1 types referenced by TJS documents
//! - The schema enumerations
//! - [`Document`] for decoding and encoding whole requests and responses
//! - A type factory and validation of the constraints types cannot enforce
//!
//! # Example
//! ```
//! use tjs_schema::{Document, GetDataType};
//!
//! let request = GetDataType::new(
//!     "http://example.org/frameworks/states",
//!     "http://example.org/datasets/population",
//! );
//! let xml = Document::from(request).to_xml().expect("Failed to encode");
//! let decoded = Document::from_xml(&xml).expect("Failed to decode");
//! assert_eq!(decoded.root_name(), "GetData");
//! ```

pub mod capabilities;
pub mod common;
pub mod dataset;
pub mod document;
pub mod enums;
pub mod error;
pub mod factory;
pub mod framework;
pub mod join;
pub mod ows;
pub mod request;
pub mod rowset;
pub mod validation;
pub mod values;

pub use capabilities::{LanguagesType, TjsCapabilitiesType, WSDLType};
pub use common::{
    AbstractType, DescribeDataRequestType, DescribeDatasetsRequestType, GetDataRequestType,
    ReferenceDateType,
};
pub use dataset::{
    AttributesType, ColumnType1, ColumnsetType, DataDescriptionsType, DatasetDescriptionsType,
    DatasetType, DatasetType1, DatasetType2, DatasetType3,
};
pub use document::Document;
pub use enums::{
    DataClassType, GaussianType, PurposeType, RequestName, RequestServiceType, TypeType,
    UpdateType, VersionType, VersionType2,
};
pub use error::{Result, SchemaError};
pub use framework::{
    BoundingCoordinatesType, ColumnType, ColumnType2, DescribeFrameworkKeyType,
    FrameworkDatasetDescribeDataType, FrameworkDescriptionsType, FrameworkKeyDescriptionType,
    FrameworkKeyType, FrameworkKeyType1, FrameworkType, FrameworkType1, FrameworkType2,
    FrameworkType3, FrameworkType4, SpatialFrameworksType,
};
pub use join::{
    DataInputsType, ExceptionReportType, FailedType, JoinAbilitiesType, JoinDataResponseType,
    JoinedOutputsType, MechanismType, OutputMechanismsType, OutputStylingsType1, OutputType,
    ParameterType, ResourceType, StatusType, StylingType, service_endpoint,
};
pub use request::{
    AcceptVersionsType, AttributeDataType, DescribeDataType, DescribeDatasetsType,
    DescribeFrameworksType, DescribeKeyType, GetCapabilitiesType, GetDataType, GetDataXMLType,
    JoinDataType, MapStylingType, RequestBase, RequestBaseType,
};
pub use rowset::{GDASType, KType, RowType, RowType1, RowsetType, RowsetType1, VType};
pub use validation::{Diagnostic, validate, validate_document};
pub use values::{
    ClassesType, ClassesType1, CountType, MeasureCountExceptions, MeasureType,
    NominalOrdinalExceptions, NominalType, NullType, NullType1, OrdinalType, UOMType,
    UncertaintyType, ValueType, ValueType1, ValuesType,
};
