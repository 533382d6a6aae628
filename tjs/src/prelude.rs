//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use tjs::prelude::*;
//! ```

// Runtime types
pub use tjs_core::{
    ChannelObserver, DecodeOptions, EncodeOptions, FeatureDef, FeatureId, Multiplicity,
    Notification, NotificationKind, Observed, Observer, Reflective, TypeInfo, Value,
};
pub use tjs_core::{Error as CoreError, Result as CoreResult, XmlError};

// Documents
pub use tjs_schema::document::Document;
pub use tjs_schema::error::{Result as SchemaResult, SchemaError};
pub use tjs_schema::validation::{Diagnostic, validate, validate_document};
pub use tjs_schema::{factory, service_endpoint};

// Enumerations
pub use tjs_schema::enums::{
    DataClassType, GaussianType, PurposeType, RequestName, TypeType, UpdateType, VersionType2,
};

// Requests
pub use tjs_schema::request::{
    AttributeDataType, DescribeDataType, DescribeDatasetsType, DescribeFrameworksType,
    DescribeKeyType, GetCapabilitiesType, GetDataType, JoinDataType, RequestBase, RequestBaseType,
};

// Responses
pub use tjs_schema::capabilities::TjsCapabilitiesType;
pub use tjs_schema::dataset::{DataDescriptionsType, DatasetDescriptionsType, DatasetType1};
pub use tjs_schema::framework::{
    FrameworkDescriptionsType, FrameworkKeyDescriptionType, FrameworkType, FrameworkType4,
};
pub use tjs_schema::join::{
    JoinAbilitiesType, JoinDataResponseType, MechanismType, OutputType, ResourceType, StatusType,
};
pub use tjs_schema::rowset::{GDASType, KType, RowType1, RowsetType1, VType};
