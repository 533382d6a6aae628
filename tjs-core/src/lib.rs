//! # TJS Core
//!
//! Object model runtime for the OGC Table Joining Service 1.0 bindings.
//!
//! This crate provides:
//! - Reflective feature access ([`Reflective`], [`FeatureDef`], [`Value`])
//! - Tri-state feature semantics (unset, default, explicitly set)
//! - Change notification through [`Observed`] wrappers
//! - An XML pull reader and writer with namespace handling
//! - Marshaling traits implemented by every schema type
//! - The [`xml_enum!`] macro for schema enumerations

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod macros;
pub mod notify;
pub mod reflect;
pub mod types;
pub mod value;

pub use codec::{XmlText, XmlValue};
pub use decoder::{Child, DecodeOptions, StartTag, XmlAttribute, XmlReader};
pub use encoder::{ElementStart, EncodeOptions, XmlWriter};
pub use error::{Error, Result, XmlError};
pub use notify::{ChannelObserver, Notification, NotificationKind, Observed, Observer};
pub use reflect::{FeatureDef, FeatureId, FeatureKind, Multiplicity, Reflective, TypeInfo};
pub use types::{Decimal, Namespace, QName};
pub use value::{FieldValue, Value, ValueKind};
