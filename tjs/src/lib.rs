//! # TJS
//!
//! Typed OGC Table Joining Service 1.0 documents for Rust.
//!
//! TJS lets a client join attribute tables to geospatial frameworks held by
//! a remote service. This crate bundles the runtime and the schema bindings
//! so every request and response of the protocol can be built, inspected,
//! validated and exchanged as XML.
//!
//! ## Features
//!
//! - **Typed bindings** - One record type per schema complex type
//! - **Reflective access** - Get, set and unset any feature by name or id
//! - **Tri-state features** - Unset, schema default or explicitly set
//! - **Change notification** - Observers receive set, unset and add events
//! - **XML marshaling** - Lenient or strict decoding, configurable encoding
//!
//! ## Quick Start
//!
//! ```
//! use tjs::prelude::*;
//!
//! let request = DescribeDatasetsType::default()
//!     .with_framework_uri("http://example.org/frameworks/states")
//!     .with_language("en");
//! let xml = Document::from(request).to_xml().expect("Failed to encode");
//!
//! let decoded = Document::from_xml(&xml).expect("Failed to decode");
//! assert_eq!(decoded.request_name(), Some(RequestName::DescribeDatasets));
//! assert!(decoded.validate().is_empty());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Reflection, values, notifications and the XML codec
//! - [`schema`] - TJS and OWS types, documents, factory and validation

pub mod prelude;

/// Object model runtime: reflection, notifications and XML codec.
pub mod core {
    pub use tjs_core::*;
}

/// TJS 1.0 schema bindings.
pub mod schema {
    pub use tjs_schema::*;
}

// Re-export commonly used items at the crate root
pub use tjs_core::{
    DecodeOptions, EncodeOptions, Error as CoreError, Observed, Reflective, Value, XmlError,
};
pub use tjs_schema::{Diagnostic, Document, SchemaError, service_endpoint, validate_document};
