//! # TJS Derive
//!
//! Procedural macros for TJS schema types.
//!
//! `#[derive(TjsType)]` turns a struct of `Option<T>` and `Vec<T>` fields into
//! a schema type with typed accessors, a static feature table, reflective
//! access and XML marshaling.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod expand;

/// Derives `TypeInfo`, `Reflective`, `FieldValue` and `XmlValue` for a
/// schema type, plus typed accessors and feature identifier constants.
///
/// Single-valued features are `Option<T>` fields, multi-valued features are
/// `Vec<T>` fields. A feature is unset while its field is `None` or empty.
///
/// # Attributes
/// * `#[tjs(name = "...")]` on the struct sets the schema type name
/// * `#[tjs(attribute = "...")]` maps a field to an XML attribute
/// * `#[tjs(element = "...")]` maps a field to a child element, in the TJS
///   namespace unless prefixed with `ows:` or `xlink:`
/// * `#[tjs(text)]` maps a field to the element's simple content
/// * `required` marks a feature with a lower bound of one
/// * `default = "..."` gives the schema default returned while unset
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, Default, PartialEq, TjsType)]
/// #[tjs(name = "ResourceType")]
/// pub struct ResourceType {
///     #[tjs(element = "URL", required)]
///     url: Option<String>,
///     #[tjs(element = "Parameter")]
///     parameter: Vec<ParameterType>,
/// }
/// ```
#[proc_macro_derive(TjsType, attributes(tjs))]
pub fn derive_tjs_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match attrs::TypeModel::from_input(&input) {
        Ok(model) => TokenStream::from(expand::expand(&model)),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}
