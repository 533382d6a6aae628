//! Parsing of `#[tjs(...)]` attributes into a type model.

use proc_macro2::{Ident, Span};
use syn::{
    Data, DeriveInput, Expr, Fields, GenericArgument, LitStr, PathArguments, Type,
};

/// Cardinality shape of a field, taken from its Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `Option<T>`.
    Single,
    /// `Vec<T>`.
    Many,
}

/// XML representation of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlKind {
    /// Attribute with optional namespace prefix and local name.
    Attribute { prefix: Option<String>, local: String },
    /// Child element with optional namespace prefix and local name.
    Element { prefix: Option<String>, local: String },
    /// Simple content of the element.
    Text,
}

/// Schema default of a single-valued field.
pub enum DefaultValue {
    /// Literal for a `String` field.
    Text(LitStr),
    /// Rust expression for any other field type.
    Expr(Expr),
}

/// One feature of a derived type.
pub struct FieldModel {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
    pub shape: Shape,
    pub xml: XmlKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
}

impl FieldModel {
    /// Returns the name used to build accessor identifiers.
    pub fn method_ident(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(&format!("{prefix}{}{suffix}", self.name), Span::call_site())
    }

    /// Returns the feature constant identifier.
    pub fn const_ident(&self) -> Ident {
        Ident::new(&self.name.to_uppercase(), Span::call_site())
    }

    /// Returns true if the field type is `String`.
    pub fn is_string(&self) -> bool {
        last_ident(&self.ty).is_some_and(|ident| ident == "String")
    }

    /// Returns true if the field type is a copyable scalar.
    pub fn is_scalar(&self) -> bool {
        last_ident(&self.ty)
            .is_some_and(|ident| ident == "bool" || ident == "u64" || ident == "Decimal")
    }
}

/// Derived type.
pub struct TypeModel {
    pub ident: Ident,
    pub type_name: String,
    pub fields: Vec<FieldModel>,
}

impl TypeModel {
    /// Builds the model from the derive input.
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut type_name = input.ident.to_string();
        for attr in &input.attrs {
            if !attr.path().is_ident("tjs") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    type_name = lit.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `name`"))
                }
            })?;
        }

        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "TjsType can only be derived for structs",
            ));
        };
        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(parse_field)
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "TjsType requires named fields",
                ));
            }
        };

        if fields.iter().filter(|f| f.xml == XmlKind::Text).count() > 1 {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "at most one field can hold text content",
            ));
        }
        let has_text = fields.iter().any(|f| f.xml == XmlKind::Text);
        let has_elements = fields
            .iter()
            .any(|f| matches!(f.xml, XmlKind::Element { .. }));
        if has_text && has_elements {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "text content cannot be mixed with child elements",
            ));
        }

        Ok(Self {
            ident: input.ident.clone(),
            type_name,
            fields,
        })
    }

    /// Returns the text content field, if any.
    pub fn text_field(&self) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.xml == XmlKind::Text)
    }
}

fn parse_field(field: &syn::Field) -> syn::Result<FieldModel> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let (shape, inner) = split_shape(&field.ty).ok_or_else(|| {
        syn::Error::new_spanned(&field.ty, "feature fields must be `Option<T>` or `Vec<T>`")
    })?;

    let mut xml = None;
    let mut required = false;
    let mut default = None;
    let mut default_span = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("tjs") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("attribute") {
                let lit: LitStr = meta.value()?.parse()?;
                let (prefix, local) = split_qname(&lit.value());
                xml = Some(XmlKind::Attribute { prefix, local });
            } else if meta.path.is_ident("element") {
                let lit: LitStr = meta.value()?.parse()?;
                let (prefix, local) = split_qname(&lit.value());
                xml = Some(XmlKind::Element { prefix, local });
            } else if meta.path.is_ident("text") {
                xml = Some(XmlKind::Text);
            } else if meta.path.is_ident("required") {
                required = true;
            } else if meta.path.is_ident("default") {
                let lit: LitStr = meta.value()?.parse()?;
                default_span = Some(lit.span());
                default = Some(lit);
            } else {
                return Err(meta.error(concat!(
                    "unsupported field attribute, expected `attribute`, `element`, `text`, ",
                    "`required` or `default`",
                )));
            }
            Ok(())
        })?;
    }

    let Some(xml) = xml else {
        return Err(syn::Error::new_spanned(
            &ident,
            "missing `#[tjs(attribute = ..)]`, `#[tjs(element = ..)]` or `#[tjs(text)]`",
        ));
    };
    if shape == Shape::Many && !matches!(xml, XmlKind::Element { .. }) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "only element features can be multi-valued",
        ));
    }

    let is_string = last_ident(inner).is_some_and(|i| i == "String");
    let default = match default {
        None => None,
        Some(_) if shape == Shape::Many => {
            return Err(syn::Error::new(
                default_span.unwrap_or_else(Span::call_site),
                "multi-valued features cannot have a default",
            ));
        }
        Some(lit) if is_string => Some(DefaultValue::Text(lit)),
        Some(lit) => Some(DefaultValue::Expr(lit.parse()?)),
    };

    let raw = ident.to_string();
    let name = raw.trim_start_matches("r#").trim_end_matches('_').to_string();

    Ok(FieldModel {
        ident,
        name,
        ty: inner.clone(),
        shape,
        xml,
        required,
        default,
    })
}

fn split_qname(name: &str) -> (Option<String>, String) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, name.to_string()),
    }
}

fn split_shape(ty: &Type) -> Option<(Shape, &Type)> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    let shape = if segment.ident == "Option" {
        Shape::Single
    } else if segment.ident == "Vec" {
        Shape::Many
    } else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some((shape, inner)),
        _ => None,
    }
}

fn last_ident(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|s| &s.ident),
        _ => None,
    }
}
