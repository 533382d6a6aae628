//! Code generation for `#[derive(TjsType)]`.

use crate::attrs::{DefaultValue, FieldModel, Shape, TypeModel, XmlKind};
use proc_macro2::TokenStream;
use quote::quote;

/// Generates every impl for a derived type.
pub fn expand(model: &TypeModel) -> TokenStream {
    let inherent = expand_inherent(model);
    let type_info = expand_type_info(model);
    let reflective = expand_reflective(model);
    let field_value = expand_field_value(model);
    let xml_value = expand_xml_value(model);

    quote! {
        #inherent
        #type_info
        #reflective
        #field_value
        #xml_value
    }
}

fn qname(prefix: Option<&str>, local: &str, default_ns: TokenStream) -> TokenStream {
    let namespace = match prefix {
        Some("tjs") => quote!(::tjs_core::Namespace::Tjs),
        Some("ows") => quote!(::tjs_core::Namespace::Ows),
        Some("xlink") => quote!(::tjs_core::Namespace::Xlink),
        Some(_) => quote!(::tjs_core::Namespace::Unqualified),
        None => default_ns,
    };
    quote!(::tjs_core::QName::new(#namespace, #local))
}

fn field_qname(field: &FieldModel) -> TokenStream {
    match &field.xml {
        XmlKind::Attribute { prefix, local } => qname(
            prefix.as_deref(),
            local,
            quote!(::tjs_core::Namespace::Unqualified),
        ),
        XmlKind::Element { prefix, local } => {
            qname(prefix.as_deref(), local, quote!(::tjs_core::Namespace::Tjs))
        }
        XmlKind::Text => quote!(::tjs_core::QName::new(::tjs_core::Namespace::Unqualified, "")),
    }
}

fn default_expr(default: &DefaultValue) -> TokenStream {
    match default {
        DefaultValue::Text(lit) => quote!(::std::string::String::from(#lit)),
        DefaultValue::Expr(expr) => quote!(#expr),
    }
}

fn expand_inherent(model: &TypeModel) -> TokenStream {
    let ident = &model.ident;
    let mut items = Vec::new();

    for (index, field) in model.fields.iter().enumerate() {
        let const_ident = field.const_ident();
        let doc = format!("Identifier of the `{}` feature.", field.name);
        items.push(quote! {
            #[doc = #doc]
            pub const #const_ident: ::tjs_core::FeatureId = ::tjs_core::FeatureId::new(#index);
        });
    }

    for field in &model.fields {
        items.push(match field.shape {
            Shape::Single => single_accessors(field),
            Shape::Many => many_accessors(field),
        });
    }

    quote! {
        #[allow(dead_code)]
        impl #ident {
            #(#items)*
        }
    }
}

fn single_accessors(field: &FieldModel) -> TokenStream {
    let f = &field.ident;
    let ty = &field.ty;
    let name = &field.name;
    let mut_ident = field.method_ident("", "_mut");
    let set_ident = field.method_ident("set_", "");
    let with_ident = field.method_ident("with_", "");
    let is_set_ident = field.method_ident("is_set_", "");
    let unset_ident = field.method_ident("unset_", "");
    let take_ident = field.method_ident("take_", "");

    let getter = match &field.default {
        Some(DefaultValue::Text(lit)) => {
            let doc = format!("Returns `{name}`, or the default `{}` if unset.", lit.value());
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #f(&self) -> &str {
                    self.#f.as_deref().unwrap_or(#lit)
                }
            }
        }
        Some(default) => {
            let default = default_expr(default);
            let doc = format!("Returns `{name}`, or its default if unset.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #f(&self) -> #ty {
                    self.#f.clone().unwrap_or_else(|| #default)
                }
            }
        }
        None if field.is_string() => {
            let doc = format!("Returns `{name}`, `None` if unset.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #f(&self) -> ::std::option::Option<&str> {
                    self.#f.as_deref()
                }
            }
        }
        None if field.is_scalar() => {
            let doc = format!("Returns `{name}`, `None` if unset.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #f(&self) -> ::std::option::Option<#ty> {
                    self.#f
                }
            }
        }
        None => {
            let doc = format!("Returns `{name}`, `None` if unset.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #f(&self) -> ::std::option::Option<&#ty> {
                    self.#f.as_ref()
                }
            }
        }
    };

    let mut_doc = format!("Returns a mutable reference to `{name}`, `None` if unset.");
    let set_doc = format!("Sets `{name}`.");
    let with_doc = format!("Returns `self` with `{name}` set.");
    let is_set_doc = format!("Returns true if `{name}` holds an explicit value.");
    let unset_doc = format!("Returns `{name}` to its unset state.");
    let take_doc = format!("Removes and returns the value of `{name}`, leaving it unset.");

    quote! {
        #getter

        #[doc = #mut_doc]
        pub fn #mut_ident(&mut self) -> ::std::option::Option<&mut #ty> {
            self.#f.as_mut()
        }

        #[doc = #set_doc]
        pub fn #set_ident(&mut self, value: impl ::std::convert::Into<#ty>) {
            self.#f = ::std::option::Option::Some(value.into());
        }

        #[doc = #with_doc]
        #[must_use]
        pub fn #with_ident(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
            self.#f = ::std::option::Option::Some(value.into());
            self
        }

        #[doc = #is_set_doc]
        #[must_use]
        pub fn #is_set_ident(&self) -> bool {
            self.#f.is_some()
        }

        #[doc = #unset_doc]
        pub fn #unset_ident(&mut self) {
            self.#f = ::std::option::Option::None;
        }

        #[doc = #take_doc]
        pub fn #take_ident(&mut self) -> ::std::option::Option<#ty> {
            self.#f.take()
        }
    }
}

fn many_accessors(field: &FieldModel) -> TokenStream {
    let f = &field.ident;
    let ty = &field.ty;
    let name = &field.name;
    let mut_ident = field.method_ident("", "_mut");
    let add_ident = field.method_ident("add_", "");
    let with_ident = field.method_ident("with_", "");
    let is_set_ident = field.method_ident("is_set_", "");
    let unset_ident = field.method_ident("unset_", "");
    let take_ident = field.method_ident("take_", "");

    let doc = format!("Returns the values of `{name}`.");
    let mut_doc = format!("Returns the mutable list of `{name}`.");
    let add_doc = format!("Appends a value to `{name}`.");
    let with_doc = format!("Returns `self` with a value appended to `{name}`.");
    let is_set_doc = format!("Returns true if `{name}` is not empty.");
    let unset_doc = format!("Clears `{name}`.");
    let take_doc = format!("Removes and returns every value of `{name}`.");

    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #f(&self) -> &[#ty] {
            &self.#f
        }

        #[doc = #mut_doc]
        pub fn #mut_ident(&mut self) -> &mut ::std::vec::Vec<#ty> {
            &mut self.#f
        }

        #[doc = #add_doc]
        pub fn #add_ident(&mut self, value: impl ::std::convert::Into<#ty>) {
            self.#f.push(value.into());
        }

        #[doc = #with_doc]
        #[must_use]
        pub fn #with_ident(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
            self.#f.push(value.into());
            self
        }

        #[doc = #is_set_doc]
        #[must_use]
        pub fn #is_set_ident(&self) -> bool {
            !self.#f.is_empty()
        }

        #[doc = #unset_doc]
        pub fn #unset_ident(&mut self) {
            self.#f.clear();
        }

        #[doc = #take_doc]
        pub fn #take_ident(&mut self) -> ::std::vec::Vec<#ty> {
            ::std::mem::take(&mut self.#f)
        }
    }
}

fn expand_type_info(model: &TypeModel) -> TokenStream {
    let ident = &model.ident;
    let type_name = &model.type_name;
    let defs = model.fields.iter().enumerate().map(|(index, field)| {
        let name = &field.name;
        let ty = &field.ty;
        let xml_name = field_qname(field);
        let kind = match field.xml {
            XmlKind::Attribute { .. } => quote!(::tjs_core::FeatureKind::Attribute),
            XmlKind::Element { .. } => quote!(::tjs_core::FeatureKind::Element),
            XmlKind::Text => quote!(::tjs_core::FeatureKind::Text),
        };
        let multiplicity = match (field.shape, field.required) {
            (Shape::Single, false) => quote!(::tjs_core::Multiplicity::Optional),
            (Shape::Single, true) => quote!(::tjs_core::Multiplicity::Required),
            (Shape::Many, false) => quote!(::tjs_core::Multiplicity::Many),
            (Shape::Many, true) => quote!(::tjs_core::Multiplicity::OneOrMore),
        };
        let unsettable = field.default.is_some();
        quote! {
            ::tjs_core::FeatureDef {
                id: ::tjs_core::FeatureId::new(#index),
                name: #name,
                xml_name: #xml_name,
                kind: #kind,
                multiplicity: #multiplicity,
                value_kind: <#ty as ::tjs_core::FieldValue>::KIND,
                unsettable: #unsettable,
            }
        }
    });

    quote! {
        impl ::tjs_core::TypeInfo for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const FEATURES: &'static [::tjs_core::FeatureDef] = &[#(#defs),*];
        }
    }
}

fn expand_reflective(model: &TypeModel) -> TokenStream {
    let ident = &model.ident;
    let type_name = quote!(<Self as ::tjs_core::TypeInfo>::TYPE_NAME);

    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();
    let mut unset_arms = Vec::new();
    let mut is_set_arms = Vec::new();
    let mut add_arms = Vec::new();
    let mut eq_arms = Vec::new();
    let mut visits = Vec::new();

    for (index, field) in model.fields.iter().enumerate() {
        let f = &field.ident;
        let name = &field.name;
        match field.shape {
            Shape::Single => {
                let get = match &field.default {
                    Some(default) => {
                        let default = default_expr(default);
                        quote! {
                            ::std::option::Option::Some(::tjs_core::FieldValue::to_value(
                                &self.#f.clone().unwrap_or_else(|| #default),
                            ))
                        }
                    }
                    None => quote!(self.#f.as_ref().map(::tjs_core::FieldValue::to_value)),
                };
                get_arms.push(quote!(#index => ::std::result::Result::Ok(#get),));
                set_arms.push(quote! {
                    #index => {
                        self.#f = ::std::option::Option::Some(
                            ::tjs_core::value::convert(#type_name, #name, value)?,
                        );
                    }
                });
                unset_arms.push(quote!(#index => self.#f = ::std::option::Option::None,));
                is_set_arms.push(quote!(#index => ::std::result::Result::Ok(self.#f.is_some()),));
                let ty = &field.ty;
                add_arms.push(quote! {
                    #index => {
                        return ::std::result::Result::Err(::tjs_core::Error::TypeMismatch {
                            type_name: #type_name,
                            feature: #name,
                            expected: <#ty as ::tjs_core::FieldValue>::KIND,
                            found: ::tjs_core::ValueKind::List,
                        });
                    }
                });
            }
            Shape::Many => {
                get_arms.push(quote! {
                    #index => ::std::result::Result::Ok(::std::option::Option::Some(
                        ::tjs_core::Value::List(
                            self.#f.iter().map(::tjs_core::FieldValue::to_value).collect(),
                        ),
                    )),
                });
                set_arms.push(quote! {
                    #index => {
                        self.#f = ::tjs_core::value::convert_list(#type_name, #name, value)?;
                    }
                });
                unset_arms.push(quote!(#index => self.#f.clear(),));
                is_set_arms.push(quote!(#index => ::std::result::Result::Ok(!self.#f.is_empty()),));
                add_arms.push(quote! {
                    #index => self.#f.push(::tjs_core::value::convert(#type_name, #name, value)?),
                });
            }
        }
        eq_arms.push(quote!(#index => self.#f == other.#f,));

        if matches!(field.xml, XmlKind::Element { .. }) {
            visits.push(quote! {
                for item in self.#f.iter() {
                    if let ::std::option::Option::Some(child) =
                        ::tjs_core::FieldValue::as_reflective(item)
                    {
                        visitor(&features[#index], child);
                    }
                }
            });
        }
    }

    quote! {
        #[allow(unused_variables, unused_mut, unreachable_code)]
        impl ::tjs_core::Reflective for #ident {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn features(&self) -> &'static [::tjs_core::FeatureDef] {
                <Self as ::tjs_core::TypeInfo>::FEATURES
            }

            fn e_get(
                &self,
                feature: ::tjs_core::FeatureId,
            ) -> ::tjs_core::Result<::std::option::Option<::tjs_core::Value>> {
                match feature.index() {
                    #(#get_arms)*
                    index => ::std::result::Result::Err(
                        ::tjs_core::Error::invalid_field(#type_name, index),
                    ),
                }
            }

            fn e_set(
                &mut self,
                feature: ::tjs_core::FeatureId,
                value: ::tjs_core::Value,
            ) -> ::tjs_core::Result<()> {
                match feature.index() {
                    #(#set_arms)*
                    index => {
                        return ::std::result::Result::Err(
                            ::tjs_core::Error::invalid_field(#type_name, index),
                        );
                    }
                }
                ::std::result::Result::Ok(())
            }

            fn e_add(
                &mut self,
                feature: ::tjs_core::FeatureId,
                value: ::tjs_core::Value,
            ) -> ::tjs_core::Result<()> {
                match feature.index() {
                    #(#add_arms)*
                    index => {
                        return ::std::result::Result::Err(
                            ::tjs_core::Error::invalid_field(#type_name, index),
                        );
                    }
                }
                ::std::result::Result::Ok(())
            }

            fn e_unset(&mut self, feature: ::tjs_core::FeatureId) -> ::tjs_core::Result<()> {
                match feature.index() {
                    #(#unset_arms)*
                    index => {
                        return ::std::result::Result::Err(
                            ::tjs_core::Error::invalid_field(#type_name, index),
                        );
                    }
                }
                ::std::result::Result::Ok(())
            }

            fn e_is_set(&self, feature: ::tjs_core::FeatureId) -> ::tjs_core::Result<bool> {
                match feature.index() {
                    #(#is_set_arms)*
                    index => ::std::result::Result::Err(
                        ::tjs_core::Error::invalid_field(#type_name, index),
                    ),
                }
            }

            fn e_eq_feature(
                &self,
                feature: ::tjs_core::FeatureId,
                other: &dyn ::tjs_core::Reflective,
            ) -> bool {
                let ::std::option::Option::Some(other) = other.as_any().downcast_ref::<Self>()
                else {
                    return false;
                };
                match feature.index() {
                    #(#eq_arms)*
                    _ => false,
                }
            }

            fn visit_children(
                &self,
                visitor: &mut dyn FnMut(
                    &'static ::tjs_core::FeatureDef,
                    &dyn ::tjs_core::Reflective,
                ),
            ) {
                let features = <Self as ::tjs_core::TypeInfo>::FEATURES;
                #(#visits)*
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn ::tjs_core::Reflective> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn eq_dyn(&self, other: &dyn ::tjs_core::Reflective) -> bool {
                other.as_any().downcast_ref::<Self>() == ::std::option::Option::Some(self)
            }
        }
    }
}

fn expand_field_value(model: &TypeModel) -> TokenStream {
    let ident = &model.ident;
    quote! {
        impl ::tjs_core::FieldValue for #ident {
            const KIND: ::tjs_core::ValueKind =
                ::tjs_core::ValueKind::Object(<Self as ::tjs_core::TypeInfo>::TYPE_NAME);

            fn to_value(&self) -> ::tjs_core::Value {
                ::tjs_core::Value::Object(::std::boxed::Box::new(::std::clone::Clone::clone(self)))
            }

            fn from_value(
                value: ::tjs_core::Value,
            ) -> ::std::result::Result<Self, ::tjs_core::ValueKind> {
                value.downcast::<Self>()
            }

            fn as_reflective(&self) -> ::std::option::Option<&dyn ::tjs_core::Reflective> {
                ::std::option::Option::Some(self)
            }
        }
    }
}

fn expand_xml_value(model: &TypeModel) -> TokenStream {
    let ident = &model.ident;
    let type_name = quote!(<Self as ::tjs_core::TypeInfo>::TYPE_NAME);

    let attr_arms = model.fields.iter().filter_map(|field| {
        let XmlKind::Attribute { local, .. } = &field.xml else {
            return None;
        };
        let f = &field.ident;
        Some(quote! {
            #local => {
                value.#f = ::std::option::Option::Some(
                    ::tjs_core::codec::parse_attribute(#type_name, attr)?,
                );
            }
        })
    });

    let content = if let Some(field) = model.text_field() {
        let f = &field.ident;
        quote! {
            let text = reader.read_text(tag)?;
            if !text.trim().is_empty() {
                value.#f = ::std::option::Option::Some(
                    ::tjs_core::codec::parse_content(tag, &text)?,
                );
            }
        }
    } else {
        let element_arms = model.fields.iter().filter_map(|field| {
            let XmlKind::Element { local, .. } = &field.xml else {
                return None;
            };
            let f = &field.ident;
            let read = quote!(::tjs_core::XmlValue::read_xml(reader, &child)?);
            Some(match field.shape {
                Shape::Single => quote! {
                    #local => {
                        if value.#f.is_some() {
                            reader.duplicate_element(#type_name, &child)?;
                        } else {
                            value.#f = ::std::option::Option::Some(#read);
                        }
                    }
                },
                Shape::Many => quote! {
                    #local => value.#f.push(#read),
                },
            })
        });
        quote! {
            while let ::std::option::Option::Some(child) = reader.next_child(tag)? {
                match child {
                    ::tjs_core::Child::Element(child) => match child.name.as_str() {
                        #(#element_arms)*
                        _ => reader.unknown_element(#type_name, &child)?,
                    },
                    ::tjs_core::Child::Text(text) => reader.unexpected_text(#type_name, &text)?,
                }
            }
        }
    };

    let push_attributes = model.fields.iter().filter_map(|field| {
        if !matches!(field.xml, XmlKind::Attribute { .. }) {
            return None;
        }
        let f = &field.ident;
        let xml_name = field_qname(field);
        Some(quote! {
            if let ::std::option::Option::Some(item) = &self.#f {
                start.push_attribute(#xml_name, ::tjs_core::XmlText::to_text(item));
            }
        })
    });

    let write_content = if let Some(field) = model.text_field() {
        let f = &field.ident;
        quote! {
            match &self.#f {
                ::std::option::Option::Some(item) => {
                    writer.write_text_element(start, &::tjs_core::XmlText::to_text(item))
                }
                ::std::option::Option::None => writer.write_empty(start),
            }
        }
    } else {
        let elements: Vec<&FieldModel> = model
            .fields
            .iter()
            .filter(|field| matches!(field.xml, XmlKind::Element { .. }))
            .collect();
        let has_content = elements.iter().map(|field| {
            let f = &field.ident;
            match field.shape {
                Shape::Single => quote!(self.#f.is_some()),
                Shape::Many => quote!(!self.#f.is_empty()),
            }
        });
        let writes = elements.iter().map(|field| {
            let f = &field.ident;
            let xml_name = field_qname(field);
            quote! {
                for item in self.#f.iter() {
                    ::tjs_core::XmlValue::write_xml(item, writer, #xml_name)?;
                }
            }
        });
        quote! {
            let has_content = false #(|| #has_content)*;
            if !has_content {
                return writer.write_empty(start);
            }
            writer.write_start(start)?;
            #(#writes)*
            writer.write_end(name)
        }
    };

    quote! {
        #[allow(unused_variables, unused_mut)]
        impl ::tjs_core::XmlValue for #ident {
            fn read_xml(
                reader: &mut ::tjs_core::XmlReader<'_>,
                tag: &::tjs_core::StartTag,
            ) -> ::std::result::Result<Self, ::tjs_core::XmlError> {
                let mut value = <Self as ::std::default::Default>::default();
                for attr in &tag.attributes {
                    match attr.local.as_str() {
                        #(#attr_arms)*
                        _ => reader.unknown_attribute(#type_name, attr)?,
                    }
                }
                #content
                ::std::result::Result::Ok(value)
            }

            fn write_xml(
                &self,
                writer: &mut ::tjs_core::XmlWriter,
                name: ::tjs_core::QName,
            ) -> ::std::result::Result<(), ::tjs_core::XmlError> {
                let mut start = ::tjs_core::ElementStart::new(name);
                #(#push_attributes)*
                #write_content
            }
        }
    }
}
