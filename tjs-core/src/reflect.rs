//! Reflective feature access.
//!
//! Every schema type exposes a static table of [`FeatureDef`]s and implements
//! [`Reflective`], which maps a [`FeatureId`] to the typed field at runtime.
//! Implementations are generated by `#[derive(TjsType)]`.

use crate::error::{Error, Result};
use crate::types::QName;
use crate::value::{Value, ValueKind};
use std::any::Any;
use std::fmt;

/// Stable index of a feature within its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(usize);

impl FeatureId {
    /// Creates a feature identifier.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the feature in its type's table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a feature is represented in XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// XML attribute.
    Attribute,
    /// Child element.
    Element,
    /// Simple content of the element itself.
    Text,
}

/// Cardinality of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// Zero or one.
    Optional,
    /// Exactly one.
    Required,
    /// Zero or more.
    Many,
    /// One or more.
    OneOrMore,
}

impl Multiplicity {
    /// Returns true for multi-valued features.
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many | Self::OneOrMore)
    }

    /// Minimum number of values.
    #[must_use]
    pub const fn lower_bound(self) -> usize {
        match self {
            Self::Optional | Self::Many => 0,
            Self::Required | Self::OneOrMore => 1,
        }
    }

    /// Maximum number of values, `None` if unbounded.
    #[must_use]
    pub const fn upper_bound(self) -> Option<usize> {
        match self {
            Self::Optional | Self::Required => Some(1),
            Self::Many | Self::OneOrMore => None,
        }
    }
}

/// Metadata of one structural feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
    /// Identifier of the feature within its type.
    pub id: FeatureId,
    /// Rust field name.
    pub name: &'static str,
    /// XML name of the attribute or element.
    pub xml_name: QName,
    /// XML representation.
    pub kind: FeatureKind,
    /// Cardinality.
    pub multiplicity: Multiplicity,
    /// Kind of each value.
    pub value_kind: ValueKind,
    /// Whether the feature has a schema default and tracks explicit setting.
    pub unsettable: bool,
}

impl FeatureDef {
    /// Returns true if the feature owns contained objects.
    #[must_use]
    pub const fn is_containment(&self) -> bool {
        self.value_kind.is_object()
    }

    /// Returns true for multi-valued features.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        self.multiplicity.is_many()
    }

    /// Returns true if at least one value is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.multiplicity.lower_bound() > 0
    }
}

/// Static type information of a schema type.
pub trait TypeInfo {
    /// Schema name of the type.
    const TYPE_NAME: &'static str;
    /// Feature table, indexed by [`FeatureId`].
    const FEATURES: &'static [FeatureDef];
}

/// Runtime reflective access to a schema type.
pub trait Reflective: Any + fmt::Debug + Send + Sync {
    /// Returns the schema name of the type.
    fn type_name(&self) -> &'static str;

    /// Returns the feature table.
    fn features(&self) -> &'static [FeatureDef];

    /// Looks up a feature by its Rust field name.
    fn feature(&self, name: &str) -> Option<&'static FeatureDef> {
        self.features().iter().find(|def| def.name == name)
    }

    /// Looks up a feature by identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier.
    fn feature_def(&self, feature: FeatureId) -> Result<&'static FeatureDef> {
        self.features()
            .get(feature.index())
            .ok_or_else(|| Error::invalid_field(self.type_name(), feature.index()))
    }

    /// Returns the value of a feature.
    ///
    /// Unset single-valued features return `None`, unless they have a schema
    /// default, which is returned instead. Multi-valued features always
    /// return a list.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier.
    fn e_get(&self, feature: FeatureId) -> Result<Option<Value>>;

    /// Sets the value of a feature.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier and
    /// [`Error::TypeMismatch`] if the value has the wrong kind.
    fn e_set(&mut self, feature: FeatureId, value: Value) -> Result<()>;

    /// Appends one value to a multi-valued feature.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier and
    /// [`Error::TypeMismatch`] if the feature is single-valued or the value
    /// has the wrong kind.
    fn e_add(&mut self, feature: FeatureId, value: Value) -> Result<()>;

    /// Returns a feature to its unset state.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier.
    fn e_unset(&mut self, feature: FeatureId) -> Result<()>;

    /// Returns whether a feature holds an explicit value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFieldAccess`] for an unknown identifier.
    fn e_is_set(&self, feature: FeatureId) -> Result<bool>;

    /// Returns true if `other` has the same type and an equal value and set
    /// state for the feature.
    fn e_eq_feature(&self, feature: FeatureId, other: &dyn Reflective) -> bool;

    /// Calls `visitor` for every contained object, in feature order.
    fn visit_children(&self, visitor: &mut dyn FnMut(&'static FeatureDef, &dyn Reflective));

    /// Upcasts to [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Upcasts a boxed object to [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Clones into a new box.
    fn clone_boxed(&self) -> Box<dyn Reflective>;

    /// Structural equality with another object of any type.
    fn eq_dyn(&self, other: &dyn Reflective) -> bool;
}

impl dyn Reflective {
    /// Returns a reference to the concrete type, if it matches.
    #[must_use]
    pub fn downcast_ref<T: Reflective>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns a mutable reference to the concrete type, if it matches.
    #[must_use]
    pub fn downcast_mut<T: Reflective>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Returns the value of a feature looked up by name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownFeature`] if no feature has that name.
    pub fn e_get_by_name(&self, name: &str) -> Result<Option<Value>> {
        let def = self
            .feature(name)
            .ok_or_else(|| Error::UnknownFeature {
                type_name: self.type_name(),
                name: name.to_owned(),
            })?;
        self.e_get(def.id)
    }

    /// Sets the value of a feature looked up by name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownFeature`] if no feature has that name, or
    /// [`Error::TypeMismatch`] if the value has the wrong kind.
    pub fn e_set_by_name(&mut self, name: &str, value: Value) -> Result<()> {
        let def = self
            .feature(name)
            .ok_or_else(|| Error::UnknownFeature {
                type_name: self.type_name(),
                name: name.to_owned(),
            })?;
        self.e_set(def.id, value)
    }
}

impl Clone for Box<dyn Reflective> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl PartialEq for dyn Reflective {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Namespace;

    #[test]
    fn test_multiplicity_bounds() {
        assert_eq!(Multiplicity::Optional.lower_bound(), 0);
        assert_eq!(Multiplicity::Required.upper_bound(), Some(1));
        assert_eq!(Multiplicity::OneOrMore.lower_bound(), 1);
        assert_eq!(Multiplicity::Many.upper_bound(), None);
        assert!(Multiplicity::Many.is_many());
        assert!(!Multiplicity::Required.is_many());
    }

    #[test]
    fn test_feature_def_flags() {
        let def = FeatureDef {
            id: FeatureId::new(2),
            name: "row",
            xml_name: QName::new(Namespace::Tjs, "Row"),
            kind: FeatureKind::Element,
            multiplicity: Multiplicity::OneOrMore,
            value_kind: ValueKind::Object("RowType"),
            unsettable: false,
        };
        assert!(def.is_containment());
        assert!(def.is_many());
        assert!(def.is_required());
        assert_eq!(def.id.to_string(), "2");
    }
}
