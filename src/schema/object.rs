//! Object validation with required, optional and readonly fields.
//!
//! This module provides [`ObjectSchema`], a set of field descriptors checked
//! against a JSON object in declaration order. Fragments with different
//! modifiers are combined with [`Schema::intersection`](crate::Schema::intersection).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::FailurePath;
use crate::output::Object;

use super::traits::{Check, Validator};

/// Whether an absent key is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// An absent key fails with `not_found`, whatever the field's validator.
    Required,
    /// An absent key is accepted.
    Optional,
}

/// Mutability annotation of a field. Never affects validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// The field may be reassigned.
    Mutable,
    /// The field is declared readonly.
    Readonly,
}

/// Definition of a field within an object schema.
#[derive(Clone)]
pub struct FieldDef {
    name: String,
    presence: Presence,
    mutability: Mutability,
    validator: Arc<dyn Check>,
}

impl FieldDef {
    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field may be absent.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// The readonly annotation.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// True for [`Presence::Required`].
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// True for [`Mutability::Readonly`].
    pub fn is_readonly(&self) -> bool {
        self.mutability == Mutability::Readonly
    }

    /// Checks the field in `object`; absent keys are handled by presence.
    fn check_in(&self, object: &serde_json::Map<String, Value>) -> Result<(), FailurePath> {
        match object.get(&self.name) {
            Some(value) => self
                .validator
                .check(Some(value))
                .map_err(|path| FailurePath::element(self.name.as_str(), path)),
            None if self.is_required() => Err(FailurePath::NotFound(self.name.clone())),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .field("mutability", &self.mutability)
            .finish_non_exhaustive()
    }
}

/// A schema for validating JSON objects field by field.
///
/// The input must be an object (arrays and `null` are not). Declared fields
/// are checked in declaration order and the first rejection ends the check:
/// a missing required key is `not_found`, a present but invalid value is
/// `invalid_element_value` keyed by the field name. Keys not declared here
/// are ignored.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .required("a", Schema::boolean())
///     .required("b", Schema::number());
///
/// assert!(schema.parse(&json!({ "a": true, "b": 1 })).is_success());
/// assert_eq!(
///     schema.parse(&json!({ "b": 1 })).into_result().unwrap_err(),
///     FailurePath::NotFound("a".to_string())
/// );
/// assert_eq!(
///     schema.parse(&json!({ "a": true, "b": "b" })).into_result().unwrap_err(),
///     FailurePath::element("b", FailurePath::NotNumber(Some(json!("b"))))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, FieldDef>,
}

impl ObjectSchema {
    /// Creates an object schema with no fields. It accepts any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field whose key must be present.
    ///
    /// Redeclaring a name replaces the earlier field in place.
    pub fn required<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.with_field(name.into(), Presence::Required, validator)
    }

    /// Adds a field whose key may be absent.
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object().optional("nickname", Schema::string());
    ///
    /// assert!(schema.parse(&json!({})).is_success());
    /// assert!(schema.parse(&json!({ "nickname": "Bob" })).is_success());
    /// assert!(schema.parse(&json!({ "nickname": null })).is_failure());
    /// ```
    pub fn optional<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.with_field(name.into(), Presence::Optional, validator)
    }

    /// Marks every field declared so far readonly.
    ///
    /// Validation is unchanged; only the descriptors report the annotation.
    pub fn readonly(mut self) -> Self {
        for field in self.fields.values_mut() {
            field.mutability = Mutability::Readonly;
        }
        self
    }

    /// Field descriptors in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    /// The descriptor of field `name`, if declared.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    fn with_field<V>(mut self, name: String, presence: Presence, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.fields.insert(
            name.clone(),
            FieldDef {
                name,
                presence,
                mutability: Mutability::Mutable,
                validator: Arc::new(validator),
            },
        );
        self
    }
}

impl Check for ObjectSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let object = match value {
            Some(Value::Object(object)) => object,
            other => return Err(FailurePath::NotObject(other.cloned())),
        };
        for field in self.fields.values() {
            field.check_in(object)?;
        }
        Ok(())
    }
}

impl Validator for ObjectSchema {
    type Output = Object;
}
