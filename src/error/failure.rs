//! The failure-path tree reported by a rejecting validator.
//!
//! Every combinator wraps the failure of the validator it delegated to, so a
//! [`FailurePath`] reads outside-in from the value handed to `parse` down to the
//! deepest validator that actually rejected something.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::{SchemaError, SchemaErrors};
use crate::path::{JsonPath, PathSegment};

/// Why and where a value was rejected.
///
/// Leaf variants carry the offending input. `None` stands for `undefined`, an
/// absent value. The wrapping variants ([`InvalidElementKey`],
/// [`InvalidElementValue`] and [`NotUnion`]) hold the complete failure of the
/// nested validator.
///
/// Serializes externally tagged in snake_case:
///
/// ```rust
/// use shapecheck::{FailurePath, PathSegment};
/// use serde_json::json;
///
/// let path = FailurePath::InvalidElementValue {
///     key: PathSegment::index(1),
///     path: Box::new(FailurePath::NotString(Some(json!(1)))),
/// };
///
/// assert_eq!(
///     serde_json::to_value(&path).unwrap(),
///     json!({ "invalid_element_value": { "key": 1, "path": { "not_string": 1 } } })
/// );
/// ```
///
/// [`InvalidElementKey`]: FailurePath::InvalidElementKey
/// [`InvalidElementValue`]: FailurePath::InvalidElementValue
/// [`NotUnion`]: FailurePath::NotUnion
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum FailurePath {
    /// A value other than a string.
    #[error("expected string, got {}", render(.0))]
    NotString(Option<Value>),

    /// A value other than a number.
    #[error("expected number, got {}", render(.0))]
    NotNumber(Option<Value>),

    /// A value other than a boolean.
    #[error("expected boolean, got {}", render(.0))]
    NotBoolean(Option<Value>),

    /// A value other than `null`.
    #[error("expected null, got {}", render(.0))]
    NotNull(Option<Value>),

    /// A present value where `undefined` was required.
    #[error("expected undefined, got {0}")]
    NotUndefined(Value),

    /// A value other than an array.
    #[error("expected array, got {}", render(.0))]
    NotArray(Option<Value>),

    /// A value other than a plain object.
    #[error("expected object, got {}", render(.0))]
    NotObject(Option<Value>),

    /// A required field is absent from the object.
    #[error("required field '{0}' is missing")]
    NotFound(String),

    /// A literal or type guard rejected the value.
    #[error("invalid value {}", render(.0))]
    InvalidValue(Option<Value>),

    /// A fixed tuple received an array of a different length.
    #[error("tuple length mismatch, got {} items", item_count(.0))]
    LengthNotEqual(Value),

    /// A tuple with a rest element received fewer items than its prefix.
    #[error("tuple too short, got {} items", item_count(.0))]
    LengthTooShort(Value),

    /// Every union alternative failed; one entry per alternative, in
    /// declaration order.
    #[error("no union alternative matched: [{}]", alternatives(.0))]
    NotUnion(Vec<FailurePath>),

    /// A record key was rejected by the key validator.
    #[error("invalid key: {path}")]
    InvalidElementKey {
        /// Why the key was rejected.
        path: Box<FailurePath>,
    },

    /// A container element was rejected.
    #[error("at {key}: {path}")]
    InvalidElementValue {
        /// Index or key of the element.
        key: PathSegment,
        /// Why the element was rejected.
        path: Box<FailurePath>,
    },
}

impl FailurePath {
    /// Wraps `inner` as the failure of the element stored under `key`.
    pub fn element(key: impl Into<PathSegment>, inner: FailurePath) -> Self {
        FailurePath::InvalidElementValue {
            key: key.into(),
            path: Box::new(inner),
        }
    }

    /// Wraps `inner` as the failure of a record key.
    pub fn key(inner: FailurePath) -> Self {
        FailurePath::InvalidElementKey {
            path: Box::new(inner),
        }
    }

    /// Machine-readable tag of the outermost variant.
    pub fn code(&self) -> &'static str {
        match self {
            FailurePath::NotString(_) => "not_string",
            FailurePath::NotNumber(_) => "not_number",
            FailurePath::NotBoolean(_) => "not_boolean",
            FailurePath::NotNull(_) => "not_null",
            FailurePath::NotUndefined(_) => "not_undefined",
            FailurePath::NotArray(_) => "not_array",
            FailurePath::NotObject(_) => "not_object",
            FailurePath::NotFound(_) => "not_found",
            FailurePath::InvalidValue(_) => "invalid_value",
            FailurePath::LengthNotEqual(_) => "length_not_equal",
            FailurePath::LengthTooShort(_) => "length_too_short",
            FailurePath::NotUnion(_) => "not_union",
            FailurePath::InvalidElementKey { .. } => "invalid_element_key",
            FailurePath::InvalidElementValue { .. } => "invalid_element_value",
        }
    }

    /// Returns the deepest failure below any element/key wrappers.
    ///
    /// A `not_union` is returned as-is since its alternatives are siblings.
    pub fn leaf(&self) -> &FailurePath {
        let mut current = self;
        loop {
            match current {
                FailurePath::InvalidElementKey { path }
                | FailurePath::InvalidElementValue { path, .. } => current = path,
                _ => return current,
            }
        }
    }

    /// Location of the rejected value relative to the parsed input.
    ///
    /// A missing required field is located at the field itself. The walk stops
    /// at a record key failure and at a union.
    ///
    /// ```rust
    /// use shapecheck::FailurePath;
    ///
    /// let path = FailurePath::element("users", FailurePath::element(0, FailurePath::NotFound("email".into())));
    /// assert_eq!(path.location().to_string(), "users[0].email");
    /// ```
    pub fn location(&self) -> JsonPath {
        let mut location = JsonPath::root();
        let mut current = self;
        loop {
            match current {
                FailurePath::InvalidElementValue { key, path } => {
                    location = location.push(key.clone());
                    current = path;
                }
                FailurePath::NotFound(name) => return location.push_field(name.as_str()),
                _ => return location,
            }
        }
    }

    /// Flattens the tree into a list of located errors.
    ///
    /// Each union alternative contributes its own errors, in declaration order.
    pub fn to_errors(&self) -> SchemaErrors {
        self.collect_errors(&JsonPath::root())
    }

    fn collect_errors(&self, at: &JsonPath) -> SchemaErrors {
        match self {
            FailurePath::InvalidElementValue { key, path } => {
                path.collect_errors(&at.push(key.clone()))
            }
            FailurePath::InvalidElementKey { path } => {
                let errors = path.collect_errors(at).into_iter().map(|error| {
                    SchemaError {
                        message: format!("invalid key: {}", error.message),
                        ..error
                    }
                });
                gather(errors, || self.leaf_error(at))
            }
            FailurePath::NotUnion(branches) => gather(
                branches
                    .iter()
                    .flat_map(|branch| branch.collect_errors(at).into_iter()),
                || self.leaf_error(at),
            ),
            FailurePath::NotFound(name) => {
                SchemaErrors::single(self.leaf_error(&at.push_field(name.as_str())))
            }
            _ => SchemaErrors::single(self.leaf_error(at)),
        }
    }

    fn leaf_error(&self, at: &JsonPath) -> SchemaError {
        let error = SchemaError::new(at.clone(), self.to_string()).with_code(self.code());
        match self {
            FailurePath::NotString(got) => error.with_expected("string").with_got(type_name(got)),
            FailurePath::NotNumber(got) => error.with_expected("number").with_got(type_name(got)),
            FailurePath::NotBoolean(got) => {
                error.with_expected("boolean").with_got(type_name(got))
            }
            FailurePath::NotNull(got) => error.with_expected("null").with_got(type_name(got)),
            FailurePath::NotUndefined(got) => error
                .with_expected("undefined")
                .with_got(value_type_name(got)),
            FailurePath::NotArray(got) => error.with_expected("array").with_got(type_name(got)),
            FailurePath::NotObject(got) => error.with_expected("object").with_got(type_name(got)),
            FailurePath::NotFound(_) => error.with_expected("value"),
            FailurePath::InvalidValue(got) => error.with_got(render(got)),
            FailurePath::LengthNotEqual(got) | FailurePath::LengthTooShort(got) => {
                error.with_got(format!("{} items", item_count(got)))
            }
            _ => error,
        }
    }
}

/// Collects errors into a non-empty list, falling back when there are none.
fn gather(
    errors: impl Iterator<Item = SchemaError>,
    fallback: impl FnOnce() -> SchemaError,
) -> SchemaErrors {
    SchemaErrors::from_vec(errors.collect())
        .unwrap_or_else(|| SchemaErrors::single(fallback()))
}

fn render(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

fn alternatives(branches: &[FailurePath]) -> String {
    branches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn item_count(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

fn type_name(value: &Option<Value>) -> &'static str {
    match value {
        Some(v) => value_type_name(v),
        None => "undefined",
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
