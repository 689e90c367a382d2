//! String validation.

use serde_json::Value;

use crate::error::FailurePath;

use super::traits::{Check, Validator};

/// Accepts JSON strings and nothing else.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::string();
///
/// assert!(schema.parse(&json!("hello")).is_success());
///
/// let failure = schema.parse(&json!(1)).into_result().unwrap_err();
/// assert_eq!(failure, FailurePath::NotString(Some(json!(1))));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

impl StringSchema {
    /// Creates a string schema.
    pub fn new() -> Self {
        Self
    }
}

impl Check for StringSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match value {
            Some(Value::String(_)) => Ok(()),
            other => Err(FailurePath::NotString(other.cloned())),
        }
    }
}

impl Validator for StringSchema {
    type Output = String;
}
