//! Number validation.
//!
//! There is no coercion: the numeric string `"1"` is not a number.

use serde_json::Value;

use crate::error::FailurePath;

use super::traits::{Check, Validator};

/// Accepts any JSON number, integer or float.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::number();
///
/// let input = json!(2.5);
/// assert_eq!(schema.parse(&input).into_result().unwrap().as_f64(), 2.5);
/// assert!(schema.parse(&json!("1")).is_failure());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl NumberSchema {
    /// Creates a number schema.
    pub fn new() -> Self {
        Self
    }
}

impl Check for NumberSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match value {
            Some(Value::Number(_)) => Ok(()),
            other => Err(FailurePath::NotNumber(other.cloned())),
        }
    }
}

impl Validator for NumberSchema {
    type Output = f64;
}
