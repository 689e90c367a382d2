//! Boolean, null and undefined validation.

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::{Null, Undefined};

use super::traits::{Check, Validator};

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

impl Check for BooleanSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match value {
            Some(Value::Bool(_)) => Ok(()),
            other => Err(FailurePath::NotBoolean(other.cloned())),
        }
    }
}

impl Validator for BooleanSchema {
    type Output = bool;
}

/// Accepts `null` only. An absent value is `undefined`, not `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchema;

impl Check for NullSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match value {
            Some(Value::Null) => Ok(()),
            other => Err(FailurePath::NotNull(other.cloned())),
        }
    }
}

impl Validator for NullSchema {
    type Output = Null;
}

/// Accepts only the absent value.
///
/// Present values, `null` included, are rejected. Inside an object a
/// required field is checked only when its key exists, so `undefined` is
/// mostly useful at the top level and in union alternatives.
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// assert!(Schema::undefined().parse_input(None).is_success());
/// assert_eq!(
///     Schema::undefined().parse(&json!(null)).into_result().unwrap_err(),
///     FailurePath::NotUndefined(json!(null))
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedSchema;

impl Check for UndefinedSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match value {
            None => Ok(()),
            Some(present) => Err(FailurePath::NotUndefined(present.clone())),
        }
    }
}

impl Validator for UndefinedSchema {
    type Output = Undefined;
}
