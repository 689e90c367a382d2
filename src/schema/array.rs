//! Array and tuple validation.
//!
//! All three validators here are fail-fast: elements are checked left to
//! right and the first rejection is reported as `invalid_element_value` keyed by
//! its index. Later elements are never looked at.

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::{Array, RestTuple, Tuple};

use super::traits::{Check, Validator, ValidatorList};

/// Validates that the value is an array whose every element passes `items`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::union((Schema::string(), Schema::null())));
///
/// assert!(schema.parse(&json!(["a", null])).is_success());
/// assert_eq!(
///     schema.parse(&json!(["a", 1])).into_result().unwrap_err(),
///     FailurePath::element(1, FailurePath::NotUnion(vec![
///         FailurePath::NotString(Some(json!(1))),
///         FailurePath::NotNull(Some(json!(1))),
///     ]))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<V> {
    items: V,
}

impl<V: Validator> ArraySchema<V> {
    /// Creates an array schema checking every element with `items`.
    pub fn new(items: V) -> Self {
        Self { items }
    }
}

impl<V: Check> Check for ArraySchema<V> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let items = as_array(value)?;
        for (index, item) in items.iter().enumerate() {
            self.items
                .check(Some(item))
                .map_err(|path| FailurePath::element(index, path))?;
        }
        Ok(())
    }
}

impl<V: Validator> Validator for ArraySchema<V> {
    type Output = Array<V::Output>;
}

/// Validates a fixed-length array position by position.
///
/// Call [`rest`](TupleSchema::rest) to accept any number of trailing elements.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::tuple((Schema::null(), Schema::string(), Schema::literal("literal")));
///
/// assert!(schema.parse(&json!([null, "a", "literal"])).is_success());
/// assert_eq!(
///     schema.parse(&json!([null, "a"])).into_result().unwrap_err(),
///     FailurePath::LengthNotEqual(json!([null, "a"]))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TupleSchema<L> {
    elements: L,
}

impl<L: ValidatorList> TupleSchema<L> {
    /// Creates a fixed-length tuple schema from positional validators.
    pub fn new(elements: L) -> Self {
        Self { elements }
    }

    /// Accepts the fixed prefix followed by any number of `rest` elements.
    ///
    /// ```rust
    /// use shapecheck::{FailurePath, Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::tuple((Schema::number(), Schema::string())).rest(Schema::boolean());
    ///
    /// assert!(schema.parse(&json!([1, "a"])).is_success());
    /// assert!(schema.parse(&json!([1, "a", true, false])).is_success());
    /// assert_eq!(
    ///     schema.parse(&json!([1])).into_result().unwrap_err(),
    ///     FailurePath::LengthTooShort(json!([1]))
    /// );
    /// ```
    pub fn rest<R: Validator>(self, rest: R) -> RestTupleSchema<L, R> {
        RestTupleSchema {
            prefix: self.elements,
            rest,
        }
    }
}

impl<L: ValidatorList> Check for TupleSchema<L> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let items = as_array(value)?;
        if items.len() != self.elements.len() {
            return Err(FailurePath::LengthNotEqual(Value::Array(items.clone())));
        }
        check_prefix(&self.elements, items)
    }
}

impl<L: ValidatorList> Validator for TupleSchema<L> {
    type Output = Tuple<L::Outputs>;
}

/// A tuple with a fixed prefix and an unbounded rest element.
#[derive(Debug, Clone)]
pub struct RestTupleSchema<L, R> {
    prefix: L,
    rest: R,
}

impl<L: ValidatorList, R: Check> Check for RestTupleSchema<L, R> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let items = as_array(value)?;
        let fixed = self.prefix.len();
        if items.len() < fixed {
            return Err(FailurePath::LengthTooShort(Value::Array(items.clone())));
        }
        check_prefix(&self.prefix, items)?;
        for (index, item) in items.iter().enumerate().skip(fixed) {
            self.rest
                .check(Some(item))
                .map_err(|path| FailurePath::element(index, path))?;
        }
        Ok(())
    }
}

impl<L: ValidatorList, R: Validator> Validator for RestTupleSchema<L, R> {
    type Output = RestTuple<L::Outputs, R::Output>;
}

fn as_array(value: Option<&Value>) -> Result<&Vec<Value>, FailurePath> {
    match value {
        Some(Value::Array(items)) => Ok(items),
        other => Err(FailurePath::NotArray(other.cloned())),
    }
}

/// Checks `items[i]` against the `i`th validator for every validator in `list`.
fn check_prefix<L: ValidatorList>(list: &L, items: &[Value]) -> Result<(), FailurePath> {
    for (index, item) in items.iter().enumerate().take(list.len()) {
        list.check_nth(index, Some(item))
            .map_err(|path| FailurePath::element(index, path))?;
    }
    Ok(())
}
