//! Union and intersection.
//!
//! - [`UnionSchema`]: the first alternative that accepts wins; if none does,
//!   every alternative's failure is kept, in declaration order.
//! - [`IntersectionSchema`]: every part must accept; the first rejection is
//!   reported unchanged.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{FailurePath, Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::union((
//!     Schema::object().required("a", Schema::null()),
//!     Schema::string(),
//! ));
//!
//! assert!(schema.parse(&json!("ok")).is_success());
//! assert!(schema.parse(&json!({ "a": null })).is_success());
//! assert_eq!(
//!     schema.parse(&json!({ "a": 9 })).into_result().unwrap_err(),
//!     FailurePath::NotUnion(vec![
//!         FailurePath::element("a", FailurePath::NotNull(Some(json!(9)))),
//!         FailurePath::NotString(Some(json!({ "a": 9 }))),
//!     ])
//! );
//! ```

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::{Intersection, Union};

use super::traits::{Check, Validator, ValidatorList};

/// Accepts values accepted by at least one alternative.
///
/// Alternatives are tried in order and each attempt gets its own result, so
/// one alternative's failure never leaks into another's. No attempt is made
/// to find the most specific match: order alternatives so the first match is
/// the intended one.
#[derive(Debug, Clone)]
pub struct UnionSchema<L> {
    alternatives: L,
}

impl<L: ValidatorList> UnionSchema<L> {
    /// # Panics
    ///
    /// Panics if `alternatives` is empty.
    pub fn new(alternatives: L) -> Self {
        assert!(
            !alternatives.is_empty(),
            "a union needs at least one alternative"
        );
        Self { alternatives }
    }
}

impl<L: ValidatorList> Check for UnionSchema<L> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let mut failures = Vec::with_capacity(self.alternatives.len());
        for n in 0..self.alternatives.len() {
            match self.alternatives.check_nth(n, value) {
                Ok(()) => return Ok(()),
                Err(path) => failures.push(path),
            }
        }
        Err(FailurePath::NotUnion(failures))
    }
}

impl<L: ValidatorList> Validator for UnionSchema<L> {
    type Output = Union<L::Outputs>;
}

/// Accepts values accepted by every part.
///
/// Mostly used to combine object fragments with different field modifiers:
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::intersection((
///     Schema::object().optional("a", Schema::string()),
///     Schema::object().required("b", Schema::number()),
/// ));
///
/// assert!(schema.parse(&json!({ "a": "a", "b": 1 })).is_success());
/// assert!(schema.parse(&json!({ "b": 1 })).is_success());
/// assert_eq!(
///     schema.parse(&json!({ "a": "a" })).into_result().unwrap_err(),
///     FailurePath::NotFound("b".to_string())
/// );
/// ```
///
/// An empty intersection accepts everything.
#[derive(Debug, Clone)]
pub struct IntersectionSchema<L> {
    parts: L,
}

impl<L: ValidatorList> IntersectionSchema<L> {
    /// Creates an intersection; with no parts it accepts everything.
    pub fn new(parts: L) -> Self {
        Self { parts }
    }
}

impl<L: ValidatorList> Check for IntersectionSchema<L> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        for n in 0..self.parts.len() {
            self.parts.check_nth(n, value)?;
        }
        Ok(())
    }
}

impl<L: ValidatorList> Validator for IntersectionSchema<L> {
    type Output = Intersection<L::Outputs>;
}
