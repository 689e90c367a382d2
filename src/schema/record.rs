//! Keyed-map validation.

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::Record;

use super::traits::{Check, Validator};

/// Validates an object used as a map: every key against `keys`, every value
/// against `values`.
///
/// Entries are visited in input order. A rejected key is reported as
/// `invalid_element_key`, a rejected value as `invalid_element_value` keyed by
/// the property name. The first rejection ends the check.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// shapecheck::brand!(Id);
///
/// let schema = Schema::record(Schema::opaque::<Id, _>(Schema::string()), Schema::number());
///
/// let input = json!({ "a": 1 });
/// let scores = schema.parse(&input).into_result().unwrap();
/// assert_eq!(scores.get("a").map(|n| n.as_f64()), Some(1.0));
///
/// assert_eq!(
///     schema.parse(&json!({ "a": "a" })).into_result().unwrap_err(),
///     FailurePath::element("a", FailurePath::NotNumber(Some(json!("a"))))
/// );
/// assert_eq!(
///     schema.parse(&json!(null)).into_result().unwrap_err(),
///     FailurePath::NotObject(Some(json!(null)))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordSchema<K, V> {
    keys: K,
    values: V,
}

impl<K: Validator, V: Validator> RecordSchema<K, V> {
    /// Creates a record schema from a key validator and a value validator.
    pub fn new(keys: K, values: V) -> Self {
        Self { keys, values }
    }
}

impl<K: Check, V: Check> Check for RecordSchema<K, V> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        let entries = match value {
            Some(Value::Object(entries)) => entries,
            other => return Err(FailurePath::NotObject(other.cloned())),
        };
        for (key, item) in entries {
            let key_value = Value::String(key.clone());
            self.keys.check(Some(&key_value)).map_err(FailurePath::key)?;
            self.values
                .check(Some(item))
                .map_err(|path| FailurePath::element(key.as_str(), path))?;
        }
        Ok(())
    }
}

impl<K: Validator, V: Validator> Validator for RecordSchema<K, V> {
    type Output = Record<K::Output, V::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Schema;
    use serde_json::json;

    #[test]
    fn test_rejects_arrays_and_scalars() {
        let schema = RecordSchema::new(Schema::string(), Schema::number());
        for value in [json!([1, 2]), json!("a"), json!(3)] {
            assert_eq!(
                schema.check(Some(&value)),
                Err(FailurePath::NotObject(Some(value.clone())))
            );
        }
        assert_eq!(schema.check(None), Err(FailurePath::NotObject(None)));
    }

    #[test]
    fn test_empty_object_passes() {
        let schema = RecordSchema::new(Schema::string(), Schema::number());
        assert!(schema.check(Some(&json!({}))).is_ok());
    }

    #[test]
    fn test_key_failure_wraps_key_diagnostic() {
        let schema = RecordSchema::new(
            Schema::union((Schema::literal("x"), Schema::literal("y"))),
            Schema::number(),
        );
        assert!(schema.check(Some(&json!({ "x": 1, "y": 2 }))).is_ok());
        assert_eq!(
            schema.check(Some(&json!({ "x": 1, "z": 2 }))),
            Err(FailurePath::key(FailurePath::NotUnion(vec![
                FailurePath::InvalidValue(Some(json!("z"))),
                FailurePath::InvalidValue(Some(json!("z"))),
            ])))
        );
    }

    #[test]
    fn test_key_checked_before_its_value() {
        let schema = RecordSchema::new(Schema::literal("ok"), Schema::number());
        assert_eq!(
            schema.check(Some(&json!({ "bad": "also bad" }))),
            Err(FailurePath::key(FailurePath::InvalidValue(Some(json!("bad")))))
        );
    }

    #[test]
    fn test_entries_checked_in_input_order() {
        let schema = RecordSchema::new(Schema::string(), Schema::number());
        assert_eq!(
            schema.check(Some(&json!({ "z": "first", "a": "second" }))),
            Err(FailurePath::element("z", FailurePath::NotNumber(Some(json!("first")))))
        );
    }
}
