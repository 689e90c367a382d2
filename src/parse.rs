//! The parse entry point.
//!
//! [`parse`] runs a validator once over an input and turns its result into a
//! [`Parsed`]: either the narrowed input itself or the failure path.

use serde_json::{json, Value};
use stillwater::Validation;
use tracing::{debug, trace};

use crate::error::FailurePath;
use crate::output::Valid;
use crate::schema::Validator;

/// Outcome of a parse: the accepted input narrowed to `T`, or why it was rejected.
pub type Parsed<'a, T> = Validation<Valid<'a, T>, FailurePath>;

/// Validates `value` against `validator`.
///
/// On success the returned view borrows `value` itself; nothing is copied.
///
/// # Example
///
/// ```rust
/// use shapecheck::{parse, FailurePath, Schema};
/// use serde_json::json;
///
/// let pair = Schema::tuple((Schema::null(), Schema::string()));
///
/// let input = json!([null, "a"]);
/// assert!(parse(&pair, &input).into_result().unwrap().is(&input));
///
/// let failure = parse(&pair, &json!([null, 1])).into_result().unwrap_err();
/// assert_eq!(
///     failure,
///     FailurePath::element(1, FailurePath::NotString(Some(json!(1))))
/// );
/// ```
pub fn parse<'a, V>(validator: &V, value: &'a Value) -> Parsed<'a, V::Output>
where
    V: Validator + ?Sized,
{
    parse_input(validator, Some(value))
}

/// Validates a possibly-absent value; `None` is `undefined`.
pub fn parse_input<'a, V>(validator: &V, value: Option<&'a Value>) -> Parsed<'a, V::Output>
where
    V: Validator + ?Sized,
{
    trace!(present = value.is_some(), "parsing value");
    match validator.check(value) {
        Ok(()) => Validation::Success(Valid::new(value)),
        Err(path) => {
            debug!(code = path.code(), failure = %path, "value rejected");
            Validation::Failure(path)
        }
    }
}

/// Renders a parse outcome as `{"success": true, "value": ..}` or
/// `{"success": false, "path": ..}`.
///
/// An accepted `undefined` renders without a `value` key.
pub fn outcome<T>(parsed: &Parsed<'_, T>) -> Value {
    match parsed {
        Validation::Success(valid) => match valid.value() {
            Some(value) => json!({ "success": true, "value": value }),
            None => json!({ "success": true }),
        },
        Validation::Failure(path) => json!({ "success": false, "path": path }),
    }
}
