//! Literal values and lifted type-guard predicates.
//!
//! Both report `invalid_value` with the rejected input.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::Literal;

use super::traits::{Check, Validator};

/// Accepts values strictly equal to one fixed value.
///
/// Numbers compare by numeric value, so `1` and `1.0` are the same literal.
/// A NaN or infinite literal is kept as given: JSON cannot carry such a
/// number, so it never matches.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::literal("literal");
///
/// assert!(schema.parse(&json!("literal")).is_success());
/// assert_eq!(
///     schema.parse(&json!("LITERAL")).into_result().unwrap_err(),
///     FailurePath::InvalidValue(Some(json!("LITERAL")))
/// );
///
/// assert!(Schema::literal(f64::NAN).parse(&json!(null)).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralSchema {
    expected: Expected,
}

#[derive(Debug, Clone, PartialEq)]
enum Expected {
    Present(Value),
    Undefined,
    NonFinite(f64),
}

impl LiteralSchema {
    /// Creates a literal for a string, boolean, number or `Value`.
    pub fn new(expected: impl IntoLiteral) -> Self {
        expected.into_literal()
    }

    /// Creates the literal `undefined`, matched only by an absent value.
    ///
    /// Unlike [`Schema::undefined`](crate::Schema::undefined), a present value
    /// is reported as `invalid_value`.
    ///
    /// ```rust
    /// use shapecheck::{FailurePath, LiteralSchema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = LiteralSchema::undefined();
    ///
    /// assert!(schema.parse_input(None).is_success());
    /// assert_eq!(
    ///     schema.parse(&json!(null)).into_result().unwrap_err(),
    ///     FailurePath::InvalidValue(Some(json!(null)))
    /// );
    /// ```
    pub fn undefined() -> Self {
        Self {
            expected: Expected::Undefined,
        }
    }

    /// The matched value; `None` for `undefined` and non-finite literals.
    pub fn expected(&self) -> Option<&Value> {
        match &self.expected {
            Expected::Present(value) => Some(value),
            Expected::Undefined | Expected::NonFinite(_) => None,
        }
    }

    fn present(value: Value) -> Self {
        Self {
            expected: Expected::Present(value),
        }
    }

    fn float(value: f64) -> Self {
        if value.is_finite() {
            Self::present(Value::from(value))
        } else {
            Self {
                expected: Expected::NonFinite(value),
            }
        }
    }
}

/// Values a [`LiteralSchema`] can be built from.
///
/// Floats go through here rather than `Into<Value>` so that NaN and the
/// infinities are not turned into `null`.
pub trait IntoLiteral {
    /// Builds the literal matching `self`.
    fn into_literal(self) -> LiteralSchema;
}

macro_rules! impl_into_literal {
    ($($ty:ty),+) => {
        $(
            impl IntoLiteral for $ty {
                fn into_literal(self) -> LiteralSchema {
                    LiteralSchema::present(Value::from(self))
                }
            }
        )+
    };
}

impl_into_literal!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, &str, String, Value);

impl IntoLiteral for f64 {
    fn into_literal(self) -> LiteralSchema {
        LiteralSchema::float(self)
    }
}

impl IntoLiteral for f32 {
    fn into_literal(self) -> LiteralSchema {
        LiteralSchema::float(f64::from(self))
    }
}

impl Check for LiteralSchema {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        match (&self.expected, value) {
            (Expected::Present(expected), Some(v)) if strictly_equal(v, expected) => Ok(()),
            (Expected::Undefined, None) => Ok(()),
            _ => Err(FailurePath::InvalidValue(value.cloned())),
        }
    }
}

impl Validator for LiteralSchema {
    type Output = Literal;
}

fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            x.as_f64() == y.as_f64()
        }
        _ => a == b,
    }
}

/// The predicate behind a [`TypeGuard`].
///
/// Implemented by [`OnValue`] and [`OnInput`]; build guards through
/// [`Schema::type_guard`](crate::Schema::type_guard) and
/// [`Schema::type_guard_input`](crate::Schema::type_guard_input).
pub trait Guard: Send + Sync {
    /// True if `value` (`None` for `undefined`) is accepted.
    fn accepts(&self, value: Option<&Value>) -> bool;
}

/// A predicate over present values. `undefined` is rejected without a call.
#[derive(Clone)]
pub struct OnValue<F>(F);

impl<F> Guard for OnValue<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn accepts(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| (self.0)(v))
    }
}

/// A predicate over every input, `undefined` included.
#[derive(Clone)]
pub struct OnInput<F>(F);

impl<F> Guard for OnInput<F>
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    fn accepts(&self, value: Option<&Value>) -> bool {
        (self.0)(value)
    }
}

/// Lifts a caller-supplied predicate into a validator narrowing to `T`.
///
/// The predicate's claim is trusted: whatever it accepts is treated as a `T`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::{json, Value};
///
/// let schema = Schema::type_guard::<f64, _>(Value::is_number);
///
/// assert_eq!(schema.parse(&json!(1)).into_result().unwrap().as_f64(), 1.0);
/// assert_eq!(
///     schema.parse(&json!("1")).into_result().unwrap_err(),
///     FailurePath::InvalidValue(Some(json!("1")))
/// );
/// ```
pub struct TypeGuard<T, G> {
    guard: G,
    _narrows: PhantomData<fn() -> T>,
}

impl<T, F> TypeGuard<T, OnValue<F>>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    /// Guards present values with `predicate`; `undefined` is rejected.
    pub fn new(predicate: F) -> Self {
        Self::from_guard(OnValue(predicate))
    }
}

impl<T, F> TypeGuard<T, OnInput<F>>
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    /// Guards every input with `predicate`, `None` standing for `undefined`.
    pub fn for_input(predicate: F) -> Self {
        Self::from_guard(OnInput(predicate))
    }
}

impl<T, G: Guard> TypeGuard<T, G> {
    fn from_guard(guard: G) -> Self {
        Self {
            guard,
            _narrows: PhantomData,
        }
    }
}

impl<T, G: Clone> Clone for TypeGuard<T, G> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            _narrows: PhantomData,
        }
    }
}

impl<T, G> fmt::Debug for TypeGuard<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeGuard")
            .field("narrows_to", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T, G: Guard> Check for TypeGuard<T, G> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        if self.guard.accepts(value) {
            Ok(())
        } else {
            Err(FailurePath::InvalidValue(value.cloned()))
        }
    }
}

impl<T, G: Guard> Validator for TypeGuard<T, G> {
    type Output = T;
}
