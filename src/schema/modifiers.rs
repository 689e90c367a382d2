//! Type-level modifiers: readonly and opaque brands.
//!
//! Both wrap another validator and change only its output marker. Acceptance
//! and failure paths are exactly those of the wrapped validator.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::error::FailurePath;
use crate::output::{Brand, Opaque, Readonly};

use super::traits::{Check, Validator};

/// Marks the accepted value readonly.
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::readonly(Schema::array(Schema::number()));
///
/// let input = json!([1, 2]);
/// let numbers = schema.parse(&input).into_result().unwrap().into_inner();
/// assert_eq!(numbers.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ReadonlySchema<V> {
    inner: V,
}

impl<V: Validator> ReadonlySchema<V> {
    /// Wraps `inner`, marking its output readonly.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Check> Check for ReadonlySchema<V> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        self.inner.check(value)
    }
}

impl<V: Validator> Validator for ReadonlySchema<V> {
    type Output = Readonly<V::Output>;
}

/// Attaches the nominal brand `B` to the accepted value.
///
/// Two opaque validators over the same inner validator but different brands
/// accept the same values while producing incompatible outputs.
///
/// ```rust
/// use shapecheck::{FailurePath, Schema, Validator};
/// use serde_json::json;
///
/// shapecheck::brand!(Email);
///
/// let email = Schema::opaque::<Email, _>(Schema::string());
///
/// let input = json!("a@b.c");
/// let parsed = email.parse(&input).into_result().unwrap();
/// assert_eq!(parsed.brand(), "Email");
/// assert_eq!(parsed.unbrand().as_str(), "a@b.c");
///
/// assert_eq!(
///     email.parse(&json!(5)).into_result().unwrap_err(),
///     FailurePath::NotString(Some(json!(5)))
/// );
/// ```
pub struct OpaqueSchema<B, V> {
    inner: V,
    _brand: PhantomData<fn() -> B>,
}

impl<B: Brand, V: Validator> OpaqueSchema<B, V> {
    /// Wraps `inner`, branding its output with `B`.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _brand: PhantomData,
        }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<B, V: Clone> Clone for OpaqueSchema<B, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _brand: PhantomData,
        }
    }
}

impl<B: Brand, V: fmt::Debug> fmt::Debug for OpaqueSchema<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueSchema")
            .field("brand", &B::NAME)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<B: Brand, V: Check> Check for OpaqueSchema<B, V> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        self.inner.check(value)
    }
}

impl<B: Brand, V: Validator> Validator for OpaqueSchema<B, V> {
    type Output = Opaque<B, V::Output>;
}
