//! Flattened, located error records.
//!
//! [`FailurePath`](crate::FailurePath) is the structured tree; [`SchemaError`] is
//! one located line of it and [`SchemaErrors`] the non-empty list produced by
//! [`FailurePath::to_errors`](crate::FailurePath::to_errors).

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single located validation error.
///
/// - **path**: where in the input the rejected value sits
/// - **message**: human-readable description, the rendered failure
/// - **got**: what was received, as a type name or rendered value
/// - **expected**: what the validator wanted
/// - **code**: the failure-path tag (`not_string`, `not_found`, ...)
///
/// # Example
///
/// ```rust
/// use shapecheck::{JsonPath, SchemaError};
///
/// let error = SchemaError::new(
///     JsonPath::root().push_field("email"),
///     "expected string, got 42"
/// )
/// .with_code("not_string")
/// .with_got("number")
/// .with_expected("string");
///
/// assert_eq!(error.to_string(), "email: expected string, got 42 (expected: string) (got: number)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// The location of the rejected value.
    pub path: JsonPath,
    /// Human-readable description of the rejection.
    pub message: String,
    /// The rejected value, rendered as JSON or `undefined`.
    pub got: Option<String>,
    /// What was expected at this location.
    pub expected: Option<String>,
    /// Machine-readable failure code (e.g., `not_string`).
    pub code: String,
}

impl SchemaError {
    /// Creates an error at `path`. The code defaults to `"validation_error"`.
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "validation_error".to_string(),
        }
    }

    /// Sets the machine-readable code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the rendered rejected value.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the expectation description.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }
        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// A non-empty list of located errors.
///
/// Union failures flatten into one group per alternative, so a single failure
/// path can produce several entries. `SchemaErrors` implements `Semigroup`:
///
/// ```rust
/// use shapecheck::{JsonPath, SchemaError, SchemaErrors};
/// use stillwater::prelude::*;
///
/// let name = SchemaErrors::single(SchemaError::new(JsonPath::root().push_field("name"), "missing"));
/// let age = SchemaErrors::single(SchemaError::new(JsonPath::root().push_field("age"), "not a number"));
///
/// assert_eq!(name.combine(age).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    /// Creates a list holding one error.
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Collects `errors`, or returns `None` when there are none.
    pub fn from_vec(errors: Vec<SchemaError>) -> Option<Self> {
        errors
            .into_iter()
            .map(Self::single)
            .reduce(|acc, next| acc.combine(next))
    }

    /// Number of errors, at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// Returns all errors located at `path`.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors tagged with `code`.
    pub fn with_code(&self, code: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// The first error.
    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    /// Converts into a plain `Vec`.
    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rejected with {} error(s):", self.len())?;
        self.iter()
            .enumerate()
            .try_for_each(|(i, error)| writeln!(f, "  {}. {}", i + 1, error))
    }
}

impl std::error::Error for SchemaErrors {}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaErrors>();
    assert_sync::<SchemaErrors>();
};
