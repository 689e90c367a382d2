//! Failure reporting.
//!
//! [`FailurePath`] is the structured diagnostic every validator produces;
//! [`SchemaError`]/[`SchemaErrors`] are its flattened, located form.

mod failure;
mod schema_error;

pub use failure::FailurePath;
pub use schema_error::{SchemaError, SchemaErrors};
