//! # Shapecheck
//!
//! Composable runtime validators for untyped JSON values, with typed views of
//! what they accept and structured paths describing what they reject.
//!
//! ## Overview
//!
//! A validator is built once from smaller validators and then run against any
//! number of inputs. A run either accepts the input, handing back the input
//! itself narrowed to the validator's output type, or rejects it with a
//! [`FailurePath`]: a tree naming the first element, key or field that failed
//! and why. Absent values (`undefined`) are modelled as `None`, so "missing"
//! and `null` stay distinct.
//!
//! Composites are fail-fast: arrays, tuples, records, objects and
//! intersections stop at the first rejection. Unions are the one exception;
//! when every alternative rejects, every alternative's failure is kept.
//!
//! ## Core Types
//!
//! - [`Schema`]: Factory for every validator
//! - [`Check`] / [`Validator`]: The runtime test and the output type of a validator
//! - [`Valid`]: An accepted input narrowed to a marker type
//! - [`FailurePath`]: Why an input was rejected
//! - [`SchemaErrors`]: The same failure flattened into located messages
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{outcome, FailurePath, Schema, Validator};
//! use serde_json::json;
//!
//! let entry = Schema::tuple((
//!     Schema::string(),
//!     Schema::union((Schema::number(), Schema::null())),
//! ));
//!
//! let input = json!(["width", 12]);
//! let parsed = entry.parse(&input);
//! assert_eq!(outcome(&parsed), json!({ "success": true, "value": ["width", 12] }));
//!
//! let failure = entry.parse(&json!(["width", "12"])).into_result().unwrap_err();
//! assert_eq!(failure.location().to_string(), "[1]");
//! assert_eq!(failure.code(), "invalid_element_value");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod output;
pub mod parse;
pub mod path;
pub mod schema;

pub use error::{FailurePath, SchemaError, SchemaErrors};
pub use output::{
    Array, Brand, Intersection, Literal, Null, Object, Opaque, Readonly, Record, RestTuple,
    Tuple, Undefined, Union, Valid,
};
pub use parse::{outcome, parse, parse_input, Parsed};
pub use path::{JsonPath, PathSegment};
pub use schema::{
    ArraySchema, BooleanSchema, Check, FieldDef, Guard, IntersectionSchema, IntoLiteral,
    LiteralSchema, Mutability, NullSchema, NumberSchema, ObjectSchema, OnInput, OnValue,
    OpaqueSchema, Presence, ReadonlySchema, RecordSchema, RestTupleSchema, Schema, StringSchema,
    TupleSchema, TypeGuard, UndefinedSchema, UnionSchema, Validator, ValidatorList,
};
