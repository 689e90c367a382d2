//! Validator definitions.
//!
//! Every validator implements [`Check`] (the runtime test) and [`Validator`]
//! (the type accepted values narrow to). Composite validators are built from
//! smaller ones through the [`Schema`] factory and never mutate after
//! construction, so one definition can be reused and shared freely.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{FailurePath, Schema, Validator};
//! use serde_json::json;
//!
//! let user = Schema::object()
//!     .required("name", Schema::string())
//!     .optional("tags", Schema::array(Schema::string()));
//!
//! assert!(user.parse(&json!({ "name": "Alice" })).is_success());
//! assert_eq!(
//!     user.parse(&json!({ "name": "Alice", "tags": ["a", 2] })).into_result().unwrap_err(),
//!     FailurePath::element("tags", FailurePath::element(1, FailurePath::NotString(Some(json!(2)))))
//! );
//! ```

mod array;
mod combinators;
mod literal;
mod modifiers;
mod numeric;
mod object;
mod primitive;
mod record;
mod string;
mod traits;

use serde_json::Value;

use crate::output::Brand;

pub use array::{ArraySchema, RestTupleSchema, TupleSchema};
pub use combinators::{IntersectionSchema, UnionSchema};
pub use literal::{Guard, IntoLiteral, LiteralSchema, OnInput, OnValue, TypeGuard};
pub use modifiers::{OpaqueSchema, ReadonlySchema};
pub use numeric::NumberSchema;
pub use object::{FieldDef, Mutability, ObjectSchema, Presence};
pub use primitive::{BooleanSchema, NullSchema, UndefinedSchema};
pub use record::RecordSchema;
pub use string::StringSchema;
pub use traits::{Check, Validator, ValidatorList};

/// Entry point for building validators.
///
/// `Schema` only holds factory functions. Lists of validators (for tuples,
/// unions and intersections) are passed as Rust tuples, or as a `Vec` when
/// every element has the same type.
pub struct Schema;

impl Schema {
    /// Accepts strings.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Accepts numbers, integer or not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// assert!(Schema::number().parse(&json!(1.5)).is_success());
    /// assert!(Schema::number().parse(&json!("1.5")).is_failure());
    /// ```
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Accepts `true` and `false`.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema
    }

    /// Accepts `null`.
    pub fn null() -> NullSchema {
        NullSchema
    }

    /// Accepts only the absent value.
    pub fn undefined() -> UndefinedSchema {
        UndefinedSchema
    }

    /// Accepts values strictly equal to `expected`.
    ///
    /// A NaN or infinite `expected` matches nothing.
    pub fn literal(expected: impl IntoLiteral) -> LiteralSchema {
        LiteralSchema::new(expected)
    }

    /// Accepts only the absent value, rejecting anything present with
    /// `invalid_value`.
    pub fn literal_undefined() -> LiteralSchema {
        LiteralSchema::undefined()
    }

    /// Lifts a predicate into a validator narrowing to `T`.
    ///
    /// The predicate is trusted: accessors on the narrowed view assume `T`
    /// holds for everything it accepts. It only sees present values; use
    /// [`Schema::type_guard_input`] to decide on `undefined` too.
    pub fn type_guard<T, F>(predicate: F) -> TypeGuard<T, OnValue<F>>
    where
        F: Fn(&Value) -> bool + Send + Sync,
    {
        TypeGuard::new(predicate)
    }

    /// Lifts a predicate over the whole input into a validator narrowing to
    /// `T`. The predicate receives `None` for `undefined`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator};
    /// use serde_json::{json, Value};
    ///
    /// let maybe_name = Schema::type_guard_input::<(), _>(|input: Option<&Value>| {
    ///     input.map_or(true, Value::is_string)
    /// });
    ///
    /// assert!(maybe_name.parse_input(None).is_success());
    /// assert!(maybe_name.parse(&json!("Alice")).is_success());
    /// assert!(maybe_name.parse(&json!(1)).is_failure());
    /// ```
    pub fn type_guard_input<T, F>(predicate: F) -> TypeGuard<T, OnInput<F>>
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync,
    {
        TypeGuard::for_input(predicate)
    }

    /// Accepts arrays whose elements all pass `items`.
    pub fn array<V: Validator>(items: V) -> ArraySchema<V> {
        ArraySchema::new(items)
    }

    /// Accepts arrays of exactly `elements.len()` items, checked by position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let point = Schema::tuple((Schema::number(), Schema::number()));
    ///
    /// let input = json!([3, 4]);
    /// assert!(point.parse(&input).is_success());
    /// assert!(point.parse(&json!([3])).is_failure());
    /// ```
    pub fn tuple<L: ValidatorList>(elements: L) -> TupleSchema<L> {
        TupleSchema::new(elements)
    }

    /// Accepts values accepted by any alternative.
    ///
    /// # Panics
    ///
    /// Panics if `alternatives` is empty.
    pub fn union<L: ValidatorList>(alternatives: L) -> UnionSchema<L> {
        UnionSchema::new(alternatives)
    }

    /// Accepts values accepted by every part.
    pub fn intersection<L: ValidatorList>(parts: L) -> IntersectionSchema<L> {
        IntersectionSchema::new(parts)
    }

    /// Accepts objects whose keys pass `keys` and values pass `values`.
    pub fn record<K: Validator, V: Validator>(keys: K, values: V) -> RecordSchema<K, V> {
        RecordSchema::new(keys, values)
    }

    /// Creates an object schema with no fields.
    ///
    /// Add fields with [`ObjectSchema::required`] and
    /// [`ObjectSchema::optional`].
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Marks a validator's output readonly.
    pub fn readonly<V: Validator>(inner: V) -> ReadonlySchema<V> {
        ReadonlySchema::new(inner)
    }

    /// Brands a validator's output with `B`.
    pub fn opaque<B: Brand, V: Validator>(inner: V) -> OpaqueSchema<B, V> {
        OpaqueSchema::new(inner)
    }
}
