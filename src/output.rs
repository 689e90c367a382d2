//! Typed views over accepted values.
//!
//! A successful parse hands back a [`Valid<'a, T>`]: the very input reference
//! that was checked, tagged with the marker type `T` its validator narrows to.
//! Nothing is copied or rebuilt. The markers below only exist at compile time.

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

/// A nominal brand attached by [`Schema::opaque`](crate::Schema::opaque).
///
/// Declare brands with [`brand!`](crate::brand).
pub trait Brand: 'static {
    /// Name reported by [`Valid::brand`].
    const NAME: &'static str;
}

/// Declares an uninhabited [`Brand`] type.
///
/// ```rust
/// shapecheck::brand!(pub UserId);
///
/// assert_eq!(<UserId as shapecheck::Brand>::NAME, "UserId");
/// ```
#[macro_export]
macro_rules! brand {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Brand for $name {
            const NAME: &'static str = stringify!($name);
        }
    };
}

/// Output of [`Schema::null`](crate::Schema::null).
pub enum Null {}

/// Output of [`Schema::undefined`](crate::Schema::undefined).
pub enum Undefined {}

/// Output of [`Schema::literal`](crate::Schema::literal).
pub enum Literal {}

/// Output of an [`ObjectSchema`](crate::ObjectSchema).
pub enum Object {}

/// Output of [`Schema::array`](crate::Schema::array).
pub struct Array<T>(PhantomData<fn() -> T>);

/// Output of a fixed [`Schema::tuple`](crate::Schema::tuple); `T` is a Rust tuple
/// of element outputs.
pub struct Tuple<T>(PhantomData<fn() -> T>);

/// Output of a tuple with a rest element.
pub struct RestTuple<T, R>(PhantomData<fn() -> (T, R)>);

/// Output of [`Schema::union`](crate::Schema::union).
pub struct Union<T>(PhantomData<fn() -> T>);

/// Output of [`Schema::intersection`](crate::Schema::intersection).
pub struct Intersection<T>(PhantomData<fn() -> T>);

/// Output of [`Schema::record`](crate::Schema::record).
pub struct Record<K, V>(PhantomData<fn() -> (K, V)>);

/// Output of [`Schema::readonly`](crate::Schema::readonly).
pub struct Readonly<T>(PhantomData<fn() -> T>);

/// Output of [`Schema::opaque`](crate::Schema::opaque): `T` branded with `B`.
pub struct Opaque<B, T>(PhantomData<fn() -> (B, T)>);

/// An accepted input, narrowed to `T`.
///
/// `None` inside means the accepted value was `undefined`.
///
/// Branded views do not coerce to their unbranded form:
///
/// ```rust,compile_fail
/// use shapecheck::{Opaque, Schema, Valid, Validator};
/// use serde_json::json;
///
/// shapecheck::brand!(UserId);
///
/// fn lookup(_id: Valid<'_, Opaque<UserId, String>>) {}
///
/// let raw = json!("u-1");
/// let plain = Schema::string().parse(&raw).into_result().unwrap();
/// lookup(plain);
/// ```
pub struct Valid<'a, T> {
    value: Option<&'a Value>,
    _type: PhantomData<fn() -> T>,
}

impl<'a, T> Valid<'a, T> {
    pub(crate) fn new(value: Option<&'a Value>) -> Self {
        Self {
            value,
            _type: PhantomData,
        }
    }

    /// The accepted input itself, `None` for `undefined`.
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// True if this view borrows exactly `input` (pointer identity).
    pub fn is(&self, input: &Value) -> bool {
        self.value.is_some_and(|v| std::ptr::eq(v, input))
    }

    /// The input as a JSON object, if it is one.
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        self.value.and_then(Value::as_object)
    }

    /// The input as a slice of elements, if it is an array.
    pub fn as_array(&self) -> Option<&'a [Value]> {
        self.value.and_then(Value::as_array).map(Vec::as_slice)
    }
}

impl<T> Clone for Valid<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Valid<'_, T> {}

impl<T> fmt::Debug for Valid<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => f.debug_tuple("Valid").field(v).finish(),
            None => f.write_str("Valid(undefined)"),
        }
    }
}

// Accessors below rely on the narrowing contract of the validator that produced
// the view. A type guard that claims a marker it does not check breaks it.
#[cold]
fn broken_narrowing(expected: &str) -> ! {
    panic!("value accepted as {} is not one; check the type guard that produced it", expected)
}

impl<'a> Valid<'a, String> {
    /// The accepted string.
    pub fn as_str(&self) -> &'a str {
        match self.value {
            Some(Value::String(s)) => s,
            _ => broken_narrowing("string"),
        }
    }
}

impl Valid<'_, f64> {
    /// The accepted number.
    pub fn as_f64(&self) -> f64 {
        match self.value.and_then(Value::as_f64) {
            Some(n) => n,
            None => broken_narrowing("number"),
        }
    }
}

impl Valid<'_, bool> {
    /// The accepted boolean.
    pub fn as_bool(&self) -> bool {
        match self.value {
            Some(Value::Bool(b)) => *b,
            _ => broken_narrowing("boolean"),
        }
    }
}

impl<'a, T: 'a> Valid<'a, Array<T>> {
    fn items(&self) -> &'a [Value] {
        match self.as_array() {
            Some(items) => items,
            None => broken_narrowing("array"),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// True if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// The element at `index`, narrowed to `T`.
    pub fn get(&self, index: usize) -> Option<Valid<'a, T>> {
        self.items().get(index).map(|item| Valid::new(Some(item)))
    }

    /// Iterates over the elements, each narrowed to `T`.
    pub fn iter(&self) -> impl Iterator<Item = Valid<'a, T>> + 'a {
        self.items().iter().map(|item| Valid::new(Some(item)))
    }
}

impl<'a, K: 'a, V: 'a> Valid<'a, Record<K, V>> {
    fn entries_map(&self) -> &'a Map<String, Value> {
        match self.as_object() {
            Some(map) => map,
            None => broken_narrowing("object"),
        }
    }

    /// The value under `key`, narrowed to `V`.
    pub fn get(&self, key: &str) -> Option<Valid<'a, V>> {
        self.entries_map().get(key).map(|v| Valid::new(Some(v)))
    }

    /// Iterates over entries in input order, values narrowed to `V`.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, Valid<'a, V>)> + 'a {
        self.entries_map()
            .iter()
            .map(|(k, v)| (k.as_str(), Valid::new(Some(v))))
    }
}

impl<'a> Valid<'a, Object> {
    /// Raw value of a field, `None` if the key is absent.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl<'a, T> Valid<'a, Readonly<T>> {
    /// Drops the readonly marker.
    pub fn into_inner(self) -> Valid<'a, T> {
        Valid::new(self.value)
    }
}

impl<'a, B: Brand, T> Valid<'a, Opaque<B, T>> {
    /// Drops the brand, keeping the underlying narrowing.
    pub fn unbrand(self) -> Valid<'a, T> {
        Valid::new(self.value)
    }

    /// Name of the brand, as declared with [`brand!`](crate::brand).
    pub fn brand(&self) -> &'static str {
        B::NAME
    }
}
