//! Traits shared by every validator.
//!
//! [`Check`] is the object-safe runtime half: one pure, synchronous check of an
//! input that either passes or returns the [`FailurePath`] explaining why not.
//! [`Validator`] adds the compile-time half, the marker type a passing value
//! narrows to. [`ValidatorList`] lets tuple, union and intersection take a
//! heterogeneous list of validators as a plain Rust tuple.

use std::sync::Arc;

use serde_json::Value;

use crate::error::FailurePath;
use crate::parse::{parse, parse_input, Parsed};

/// The runtime check of a validator.
///
/// `value` is `None` when the input is `undefined` (absent). Implementations
/// must not panic on any input and must return `Err` for every rejection.
///
/// `Send + Sync` lets one schema be shared by many threads parsing at once.
pub trait Check: Send + Sync {
    /// Accepts `value` or returns the reason it was rejected.
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath>;
}

/// A [`Check`] with the type its accepted values narrow to.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string());
///
/// let input = json!(["a", "b"]);
/// let valid = tags.parse(&input).into_result().unwrap();
/// assert_eq!(valid.iter().map(|tag| tag.as_str()).collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub trait Validator: Check {
    /// Marker type of accepted values. See [`crate::output`].
    type Output;

    /// Validates a present value.
    fn parse<'a>(&self, value: &'a Value) -> Parsed<'a, Self::Output> {
        parse(self, value)
    }

    /// Validates a possibly-absent value; `None` is `undefined`.
    fn parse_input<'a>(&self, value: Option<&'a Value>) -> Parsed<'a, Self::Output> {
        parse_input(self, value)
    }
}

impl<C: Check + ?Sized> Check for &C {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        (**self).check(value)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;
}

impl<C: Check + ?Sized> Check for Box<C> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        (**self).check(value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Output = V::Output;
}

impl<C: Check + ?Sized> Check for Arc<C> {
    fn check(&self, value: Option<&Value>) -> Result<(), FailurePath> {
        (**self).check(value)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Output = V::Output;
}

/// An ordered list of validators, indexed from 0.
///
/// Implemented for Rust tuples of up to twelve validators and for a
/// homogeneous `Vec<V>`.
pub trait ValidatorList: Send + Sync {
    /// Outputs of the listed validators, as a tuple (or `Vec` marker).
    type Outputs;

    /// Number of validators in the list.
    fn len(&self) -> usize;

    /// True if the list holds no validators.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs the `n`th validator. `n` must be below [`len`](Self::len).
    fn check_nth(&self, n: usize, value: Option<&Value>) -> Result<(), FailurePath>;
}

impl ValidatorList for () {
    type Outputs = ();

    fn len(&self) -> usize {
        0
    }

    fn check_nth(&self, n: usize, _value: Option<&Value>) -> Result<(), FailurePath> {
        unreachable!("validator index {} out of range for empty list", n)
    }
}

macro_rules! impl_validator_list {
    ($len:expr; $($idx:tt => $v:ident),+) => {
        impl<$($v: Validator),+> ValidatorList for ($($v,)+) {
            type Outputs = ($($v::Output,)+);

            fn len(&self) -> usize {
                $len
            }

            fn check_nth(&self, n: usize, value: Option<&Value>) -> Result<(), FailurePath> {
                match n {
                    $($idx => self.$idx.check(value),)+
                    _ => unreachable!("validator index {} out of range for list of {}", n, $len),
                }
            }
        }
    };
}

impl_validator_list!(1; 0 => A);
impl_validator_list!(2; 0 => A, 1 => B);
impl_validator_list!(3; 0 => A, 1 => B, 2 => C);
impl_validator_list!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_validator_list!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_validator_list!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_validator_list!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_validator_list!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
impl_validator_list!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
impl_validator_list!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
impl_validator_list!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K);
impl_validator_list!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K, 11 => L);

impl<V: Validator> ValidatorList for Vec<V> {
    type Outputs = Vec<V::Output>;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn check_nth(&self, n: usize, value: Option<&Value>) -> Result<(), FailurePath> {
        self[n].check(value)
    }
}
