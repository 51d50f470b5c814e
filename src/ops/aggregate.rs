//! Aggregation combinators: nested Results and collections of Results.
//!
//! # Examples
//!
//! ```
//! use result_rail::ops::aggregate::{flatten, flatten_seq};
//!
//! let nested: Result<Result<Result<i32, &str>, &str>, &str> = Ok(Ok(Ok(9)));
//! let flat: Result<i32, &str> = flatten(nested);
//! assert_eq!(flat, Ok(9));
//!
//! assert_eq!(flatten_seq(vec![Ok(1), Err("x"), Ok(3)]), Err("x"));
//! ```

use core::any::Any;

use crate::traits::{Flatten, FlattenEnum};
use crate::types::alloc_type::{BTreeMap, Box, Vec, VecDeque};
#[cfg(feature = "std")]
use crate::types::alloc_type::HashMap;
use crate::types::{RailError, Shape};

/// Collapses a Result nested to any depth into a single-level Result.
///
/// `Ok(Ok(x))` keeps unwrapping, `Ok(Err(e))` becomes `Err(e)`, and a plain
/// success value stops the recursion. The leaf type `T` comes from the calling
/// context.
///
/// # Examples
///
/// ```
/// use result_rail::ops::aggregate::flatten;
///
/// let inner_err: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
/// let flat: Result<i32, &str> = flatten(inner_err);
/// assert_eq!(flat, Err("inner"));
/// ```
#[inline]
pub fn flatten<R, T, E, D>(result: R) -> Result<T, E>
where
    R: Flatten<T, E, D>,
{
    result.flatten_deep()
}

/// Removes exactly one level of nesting.
///
/// # Examples
///
/// ```
/// use result_rail::ops::aggregate::join;
///
/// assert_eq!(join(Ok::<Result<i32, &str>, &str>(Ok(1))), Ok(1));
/// ```
#[inline]
pub fn join<T, E>(result: Result<Result<T, E>, E>) -> Result<T, E> {
    match result {
        Ok(inner) => inner,
        Err(error) => Err(error),
    }
}

/// Flattens a sequence of Results into a Result of a `Vec`, preserving order.
///
/// Stops pulling from `items` at the first `Err` and returns it.
///
/// # Examples
///
/// ```
/// use result_rail::ops::aggregate::flatten_seq;
///
/// assert_eq!(flatten_seq(vec![Ok::<_, &str>(1), Ok(2)]), Ok(vec![1, 2]));
/// ```
#[inline]
pub fn flatten_seq<I, T, E>(items: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    flatten_seq_into(items)
}

/// Like [`flatten_seq`], collecting into any extendable collection `C`.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use result_rail::ops::aggregate::flatten_seq_into;
///
/// let out: Result<VecDeque<i32>, &str> = flatten_seq_into([Ok(4), Ok(5)]);
/// assert_eq!(out.unwrap(), VecDeque::from([4, 5]));
/// ```
pub fn flatten_seq_into<I, T, E, C>(items: I) -> Result<C, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    C: Default + Extend<T>,
{
    let mut values = C::default();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Ok(value) => values.extend(Some(value)),
            Err(error) => {
                rail_trace!(trace, index = index; "flatten short-circuited on error");
                return Err(error);
            },
        }
    }
    Ok(values)
}

/// Flattens key/Result pairs into a Result of a map with the same keys.
///
/// The first `Err` in the source's iteration order short-circuits.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use result_rail::ops::aggregate::flatten_map;
///
/// let out: Result<BTreeMap<&str, i32>, &str> = flatten_map([("a", Ok(1)), ("b", Ok(2))]);
/// assert_eq!(out.unwrap()["b"], 2);
/// ```
#[inline]
pub fn flatten_map<I, K, V, E, M>(entries: I) -> Result<M, E>
where
    I: IntoIterator<Item = (K, Result<V, E>)>,
    M: Default + Extend<(K, V)>,
{
    flatten_seq_into(
        entries
            .into_iter()
            .map(|(key, result)| result.map(|value| (key, value))),
    )
}

/// Flattens any supported collection shape; see [`FlattenEnum`].
///
/// # Examples
///
/// ```
/// use result_rail::ops::aggregate::flatten_enum;
///
/// let empty: Vec<Result<u8, &str>> = Vec::new();
/// assert_eq!(flatten_enum(empty), Ok(Vec::new()));
/// ```
#[inline]
pub fn flatten_enum<C, E>(collection: C) -> Result<C::Output, E>
where
    C: FlattenEnum<E>,
{
    collection.flatten_enum()
}

/// Flattens a collection whose shape is only known at runtime.
///
/// Sequences (`Vec` or `VecDeque` of `Result<T, E>`) produce [`Shape::Seq`]
/// in their original order. Maps (`BTreeMap`, or `HashMap` with the `std`
/// feature, from `K` to `Result<T, E>`) produce [`Shape::Map`]. Any other
/// value yields [`RailError::UnknownShape`] converted into `E`.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use result_rail::ops::aggregate::flatten_any;
/// use result_rail::{RailError, Shape};
///
/// let seq: Box<dyn Any> = Box::new(vec![Ok::<i32, RailError>(1), Ok(2)]);
/// let out = flatten_any::<String, i32, RailError>(seq);
/// assert_eq!(out, Ok(Shape::Seq(vec![1, 2])));
///
/// let other: Box<dyn Any> = Box::new(42_u64);
/// let out = flatten_any::<String, i32, RailError>(other);
/// assert_eq!(out, Err(RailError::UnknownShape));
/// ```
pub fn flatten_any<K, T, E>(input: Box<dyn Any>) -> Result<Shape<K, T>, E>
where
    K: Ord + 'static,
    T: 'static,
    E: From<RailError> + 'static,
{
    let input = match input.downcast::<Vec<Result<T, E>>>() {
        Ok(seq) => return flatten_seq(*seq).map(Shape::Seq),
        Err(other) => other,
    };
    let input = match input.downcast::<VecDeque<Result<T, E>>>() {
        Ok(seq) => return flatten_seq(*seq).map(Shape::Seq),
        Err(other) => other,
    };
    let input = match input.downcast::<BTreeMap<K, Result<T, E>>>() {
        Ok(map) => return flatten_map(*map).map(Shape::Map),
        Err(other) => other,
    };
    #[cfg(feature = "std")]
    let input = match input.downcast::<HashMap<K, Result<T, E>>>() {
        Ok(map) => return flatten_map(*map).map(Shape::Map),
        Err(other) => other,
    };

    let error = RailError::UnknownShape;
    rail_trace!(
        debug, error = error, type_id = (*input).type_id();
        "flatten_any rejected input"
    );
    Err(E::from(error))
}
