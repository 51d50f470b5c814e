//! Shape-preserving flattening of collections of Results.
//!
//! [`FlattenEnum`] turns a collection whose elements are Results into a single
//! Result of the same collection shape. Sequences keep their order; maps keep
//! their keys. The first `Err` met ends the walk.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use result_rail::traits::FlattenEnum;
//!
//! let seq: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2), Ok(3)];
//! assert_eq!(seq.flatten_enum(), Ok(vec![1, 2, 3]));
//!
//! let mut map = BTreeMap::new();
//! map.insert("a", Ok(1));
//! map.insert("b", Err("bad b"));
//! assert_eq!(map.flatten_enum(), Err("bad b"));
//! ```

use smallvec::{Array, SmallVec};

use crate::ops::aggregate::{flatten_map, flatten_seq_into};
use crate::types::alloc_type::{BTreeMap, Vec, VecDeque};

#[cfg(feature = "std")]
use crate::types::alloc_type::HashMap;
#[cfg(feature = "std")]
use core::hash::{BuildHasher, Hash};

/// A homogeneous collection of `Result<_, E>` that can be flattened.
///
/// | Input | Output |
/// |---|---|
/// | `Vec<Result<T, E>>` | `Vec<T>` |
/// | `[Result<T, E>; N]` | `Vec<T>` |
/// | `VecDeque<Result<T, E>>` | `VecDeque<T>` |
/// | `SmallVec<[Result<T, E>; N]>` | `SmallVec<[T; N]>` |
/// | `BTreeMap<K, Result<V, E>>` | `BTreeMap<K, V>` |
/// | `HashMap<K, Result<V, E>, S>` (`std`) | `HashMap<K, V, S>` |
///
/// Fixed-size arrays are the one exception to shape preservation: they come
/// back as a `Vec` with the same length and order.
pub trait FlattenEnum<E> {
    /// The same collection shape holding the unwrapped success values; a
    /// `Vec` for array inputs.
    type Output;

    /// Unwraps every element, or returns the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` in iteration order.
    fn flatten_enum(self) -> Result<Self::Output, E>;
}

impl<T, E> FlattenEnum<E> for Vec<Result<T, E>> {
    type Output = Vec<T>;

    #[inline]
    fn flatten_enum(self) -> Result<Vec<T>, E> {
        flatten_seq_into(self)
    }
}

/// Arrays flatten into a `Vec<T>` of length `N`.
impl<T, E, const N: usize> FlattenEnum<E> for [Result<T, E>; N] {
    type Output = Vec<T>;

    #[inline]
    fn flatten_enum(self) -> Result<Vec<T>, E> {
        flatten_seq_into(self)
    }
}

impl<T, E> FlattenEnum<E> for VecDeque<Result<T, E>> {
    type Output = VecDeque<T>;

    #[inline]
    fn flatten_enum(self) -> Result<VecDeque<T>, E> {
        flatten_seq_into(self)
    }
}

impl<T, E, const N: usize> FlattenEnum<E> for SmallVec<[Result<T, E>; N]>
where
    [Result<T, E>; N]: Array<Item = Result<T, E>>,
    [T; N]: Array<Item = T>,
{
    type Output = SmallVec<[T; N]>;

    #[inline]
    fn flatten_enum(self) -> Result<SmallVec<[T; N]>, E> {
        flatten_seq_into(self)
    }
}

impl<K: Ord, V, E> FlattenEnum<E> for BTreeMap<K, Result<V, E>> {
    type Output = BTreeMap<K, V>;

    #[inline]
    fn flatten_enum(self) -> Result<BTreeMap<K, V>, E> {
        flatten_map(self)
    }
}

#[cfg(feature = "std")]
impl<K, V, E, S> FlattenEnum<E> for HashMap<K, Result<V, E>, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashMap<K, V, S>;

    #[inline]
    fn flatten_enum(self) -> Result<HashMap<K, V, S>, E> {
        flatten_map(self)
    }
}
