//! Depth-indexed flattening of nested Results.
//!
//! A `Result<Result<Result<T, E>, E>, E>` flattens to `Result<T, E>` through
//! [`Flatten`]. The depth parameter `D` is a type-level counter ([`Here`],
//! [`There`]) that keeps the two impls apart; it is always inferred from the
//! requested leaf type, so callers only name `T` when the context does not.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::Flatten;
//!
//! let nested: Result<Result<Result<u8, &str>, &str>, &str> = Ok(Ok(Ok(3)));
//! let flat: Result<u8, &str> = nested.flatten_deep();
//! assert_eq!(flat, Ok(3));
//! ```

use core::marker::PhantomData;

/// Depth marker: the Result itself already has the requested leaf type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Here;

/// Depth marker: one more level of nesting below `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct There<D>(PhantomData<D>);

/// Collapses nested Results down to `Result<T, E>`.
pub trait Flatten<T, E, D> {
    /// Flattens every level of nesting between `self` and the leaf `T`.
    ///
    /// The first `Err` met on the way in is returned unchanged.
    fn flatten_deep(self) -> Result<T, E>;
}

impl<T, E> Flatten<T, E, Here> for Result<T, E> {
    #[inline]
    fn flatten_deep(self) -> Result<T, E> {
        self
    }
}

impl<R, T, E, D> Flatten<T, E, There<D>> for Result<R, E>
where
    R: Flatten<T, E, D>,
{
    #[inline]
    fn flatten_deep(self) -> Result<T, E> {
        match self {
            Ok(inner) => inner.flatten_deep(),
            Err(error) => Err(error),
        }
    }
}
