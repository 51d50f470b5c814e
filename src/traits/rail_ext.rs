//! Method-style access to the combinators that `Result` lacks.
//!
//! `Result` already has `map`, `and_then`, `unwrap_or`, and friends. [`RailExt`]
//! adds the applicative step so curried chains read left to right, plus two
//! observers for logging or metrics along a pipeline.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::RailExt;
//! use result_rail::RailError;
//!
//! let greet = |greeting: &str, name: &str| format!("{greeting}, {name}");
//! let out: Result<String, RailError> = Ok(greet).appl(Ok("hello")).appl(Ok("rail"));
//! assert_eq!(out.unwrap(), "hello, rail");
//! ```

use crate::ops::apply::appl;
use crate::traits::Curry;
use crate::types::RailError;

/// Extension methods for `Result<T, E>`.
pub trait RailExt<T, E>: Sized {
    /// Applies the carried curried function to `value`; see
    /// [`appl`](crate::ops::apply::appl).
    ///
    /// # Errors
    ///
    /// Returns the first error of `self`, then `value`, then
    /// [`RailError::ZeroArity`] for a zero-arity function.
    fn appl<A, M>(self, value: Result<A, E>) -> Result<<T as Curry<A, M>>::Output, E>
    where
        T: Curry<A, M>,
        E: From<RailError>;

    /// Calls `f` with a reference to the success value and passes `self` on.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::RailExt;
    ///
    /// let mut seen = Vec::new();
    /// let r: Result<i32, &str> = Ok(3).tap(|v| seen.push(*v));
    /// assert_eq!((r, seen), (Ok(3), vec![3]));
    /// ```
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T);

    /// Calls `f` with a reference to the error and passes `self` on.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::RailExt;
    ///
    /// let mut seen = None;
    /// let r: Result<i32, &str> = Err("late").tap_err(|e| seen = Some(*e));
    /// assert_eq!((r, seen), (Err("late"), Some("late")));
    /// ```
    fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E);
}

impl<T, E> RailExt<T, E> for Result<T, E> {
    #[inline]
    fn appl<A, M>(self, value: Result<A, E>) -> Result<<T as Curry<A, M>>::Output, E>
    where
        T: Curry<A, M>,
        E: From<RailError>,
    {
        appl(self, value)
    }

    #[inline]
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self {
            f(error);
        }
        self
    }
}
