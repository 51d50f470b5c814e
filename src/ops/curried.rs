//! Curried forms of [`map`](crate::ops::core::map) and
//! [`bind`](crate::ops::core::bind).
//!
//! Each returns a reusable one-argument transformer, handy for pipelines and
//! iterator adapters.
//!
//! # Examples
//!
//! ```
//! use result_rail::ops::curried;
//!
//! let double = curried::map(|x: i32| x * 2);
//! let inputs: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad"), Ok(3)];
//! let outputs: Vec<_> = inputs.into_iter().map(double).collect();
//! assert_eq!(outputs, vec![Ok(2), Err("bad"), Ok(6)]);
//! ```

/// Partially applies [`map`](crate::ops::core::map), awaiting the Result.
#[inline]
pub fn map<T, U, E, F>(f: F) -> impl Fn(Result<T, E>) -> Result<U, E>
where
    F: Fn(T) -> U,
{
    move |result| super::core::map(result, &f)
}

/// Partially applies [`bind`](crate::ops::core::bind), awaiting the Result.
///
/// # Examples
///
/// ```
/// use result_rail::ops::curried;
///
/// let positive = curried::bind(|x: i32| if x > 0 { Ok(x) } else { Err("not positive") });
/// assert_eq!(positive(Ok(3)), Ok(3));
/// assert_eq!(positive(Ok(-1)), Err("not positive"));
/// ```
#[inline]
pub fn bind<T, U, E, F>(f: F) -> impl Fn(Result<T, E>) -> Result<U, E>
where
    F: Fn(T) -> Result<U, E>,
{
    move |result| super::core::bind(result, &f)
}
