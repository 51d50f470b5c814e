//! The constructor and the two elementary combinators.

/// Wraps `value` as a success.
///
/// # Examples
///
/// ```
/// use result_rail::ok;
///
/// let r: Result<i32, &str> = ok(5);
/// assert_eq!(r, Ok(5));
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Applies `f` to the success value; errors pass through and `f` is not called.
///
/// # Examples
///
/// ```
/// use result_rail::map;
///
/// assert_eq!(map(Ok::<_, &str>(2), |x| x * 10), Ok(20));
/// assert_eq!(map(Err::<i32, _>("no"), |x| x * 10), Err("no"));
/// ```
#[inline]
pub fn map<T, U, E, F>(result: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    match result {
        Ok(value) => Ok(f(value)),
        Err(error) => Err(error),
    }
}

/// Chains a fallible step; the first error short-circuits the rest.
///
/// The Result returned by `f` is passed back as-is, so nothing is wrapped
/// twice.
///
/// # Examples
///
/// ```
/// use result_rail::bind;
///
/// let half = |x: i32| if x % 2 == 0 { Ok(x / 2) } else { Err("odd") };
/// assert_eq!(bind(Ok(8), half), Ok(4));
/// assert_eq!(bind(Ok(7), half), Err("odd"));
/// ```
#[inline]
pub fn bind<T, U, E, F>(result: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match result {
        Ok(value) => f(value),
        Err(error) => Err(error),
    }
}
