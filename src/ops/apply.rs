//! Applicative application of a curried function carried in a Result.

use crate::traits::Curry;
use crate::types::RailError;

/// Feeds the value carried by `value` to the function carried by `function`.
///
/// Errors are checked function first, then value; either is returned
/// untouched. On success the output is the next [`Partial`](crate::Partial)
/// or, when every parameter is bound, the raw return value of the call. That
/// return value is never flattened, even if it is itself a Result.
///
/// # Errors
///
/// - the error carried by `function`, or else
/// - the error carried by `value`, or else
/// - [`RailError::ZeroArity`] (converted into `E`) for a zero-arity function.
///
/// # Examples
///
/// ```
/// use result_rail::{appl, RailError};
///
/// let volume = |w: u32, h: u32, d: u32| w * h * d;
/// let r: Result<_, RailError> = appl(appl(appl(Ok(volume), Ok(2)), Ok(3)), Ok(4));
/// assert_eq!(r, Ok(24));
///
/// let failed: Result<u32, RailError> = appl(Ok(|x: u32| x), Err(RailError::UnknownShape));
/// assert_eq!(failed, Err(RailError::UnknownShape));
/// ```
#[inline]
pub fn appl<F, A, M, E>(
    function: Result<F, E>,
    value: Result<A, E>,
) -> Result<<F as Curry<A, M>>::Output, E>
where
    F: Curry<A, M>,
    E: From<RailError>,
{
    let function = function?;
    let value = value?;
    function.apply(value).map_err(|error| {
        rail_trace!(debug, error = error; "curried application rejected");
        E::from(error)
    })
}
