//! Macros for applicative chains and internal diagnostics.
//!
//! - [`macro@crate::appl`] - saturates a curried function carried in a Result
//!   with any number of value Results, left to right.
//!
//! # Examples
//!
//! ```
//! use result_rail::{appl, RailError};
//!
//! let clamp = |lo: i32, hi: i32, x: i32| x.max(lo).min(hi);
//! let r: Result<i32, RailError> = appl!(Ok(clamp), Ok(0), Ok(10), Ok(42));
//! assert_eq!(r, Ok(10));
//! ```

/// Applies a Result-carried function to each value Result in turn.
///
/// `appl!(f, a, b, c)` is `appl(appl(appl(f, a), b), c)`. With no values the
/// function Result is returned unchanged.
///
/// # Examples
///
/// ```
/// use result_rail::appl;
///
/// let pair = |a: u8, b: char| (a, b);
/// let missing: Result<(u8, char), &str> = appl!(Ok(pair), Err("no number"), Ok('x'));
/// assert_eq!(missing, Err("no number"));
/// ```
#[macro_export]
macro_rules! appl {
    ($func:expr $(,)?) => {
        $func
    };
    ($func:expr, $value:expr $(, $rest:expr)* $(,)?) => {
        $crate::appl!($crate::ops::apply::appl($func, $value) $(, $rest)*)
    };
}

// Structured diagnostics through `tracing` when the feature is on; otherwise the
// field expressions are only borrowed so no binding goes unused.
#[cfg(feature = "tracing")]
macro_rules! rail_trace {
    ($level:ident, $($key:ident = $value:expr),+ ; $msg:literal) => {
        ::tracing::$level!($($key = ?$value,)+ $msg)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rail_trace {
    ($level:ident, $($key:ident = $value:expr),+ ; $msg:literal) => {{
        $(let _ = &$value;)+
    }};
}
