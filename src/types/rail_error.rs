use core::fmt::{self, Display};

use crate::types::alloc_type::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural failures raised by the library itself.
///
/// Caller errors are never wrapped in this type. `RailError` only shows up when
/// a combinator is handed something it cannot work with, and it reaches the
/// caller's error channel through `E: From<RailError>`.
///
/// # Examples
///
/// ```
/// use result_rail::{appl, RailError};
///
/// let zero = || 7;
/// let out: Result<_, RailError> = appl(Ok(zero), Ok(1));
/// assert_eq!(out.unwrap_err(), RailError::ZeroArity);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RailError {
    /// A function taking no arguments was asked to consume one.
    ZeroArity,
    /// A dynamically-typed input was neither a supported sequence nor a map.
    UnknownShape,
}

impl RailError {
    /// Static description of the failure.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ZeroArity => "arity error: a zero-arity function cannot be applied to a value",
            Self::UnknownShape => "unknown type: expected a sequence or a map of results",
        }
    }
}

impl Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl core::error::Error for RailError {}

impl From<RailError> for &'static str {
    #[inline]
    fn from(error: RailError) -> Self {
        error.reason()
    }
}

impl From<RailError> for String {
    #[inline]
    fn from(error: RailError) -> Self {
        String::from(error.reason())
    }
}
