//! Railway-oriented combinators for `Result`.
//!
//! Every function here is a pure transformation over its Result arguments.
//! Successes travel along the `Ok` rail, the first failure switches the chain
//! onto the `Err` rail, and nothing downstream of that failure runs.
//!
//! # Examples
//!
//! ## Mapping and binding
//!
//! ```
//! use result_rail::{bind, map, ok, or_else};
//!
//! let checked = |x: i32| if x < 100 { Ok(x) } else { Err("too large") };
//! let r = map(bind(ok(41), checked), |x| x + 1);
//! assert_eq!(or_else(r, 0), 42);
//! ```
//!
//! ## Curried application
//!
//! ```
//! use result_rail::{appl, RailError};
//!
//! let f3 = |a: i32, b: i32, c: i32| a * 100 + b * 10 + c;
//! let r: Result<i32, RailError> = appl(appl(appl(Ok(f3), Ok(1)), Ok(2)), Ok(3));
//! assert_eq!(r, Ok(123));
//!
//! let nullary = || 0;
//! let r: Result<_, RailError> = appl(Ok(nullary), Ok(1));
//! assert_eq!(r, Err(RailError::ZeroArity));
//! ```
//!
//! ## Flattening collections
//!
//! ```
//! use result_rail::flatten_enum;
//!
//! assert_eq!(flatten_enum(vec![Ok(1), Ok(2), Ok(3)]), Ok::<_, &str>(vec![1, 2, 3]));
//! assert_eq!(flatten_enum(vec![Ok(1), Err("x"), Ok(3)]), Err("x"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Applicative macros and internal diagnostics
#[macro_use]
pub mod macros;
/// Free-function combinators
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Curry, Flatten, FlattenEnum and the Result extension trait
pub mod traits;
/// RailError, Partial and Shape
pub mod types;

pub use ops::curried;
pub use ops::{
    appl, bind, expect_or_raise, flatten, flatten_any, flatten_enum, flatten_map, flatten_seq,
    flatten_seq_into, join, map, ok, or_else, or_else_with, to_option, unwrap_or_raise,
};
#[cfg(feature = "std")]
pub use ops::{expect_or_raise_payload, unwrap_or_raise_payload};
pub use traits::{Curry, Flatten, FlattenEnum, RailExt};
pub use types::{Partial, RailError, RailResult, Shape};
