//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! let add = |a: i32, b: i32| a + b;
//! let r: Result<i32, RailError> = appl!(Ok(add), ok(1), ok(2));
//! assert_eq!(to_option(r), Some(3));
//! ```

// Macros
pub use crate::appl;

// Combinators
pub use crate::ops::curried;
pub use crate::ops::{
    bind, expect_or_raise, flatten, flatten_enum, flatten_map, flatten_seq, join, map, ok, or_else,
    or_else_with, to_option, unwrap_or_raise,
};

// Types and traits
pub use crate::traits::{Curry, Flatten, FlattenEnum, RailExt};
pub use crate::types::{Partial, RailError, RailResult, Shape};
