//! Free-function combinators over [`Result`].
//!
//! - [`core`] - `ok`, `map`, `bind`
//! - [`curried`] - `map` and `bind` awaiting their Result
//! - [`apply`] - `appl`, curried application inside a Result
//! - [`escape`] - `unwrap_or_raise`, `expect_or_raise`, `or_else`,
//!   `or_else_with`, `to_option`
//! - [`aggregate`] - `flatten`, `join`, `flatten_seq`, `flatten_map`,
//!   `flatten_enum`, `flatten_any`
//!
//! # Examples
//!
//! ```
//! use result_rail::ops::{core::{bind, map, ok}, escape::or_else};
//!
//! fn parse(s: &str) -> Result<i32, &'static str> {
//!     s.parse().map_err(|_| "not a number")
//! }
//!
//! let total = map(bind(ok("21"), parse), |n| n * 2);
//! assert_eq!(or_else(total, 0), 42);
//! ```
pub mod aggregate;
pub mod apply;
pub mod core;
pub mod curried;
pub mod escape;

pub use self::aggregate::{
    flatten, flatten_any, flatten_enum, flatten_map, flatten_seq, flatten_seq_into, join,
};
pub use self::apply::appl;
pub use self::core::{bind, map, ok};
pub use self::escape::{expect_or_raise, or_else, or_else_with, to_option, unwrap_or_raise};
#[cfg(feature = "std")]
pub use self::escape::{expect_or_raise_payload, unwrap_or_raise_payload};
