//! Traits behind the combinators.
//!
//! - [`Curry`]: arity-aware, one-argument-at-a-time application
//! - [`Flatten`]: depth-indexed flattening of nested Results
//! - [`FlattenEnum`]: shape-preserving flattening of collections of Results
//! - [`RailExt`]: method-style extensions on `Result`
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{FlattenEnum, RailExt};
//! use result_rail::RailError;
//!
//! let add = |a: i32, b: i32| a + b;
//! let sums: Vec<Result<i32, RailError>> =
//!     (1..=3).map(|n| Ok(add).appl(Ok(n)).appl(Ok(n))).collect();
//! assert_eq!(sums.flatten_enum(), Ok(vec![2, 4, 6]));
//! ```

pub mod curry;
pub mod flatten;
pub mod flatten_enum;
pub mod rail_ext;

pub use curry::{Curry, Staged};
pub use flatten::{Flatten, Here, There};
pub use flatten_enum::FlattenEnum;
pub use rail_ext::RailExt;
