//! Value types owned by the library.
//!
//! Results themselves are plain [`core::result::Result`] values; this module
//! only holds what the combinators need on top of that:
//!
//! - [`RailError`] - structural failures raised by the library
//! - [`Partial`] - an in-flight curried application
//! - [`Shape`] - the aggregate returned by dynamic flattening
//!
//! # Examples
//!
//! ```
//! use result_rail::types::RailError;
//!
//! let reason: &'static str = RailError::UnknownShape.into();
//! assert!(reason.starts_with("unknown type"));
//! ```
pub mod alloc_type;
pub mod partial;
pub mod rail_error;
pub mod shape;

pub use partial::Partial;
pub use rail_error::RailError;
pub use shape::Shape;

/// Result alias whose error side is the library's own [`RailError`].
pub type RailResult<T> = Result<T, RailError>;
