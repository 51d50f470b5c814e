//! Terminal operations that leave the Result world.
//!
//! [`unwrap_or_raise`] and [`expect_or_raise`] panic with a formatted message
//! and accept the same error types in every feature configuration. With the
//! `std` feature, [`unwrap_or_raise_payload`] and [`expect_or_raise_payload`]
//! additionally panic with the value itself, so a `catch_unwind` boundary can
//! downcast it back.

use core::fmt::{Debug, Display};

/// Returns the success value, panicking with the error's `Debug` form otherwise.
///
/// # Panics
///
/// Panics when `result` is `Err`.
///
/// # Examples
///
/// ```
/// use result_rail::unwrap_or_raise;
///
/// assert_eq!(unwrap_or_raise(Ok::<_, &str>(5)), 5);
///
/// let caught = std::panic::catch_unwind(|| unwrap_or_raise(Err::<i32, _>("boom")));
/// assert_eq!(*caught.unwrap_err().downcast::<String>().unwrap(), "\"boom\"");
/// ```
#[track_caller]
#[inline]
pub fn unwrap_or_raise<T, E>(result: Result<T, E>) -> T
where
    E: Debug,
{
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error:?}"),
    }
}

/// Returns the success value, panicking with `message` otherwise.
///
/// The original error is dropped.
///
/// # Panics
///
/// Panics when `result` is `Err`.
///
/// # Examples
///
/// ```
/// use result_rail::expect_or_raise;
///
/// let caught = std::panic::catch_unwind(|| expect_or_raise(Err::<i32, _>(404), "config missing"));
/// assert_eq!(*caught.unwrap_err().downcast::<String>().unwrap(), "config missing");
/// ```
#[track_caller]
#[inline]
pub fn expect_or_raise<T, E, M>(result: Result<T, E>, message: M) -> T
where
    M: Display,
{
    match result {
        Ok(value) => value,
        Err(_) => panic!("{message}"),
    }
}

/// Returns the success value, panicking with the error itself as payload.
///
/// # Panics
///
/// Panics when `result` is `Err`. The payload is the error value.
///
/// # Examples
///
/// ```
/// use result_rail::ops::escape::unwrap_or_raise_payload;
///
/// let caught = std::panic::catch_unwind(|| unwrap_or_raise_payload(Err::<i32, _>(7_u16)));
/// assert_eq!(*caught.unwrap_err().downcast::<u16>().unwrap(), 7);
/// ```
#[cfg(feature = "std")]
#[track_caller]
#[inline]
pub fn unwrap_or_raise_payload<T, E>(result: Result<T, E>) -> T
where
    E: Send + 'static,
{
    match result {
        Ok(value) => value,
        Err(error) => std::panic::panic_any(error),
    }
}

/// Returns the success value, panicking with `message` itself as payload.
///
/// # Panics
///
/// Panics when `result` is `Err`. The payload is `message`.
#[cfg(feature = "std")]
#[track_caller]
#[inline]
pub fn expect_or_raise_payload<T, E, M>(result: Result<T, E>, message: M) -> T
where
    M: Send + 'static,
{
    match result {
        Ok(value) => value,
        Err(_) => std::panic::panic_any(message),
    }
}

/// Returns the success value, or `default` verbatim.
///
/// # Examples
///
/// ```
/// use result_rail::or_else;
///
/// assert_eq!(or_else(Ok::<_, &str>(5), 4), 5);
/// assert_eq!(or_else(Err("nope"), 4), 4);
/// ```
#[inline]
pub fn or_else<T, E>(result: Result<T, E>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Returns the success value, or recovers one from the error with `f`.
///
/// # Examples
///
/// ```
/// use result_rail::or_else_with;
///
/// let recovered = or_else_with(Err::<String, _>("Oops"), |e| format!("{e}!"));
/// assert_eq!(recovered, "Oops!");
/// ```
#[inline]
pub fn or_else_with<T, E, F>(result: Result<T, E>, f: F) -> T
where
    F: FnOnce(E) -> T,
{
    match result {
        Ok(value) => value,
        Err(error) => f(error),
    }
}

/// Converts to an `Option`, discarding the error.
///
/// # Examples
///
/// ```
/// use result_rail::to_option;
///
/// assert_eq!(to_option(Ok::<_, &str>(5)), Some(5));
/// assert_eq!(to_option(Err::<i32, _>("gone")), None);
/// ```
#[inline]
pub fn to_option<T, E>(result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
