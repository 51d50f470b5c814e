use core::fmt;
use core::marker::PhantomData;

/// A curried application that is still waiting for arguments.
///
/// `Partial` is what [`appl`](crate::ops::apply::appl) carries forward between
/// steps of an applicative chain. It owns the target function, the tuple of
/// arguments supplied so far (in the order they were supplied), and the
/// function's arity as captured at the first application.
///
/// `Sig` is the full parameter tuple of the target function. It never holds a
/// value; it only selects which [`Curry`](crate::traits::Curry) impl applies to
/// the next argument.
///
/// # Examples
///
/// ```
/// use result_rail::{appl, RailError};
///
/// let add3 = |a: i32, b: i32, c: i32| a + b + c;
/// let step: Result<_, RailError> = appl(Ok(add3), Ok(1));
/// let partial = step.unwrap();
/// assert_eq!(partial.arity(), 3);
/// assert_eq!(partial.applied(), 1);
/// assert_eq!(partial.remaining(), 2);
/// ```
#[must_use]
pub struct Partial<F, Supplied, Sig> {
    pub(crate) func: F,
    pub(crate) supplied: Supplied,
    pub(crate) arity: usize,
    pub(crate) applied: usize,
    _sig: PhantomData<fn() -> Sig>,
}

impl<F, Sig> Partial<F, (), Sig> {
    #[inline]
    pub(crate) fn new(func: F, arity: usize) -> Self {
        Self { func, supplied: (), arity, applied: 0, _sig: PhantomData }
    }
}

impl<F, Supplied, Sig> Partial<F, Supplied, Sig> {
    #[inline]
    pub(crate) fn resume(func: F, supplied: Supplied, arity: usize, applied: usize) -> Self {
        Self { func, supplied, arity, applied, _sig: PhantomData }
    }

    /// Declared parameter count of the target function.
    #[must_use]
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of arguments bound so far.
    #[must_use]
    #[inline]
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Number of arguments still needed before the function runs.
    #[must_use]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.arity - self.applied
    }

    /// Borrows the arguments bound so far, oldest first.
    #[must_use]
    #[inline]
    pub fn supplied(&self) -> &Supplied {
        &self.supplied
    }
}

impl<F, Supplied: fmt::Debug, Sig> fmt::Debug for Partial<F, Supplied, Sig> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial")
            .field("arity", &self.arity)
            .field("applied", &self.applied)
            .field("supplied", &self.supplied)
            .finish_non_exhaustive()
    }
}
