//! Arity-driven partial application.
//!
//! [`Curry`] is implemented for every `FnOnce` of arity 0 through 8 and for
//! every intermediate [`Partial`] stage. Feeding an argument either produces
//! the next `Partial` or, once all parameters are bound, the return value of
//! the call itself.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::Curry;
//!
//! let concat = |a: &str, b: &str| format!("{a}{b}");
//! assert_eq!(Curry::<&str, _>::arity(&concat), 2);
//!
//! let partial = concat.apply("rail").unwrap();
//! assert_eq!(partial.apply("way").unwrap(), "railway");
//! ```

use core::convert::Infallible;

use crate::types::{Partial, RailError, RailResult};

/// A function value that can receive `A` as its next argument.
///
/// `Sig` is a marker that keeps the impls for different arities apart; for a
/// plain function it is the parameter tuple, for a [`Partial`] it is
/// [`Staged`]. Callers never name it: it is always inferred.
pub trait Curry<A, Sig> {
    /// What feeding one argument produces.
    type Output;

    /// Declared parameter count of the underlying function.
    fn arity(&self) -> usize;

    /// Binds `arg` as the next argument.
    ///
    /// # Errors
    ///
    /// Returns [`RailError::ZeroArity`] when the function takes no arguments.
    fn apply(self, arg: A) -> RailResult<Self::Output>;
}

/// Marker selecting the [`Curry`] impls of [`Partial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Staged;

impl<Func, Out, A> Curry<A, ()> for Func
where
    Func: FnOnce() -> Out,
{
    type Output = Infallible;

    #[inline]
    fn arity(&self) -> usize {
        0
    }

    #[inline]
    fn apply(self, _arg: A) -> RailResult<Infallible> {
        Err(RailError::ZeroArity)
    }
}

macro_rules! curry_arity {
    ($arity:literal => $a:ident : $A:ident $(, $b:ident : $B:ident)*) => {
        impl<Func, Out, $A $(, $B)*> Curry<$A, ($A, $($B,)*)> for Func
        where
            Func: FnOnce($A $(, $B)*) -> Out,
        {
            type Output = <Partial<Func, (), ($A, $($B,)*)> as Curry<$A, Staged>>::Output;

            #[inline]
            fn arity(&self) -> usize {
                $arity
            }

            #[inline]
            fn apply(self, $a: $A) -> RailResult<Self::Output> {
                Partial::<Func, (), ($A, $($B,)*)>::new(self, $arity).apply($a)
            }
        }

        curry_stages!([]; $a : $A; [$($b : $B),*]);
    };
}

// One impl per stage: `done` are bound, `next` is being bound, `rest` follow.
macro_rules! curry_stages {
    ([$($done:ident : $D:ident),*]; $next:ident : $N:ident; []) => {
        impl<Func, Out, $($D,)* $N> Curry<$N, Staged> for Partial<Func, ($($D,)*), ($($D,)* $N,)>
        where
            Func: FnOnce($($D,)* $N) -> Out,
        {
            type Output = Out;

            #[inline]
            fn arity(&self) -> usize {
                self.arity
            }

            #[inline]
            fn apply(self, $next: $N) -> RailResult<Out> {
                let Partial { func, supplied: ($($done,)*), .. } = self;
                Ok(func($($done,)* $next))
            }
        }
    };
    (
        [$($done:ident : $D:ident),*];
        $next:ident : $N:ident;
        [$after:ident : $AFTER:ident $(, $rest:ident : $R:ident)*]
    ) => {
        impl<Func, Out, $($D,)* $N, $AFTER $(, $R)*> Curry<$N, Staged>
            for Partial<Func, ($($D,)*), ($($D,)* $N, $AFTER, $($R,)*)>
        where
            Func: FnOnce($($D,)* $N, $AFTER $(, $R)*) -> Out,
        {
            type Output = Partial<Func, ($($D,)* $N,), ($($D,)* $N, $AFTER, $($R,)*)>;

            #[inline]
            fn arity(&self) -> usize {
                self.arity
            }

            #[inline]
            fn apply(self, $next: $N) -> RailResult<Self::Output> {
                let Partial { func, supplied: ($($done,)*), arity, applied, .. } = self;
                Ok(Partial::resume(func, ($($done,)* $next,), arity, applied + 1))
            }
        }

        curry_stages!([$($done : $D,)* $next : $N]; $after : $AFTER; [$($rest : $R),*]);
    };
}

curry_arity!(1 => a1: A1);
curry_arity!(2 => a1: A1, a2: A2);
curry_arity!(3 => a1: A1, a2: A2, a3: A3);
curry_arity!(4 => a1: A1, a2: A2, a3: A3, a4: A4);
curry_arity!(5 => a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
curry_arity!(6 => a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
curry_arity!(7 => a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
curry_arity!(8 => a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
