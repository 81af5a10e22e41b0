//! Pointed, Apply and Applicative type classes.
//!
//! - [`Pointed`] lifts a plain value into a context (`of` / `pure`).
//! - [`Apply`] combines two independent values in a context.
//! - [`Applicative`] is both, and is implemented automatically.
//!
//! The capabilities are kept separate because some combinators only need
//! one of them: lifting a success into a wrapped outcome needs `Pointed`,
//! combining wrapped outcomes needs only `Apply`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::apply(F::pure(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::apply(F::pure(f), F::pure(x)) == F::pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! F::apply(u, F::pure(y)) == F::apply(F::pure(|f| f(y)), u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Apply, OptionKind, Pointed};
//!
//! let x: Option<i32> = OptionKind::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = OptionKind::map2(Some(3), Some(4), |x: i32, y: i32| x + y);
//! assert_eq!(sum, Some(7));
//! ```

use super::functor::Functor;
use super::higher::{BoxKind, OptionKind, ResultKind, TypeConstructor};
use super::identity::{Identity, IdentityKind};

/// Lifts plain values into a context.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{BoxKind, Pointed};
///
/// let boxed: Box<&str> = BoxKind::pure("hello");
/// assert_eq!(*boxed, "hello");
/// ```
pub trait Pointed: TypeConstructor {
    /// Lifts a value into the context without any effect.
    fn pure<A>(value: A) -> Self::WithType<A>
    where
        A: 'static;
}

/// Combines independent values that live in the same context.
///
/// Implementors provide [`map2`](Apply::map2); everything else derives from it.
/// The first argument's effect is performed before the second's.
pub trait Apply: Functor {
    /// Combines two wrapped values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Apply, OptionKind};
    ///
    /// assert_eq!(OptionKind::map2(Some(1), Some(2), |a: i32, b: i32| a + b), Some(3));
    /// assert_eq!(OptionKind::map2(Some(1), None, |a: i32, b: i32| a + b), None);
    /// ```
    fn map2<A, B, C, F>(fa: Self::WithType<A>, fb: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static;

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Apply, OptionKind};
    ///
    /// let increment: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(OptionKind::apply(increment, Some(5)), Some(6));
    /// ```
    #[inline]
    fn apply<A, B, G>(fg: Self::WithType<G>, fa: Self::WithType<A>) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        G: FnOnce(A) -> B + 'static,
    {
        Self::map2(fg, fa, |function, value| function(value))
    }

    /// Pairs two wrapped values.
    #[inline]
    fn product<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        Self::map2(fa, fb, |a, b| (a, b))
    }

    /// Runs both, keeps the left value.
    #[inline]
    fn product_left<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<A>
    where
        A: 'static,
        B: 'static,
    {
        Self::map2(fa, fb, |a, _| a)
    }

    /// Runs both, keeps the right value.
    #[inline]
    fn product_right<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
    {
        Self::map2(fa, fb, |_, b| b)
    }
}

/// A context that is both [`Pointed`] and [`Apply`].
///
/// Implemented for every brand that has both capabilities.
pub trait Applicative: Pointed + Apply {}

impl<K> Applicative for K where K: Pointed + Apply {}

// =============================================================================
// Option Implementation
// =============================================================================

impl Pointed for OptionKind {
    #[inline]
    fn pure<A>(value: A) -> Option<A>
    where
        A: 'static,
    {
        Some(value)
    }
}

impl Apply for OptionKind {
    #[inline]
    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, function: F) -> Option<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<X> Pointed for ResultKind<X> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, X>
    where
        A: 'static,
    {
        Ok(value)
    }
}

impl<X> Apply for ResultKind<X> {
    /// The first error wins.
    #[inline]
    fn map2<A, B, C, F>(fa: Result<A, X>, fb: Result<B, X>, function: F) -> Result<C, X>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box Implementation
// =============================================================================

impl Pointed for BoxKind {
    #[inline]
    fn pure<A>(value: A) -> Box<A>
    where
        A: 'static,
    {
        Box::new(value)
    }
}

impl Apply for BoxKind {
    #[inline]
    fn map2<A, B, C, F>(fa: Box<A>, fb: Box<B>, function: F) -> Box<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Box::new(function(*fa, *fb))
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Pointed for IdentityKind {
    #[inline]
    fn pure<A>(value: A) -> Identity<A>
    where
        A: 'static,
    {
        Identity(value)
    }
}

impl Apply for IdentityKind {
    #[inline]
    fn map2<A, B, C, F>(fa: Identity<A>, fb: Identity<B>, function: F) -> Identity<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Identity(function(fa.0, fb.0))
    }
}
