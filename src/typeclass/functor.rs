//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents type
//! constructors that can have a function applied to their inner value while
//! preserving the surrounding structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, OptionKind};
//!
//! let transformed: Option<String> = OptionKind::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let untouched: Option<String> = OptionKind::fmap(None, |n: i32| n.to_string());
//! assert_eq!(untouched, None);
//! ```

use super::higher::{BoxKind, OptionKind, ResultKind, TypeConstructor};
use super::identity::{Identity, IdentityKind};

/// The functor capability of a type constructor brand.
///
/// The `'static` bounds allow deferred contexts such as
/// [`IO`](crate::effect::IO) to store the mapping function until they run.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// F::fmap(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Functor, OptionKind};
///
/// let doubled = OptionKind::fmap(Some(5), |n: i32| n * 2);
/// assert_eq!(doubled, Some(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the context.
    ///
    /// # Arguments
    ///
    /// * `fa` - The wrapped value
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{BoxKind, Functor};
    ///
    /// let boxed = BoxKind::fmap(Box::new(20), |n: i32| n + 1);
    /// assert_eq!(*boxed, 21);
    /// ```
    fn fmap<A, B, F>(fa: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static;

    /// Replaces the value inside the context with a constant value.
    ///
    /// This is equivalent to `fmap(fa, |_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Functor, OptionKind};
    ///
    /// assert_eq!(OptionKind::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionKind::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::WithType<A>, value: B) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
    {
        Self::fmap(fa, move |_| value)
    }

    /// Discards the value inside the context, keeping only its structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Functor, OptionKind};
    ///
    /// assert_eq!(OptionKind::void(Some(5)), Some(()));
    /// ```
    #[inline]
    fn void<A>(fa: Self::WithType<A>) -> Self::WithType<()>
    where
        A: 'static,
    {
        Self::replace(fa, ())
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

impl Functor for OptionKind {
    #[inline]
    fn fmap<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        fa.map(function)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<X> Functor for ResultKind<X> {
    #[inline]
    fn fmap<A, B, F>(fa: Result<A, X>, function: F) -> Result<B, X>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        fa.map(function)
    }
}

// =============================================================================
// Box Implementation
// =============================================================================

impl Functor for BoxKind {
    #[inline]
    fn fmap<A, B, F>(fa: Box<A>, function: F) -> Box<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Box::new(function(*fa))
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Functor for IdentityKind {
    #[inline]
    fn fmap<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}
