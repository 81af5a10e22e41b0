//! Chain and Monad type classes - sequencing computations within a context.
//!
//! [`Chain`] extends [`Apply`] with `flat_map`, which lets the result of one
//! step decide the next step. [`Monad`] is `Chain` plus
//! [`Pointed`](super::Pointed), and is implemented automatically.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! F::flat_map(F::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! F::flat_map(m, F::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Chain, OptionKind};
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let parsed = OptionKind::flat_map(Some("42"), parse_positive);
//! let doubled = OptionKind::flat_map(parsed, |n| Some(n * 2));
//! assert_eq!(doubled, Some(84));
//! ```

use super::applicative::{Applicative, Apply};
use super::higher::{BoxKind, OptionKind, ResultKind};
use super::identity::{Identity, IdentityKind};

/// Sequencing of dependent computations.
///
/// Only `flat_map` is required. Combinators that eliminate a context
/// without lifting anything back into it (for example folding a wrapped
/// outcome) need nothing more than this.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Chain, OptionKind};
///
/// let halved = OptionKind::flat_map(Some(10), |n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Chain: Apply {
    /// Applies a function producing a new wrapped value and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<A, B, F>(fa: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::WithType<B> + 'static;

    /// Sequences two computations, discarding the first result.
    ///
    /// A failure in `fa` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Chain, OptionKind};
    ///
    /// assert_eq!(OptionKind::then(Some(5), Some("hello")), Some("hello"));
    /// assert_eq!(OptionKind::then(None::<i32>, Some("hello")), None);
    /// ```
    #[inline]
    fn then<A, B>(fa: Self::WithType<A>, next: Self::WithType<B>) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Self::WithType<B>: 'static,
    {
        Self::flat_map(fa, move |_| next)
    }
}

/// A context that is both [`Applicative`] and [`Chain`].
pub trait Monad: Applicative + Chain {}

impl<K> Monad for K where K: Applicative + Chain {}

// =============================================================================
// Option Implementation
// =============================================================================

impl Chain for OptionKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<X> Chain for ResultKind<X> {
    #[inline]
    fn flat_map<A, B, F>(fa: Result<A, X>, function: F) -> Result<B, X>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, X> + 'static,
    {
        fa.and_then(function)
    }
}

// =============================================================================
// Box Implementation
// =============================================================================

impl Chain for BoxKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Box<A>, function: F) -> Box<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Box<B> + 'static,
    {
        function(*fa)
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Chain for IdentityKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Identity<B> + 'static,
    {
        function(fa.into_inner())
    }
}
