//! The outer context with no effect at all.
//!
//! With [`IdentityKind`] as the brand, every transformer combinator reduces
//! to the corresponding plain operation on `Result`, which makes it the
//! reference point for the other contexts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TypeConstructor;

/// A value in the identity context.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::{Identity, IdentityKind};
///
/// let checked = either_t::map(IdentityKind, Identity(Ok::<i32, String>(20)), |n| n + 1);
/// assert_eq!(checked.into_inner(), Ok(21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Identity, IdentityKind, Pointed};
///
/// assert_eq!(IdentityKind::pure(3), Identity(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type WithType<A> = Identity<A>;
}
