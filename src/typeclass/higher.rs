//! Higher-Kinded Type emulation through brand types.
//!
//! Rust does not natively support Higher-Kinded Types. We cannot write a
//! trait that abstracts over `Option<_>` and `Box<_>` as type constructors.
//! This module works around the limitation with *brands*: a zero-sized marker
//! type stands for the unapplied constructor, and a Generic Associated Type
//! applies it to an argument.
//!
//! ```text
//! OptionKind            ~  Option<_>
//! OptionKind::WithType<A>  =  Option<A>
//! ```
//!
//! Capability traits ([`Functor`](super::Functor), [`Monad`](super::Monad),
//! ...) are implemented on the brand, and every operation takes the wrapped
//! values explicitly. Generic code then names the brand once and can talk
//! about `F::WithType<A>` and `F::WithType<B>` as "the same constructor"
//! without any extra bounds.
//!
//! Brands are `Copy` values, so combinators can receive them as an ordinary
//! first argument. That value is the capability dictionary: nothing is
//! resolved implicitly.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::{OptionKind, TypeConstructor};
//!
//! fn empty<F: TypeConstructor>(_kind: F) -> F::WithType<String>
//! where
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty(OptionKind);
//! assert_eq!(none, None);
//! ```

use std::marker::PhantomData;

/// A brand standing for an unapplied type constructor.
///
/// # Associated Types
///
/// - `WithType<A>`: The constructor applied to `A`.
///
/// # Laws
///
/// Brands carry no data. Two values of the same brand are interchangeable,
/// which is why every brand in this crate is a zero-sized `Copy` type.
///
/// # Example
///
/// ```rust
/// use kindred::typeclass::{BoxKind, TypeConstructor};
///
/// let boxed: <BoxKind as TypeConstructor>::WithType<i32> = Box::new(42);
/// assert_eq!(*boxed, 42);
/// ```
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    ///
    /// For [`OptionKind`], `WithType<i32>` is `Option<i32>`.
    type WithType<A>;
}

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OptionKind;

impl TypeConstructor for OptionKind {
    type WithType<A> = Option<A>;
}

/// Brand for [`Result`] with a fixed error type `X`.
///
/// The error type belongs to the outer context, not to the outcome being
/// transformed: `ResultKind<X>::WithType<Result<A, E>>` is
/// `Result<Result<A, E>, X>`.
///
/// # Example
///
/// ```rust
/// use kindred::typeclass::{Pointed, ResultKind};
///
/// let lifted: Result<i32, String> = ResultKind::<String>::pure(7);
/// assert_eq!(lifted, Ok(7));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultKind<X>(PhantomData<fn() -> X>);

impl<X> ResultKind<X> {
    /// Creates the brand value.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<X> Clone for ResultKind<X> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<X> Copy for ResultKind<X> {}

impl<X> Default for ResultKind<X> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<X> TypeConstructor for ResultKind<X> {
    type WithType<A> = Result<A, X>;
}

/// Brand for [`Box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoxKind;

impl TypeConstructor for BoxKind {
    type WithType<A> = Box<A>;
}

static_assertions::assert_impl_all!(OptionKind: Copy, Send, Sync);
static_assertions::assert_impl_all!(BoxKind: Copy, Send, Sync);
static_assertions::assert_impl_all!(ResultKind<std::rc::Rc<String>>: Copy, Send, Sync);
static_assertions::assert_eq_size!(ResultKind<String>, ());

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_applies_to<F, A, Expected>()
    where
        F: TypeConstructor<WithType<A> = Expected>,
    {
    }

    #[rstest]
    fn option_kind_applies_to_option() {
        assert_applies_to::<OptionKind, i32, Option<i32>>();
        assert_applies_to::<OptionKind, String, Option<String>>();
    }

    #[rstest]
    fn result_kind_keeps_its_error_type() {
        assert_applies_to::<ResultKind<String>, bool, Result<bool, String>>();
        assert_applies_to::<ResultKind<()>, Result<i32, u8>, Result<Result<i32, u8>, ()>>();
    }

    #[rstest]
    fn box_kind_applies_to_box() {
        assert_applies_to::<BoxKind, f64, Box<f64>>();
    }

    #[rstest]
    fn nested_application_composes() {
        type Inner = <OptionKind as TypeConstructor>::WithType<i32>;
        type Outer = <BoxKind as TypeConstructor>::WithType<Inner>;
        assert_applies_to::<BoxKind, Option<i32>, Outer>();
    }

    #[rstest]
    fn result_kind_values_are_interchangeable() {
        let first = ResultKind::<String>::new();
        let second = ResultKind::<String>::default();
        assert_eq!(first, second);
    }
}
