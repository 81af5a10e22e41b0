//! Outcome transformer - failure handling inside any outer context.
//!
//! An [`EitherT<F, E, A>`] is an outer computation `F` whose eventual payload
//! is a `Result<A, E>`: `Ok` is the success branch, `Err` the failure branch.
//! The combinators in this module work on such values for any `F` that offers
//! the capabilities they ask for. The outer context is passed explicitly as a
//! brand value (`OptionKind`, `IdentityKind`, `IOKind`, ...), so nothing is
//! resolved implicitly.
//!
//! | Combinator | Needs |
//! |------------|-------|
//! | [`right`], [`left`] | [`Pointed`](crate::typeclass::Pointed) |
//! | [`right_f`], [`left_f`], [`map`], [`bimap`], [`map_left`], [`swap`], [`to_union`] | [`Functor`](crate::typeclass::Functor) |
//! | [`ap`], [`ap_validation`] | [`Apply`](crate::typeclass::Apply) |
//! | [`fold`] | [`Chain`](crate::typeclass::Chain) |
//! | [`chain`], [`alt`], [`alt_validation`], [`get_or_else`], [`or_else`], [`bracket`] | [`Monad`](crate::typeclass::Monad) |
//!
//! Failures are absorbing: once an outcome is `Err`, [`chain`] and [`map`]
//! leave it alone. Fallbacks passed to [`alt`], [`alt_validation`] and
//! [`or_else`] are closures, invoked at most once and only after the first
//! outcome turned out to be a failure.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::either_t;
//! use kindred::typeclass::OptionKind;
//!
//! fn parse(text: &'static str) -> Option<Result<i32, String>> {
//!     Some(text.parse().map_err(|_| format!("not a number: {text}")))
//! }
//!
//! let sum = either_t::chain(OptionKind, parse("40"), |a| {
//!     either_t::map(OptionKind, parse("2"), move |b| a + b)
//! });
//! assert_eq!(sum, Some(Ok(42)));
//!
//! let recovered = either_t::alt(OptionKind, parse("forty"), || parse("0"));
//! assert_eq!(recovered, Some(Ok(0)));
//! ```
//!
//! With a deferred context the fallback is not even built unless needed:
//!
//! ```rust
//! use kindred::effect::{IO, IOKind, either_t};
//!
//! let healthy: IO<Result<i32, String>> = IO::pure(Ok(1));
//! let checked = either_t::alt(IOKind, healthy, || -> IO<Result<i32, String>> {
//!     unreachable!("only built after a failure")
//! });
//! assert_eq!(checked.run_unsafe(), Ok(1));
//! ```

mod bracket;
mod combinators;
#[cfg(feature = "legacy")]
mod legacy;

use crate::typeclass::TypeConstructor;

pub use bracket::bracket;
pub use combinators::{
    alt, alt_validation, ap, ap_validation, bimap, chain, fold, get_or_else, left, left_f, map, map2_validation,
    map_left, or_else, right, right_f, swap, to_union,
};
#[cfg(feature = "legacy")]
pub use legacy::{EitherM, get_either_m};

/// An outer context `F` carrying a `Result<A, E>`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t::EitherT;
/// use kindred::typeclass::OptionKind;
///
/// let value: EitherT<OptionKind, String, i32> = Some(Ok(1));
/// assert_eq!(value, Some(Ok(1)));
/// ```
pub type EitherT<F, E, A> = <F as TypeConstructor>::WithType<Result<A, E>>;
