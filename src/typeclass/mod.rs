//! Capability traits for functional programming abstractions.
//!
//! This module provides the capabilities an outer computation type must
//! offer before the transformer combinators in [`crate::effect`] can be
//! instantiated with it:
//!
//! - [`Pointed`]: Lifting plain values (`pure`)
//! - [`Functor`]: Mapping over the wrapped value (`fmap`)
//! - [`Apply`]: Combining independent wrapped values (`map2`, `apply`)
//! - [`Applicative`]: `Pointed + Apply`
//! - [`Chain`]: Sequencing dependent computations (`flat_map`)
//! - [`Monad`]: `Applicative + Chain`
//! - [`Semigroup`]: Associative combination, used to merge failures
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. Each type constructor is
//! represented by a zero-sized *brand* implementing [`TypeConstructor`]; the
//! capability traits are implemented on the brand. A combinator that is
//! generic over "some monad `F`" receives the brand value as an argument and
//! works on `F::WithType<A>`.
//!
//! ## Provided Brands
//!
//! - [`OptionKind`] for `Option<A>`
//! - [`ResultKind`] for `Result<A, X>`
//! - [`BoxKind`] for `Box<A>`
//! - [`IdentityKind`] for [`Identity<A>`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Chain, Functor, OptionKind, Pointed};
//!
//! fn increment_all<F: Chain + Pointed>(fa: F::WithType<i32>) -> F::WithType<i32> {
//!     F::flat_map(fa, |n: i32| F::pure(n + 1))
//! }
//!
//! assert_eq!(increment_all::<OptionKind>(Some(1)), Some(2));
//! assert_eq!(OptionKind::fmap(Some(2), |n: i32| n * 10), Some(20));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod semigroup;

pub use applicative::{Applicative, Apply, Pointed};
pub use functor::Functor;
pub use higher::{BoxKind, OptionKind, ResultKind, TypeConstructor};
pub use identity::{Identity, IdentityKind};
pub use monad::{Chain, Monad};
pub use semigroup::Semigroup;
