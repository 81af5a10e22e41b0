//! # kindred
//!
//! Failure handling and indexed state for Rust, written once against an
//! abstract outer context.
//!
//! ## Overview
//!
//! - **Capabilities**: brand-encoded higher-kinded types with `Functor`,
//!   `Pointed`, `Apply`, `Chain`, `Monad` and `Semigroup`
//! - **Outcome transformer**: combinators over `F<Result<A, E>>` for any
//!   suitable `F`, including fallbacks, failure accumulation and a bracket
//!   for scoped resources
//! - **Indexed state**: `IxState<I, O, A>`, a state computation whose state
//!   type may change between steps, with do-notation via `ix_do!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Capability traits and brands
//! - `effect`: `either_t`, `IxState`, `State`, `IO`
//! - `legacy`: The bundled `get_either_m` combinator record
//! - `serde`: `Serialize`/`Deserialize` for `Identity`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let checked = either_t::chain(OptionKind, Some(Ok::<i32, String>(21)), |n| {
//!     either_t::right(OptionKind, n * 2)
//! });
//! assert_eq!(checked, Some(Ok(42)));
//!
//! let digits = IxState::imodify(|n: u32| n.to_string())
//!     .ichain(|()| IxState::gets(|text: &String| text.len()));
//! assert_eq!(digits.run(2024), (4, "2024".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
