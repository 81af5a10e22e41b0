//! Computation types and the outcome transformer.
//!
//! # Outcome Transformer
//!
//! [`either_t`] holds combinators for values of the shape
//! `F<Result<A, E>>`, generic over any outer context `F` that offers the
//! required capabilities (see [`crate::typeclass`]).
//!
//! # Stateful Computations
//!
//! - [`IxState`]: a state transition `I -> (A, O)` whose state type may change
//!   from step to step, checked at compile time
//! - [`State`]: the special case in which the state type never changes
//!
//! # Deferred Effects
//!
//! [`IO`] describes a computation without running it. Its brand [`IOKind`]
//! makes it usable as the outer context of [`either_t`].
//!
//! # Do-Notation with `ix_do!`
//!
//! ```rust
//! use kindred::effect::IxState;
//! use kindred::ix_do;
//!
//! let computation: IxState<i32, String, i32> = ix_do! {
//!     n <= IxState::<i32, i32, i32>::get();
//!     () <= IxState::imodify(|n: i32| n.to_string());
//!     IxState::iof(n + 1)
//! };
//! assert_eq!(computation.run(41), (42, "41".to_string()));
//! ```

pub mod either_t;
mod io;
mod ix_do_macro;
mod ix_state;
mod state;

pub use io::{IO, IOKind};
pub use ix_state::IxState;
pub use state::State;
