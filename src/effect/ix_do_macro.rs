//! `ix_do!` macro: do-notation for [`IxState`](crate::effect::IxState).
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the result of an indexed step
//! - `let pattern = expression;` is a plain binding
//! - `expression` is the final step, which determines the output state
//!
//! `<-` is not accepted in `macro_rules!` patterns, so binds use `<=`.
//!
//! Each bind expands to [`IxState::ichain`](crate::effect::IxState::ichain)
//! with a `move` closure. Continuations may be run more than once, so a
//! bound value that is not `Copy` must be cloned where a later step consumes it.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::IxState;
//! use kindred::ix_do;
//!
//! let computation: IxState<i32, String, i32> = ix_do! {
//!     start <= IxState::<i32, i32, i32>::get();
//!     _ <= IxState::put(start * 10);
//!     scaled <= IxState::<i32, i32, i32>::get();
//!     let total = start + scaled;
//!     IxState::iof(total).ichain_first(|_| IxState::imodify(|n: i32| format!("scaled to {n}")))
//! };
//!
//! assert_eq!(computation.run(4), (44, "scaled to 40".to_string()));
//! ```

/// Do-notation for indexed state computations.
///
/// ```text
/// ix_do! {
///     pattern <= indexed_step;     // ichain
///     let pattern = expression;    // pure let binding
///     indexed_step                 // final step
/// }
/// ```
///
/// The state may change type between steps:
///
/// ```rust
/// use kindred::effect::IxState;
/// use kindred::ix_do;
///
/// let computation: IxState<i32, Vec<char>, usize> = ix_do! {
///     () <= IxState::imodify(|n: i32| n.to_string());
///     text <= IxState::gets(|text: &String| text.clone());
///     let length = text.len();
///     IxState::imodify(|text: String| text.chars().collect()).imap(move |()| length)
/// };
///
/// assert_eq!(computation.run(123), (3, vec!['1', '2', '3']));
/// ```
#[macro_export]
macro_rules! ix_do {
    // Final step
    ($result:expr) => {
        $result
    };

    ($pattern:ident <= $step:expr ; $($rest:tt)+) => {
        $step.ichain(move |$pattern| {
            $crate::ix_do!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $step:expr ; $($rest:tt)+) => {
        $step.ichain(move |($($pattern)*)| {
            $crate::ix_do!($($rest)+)
        })
    };

    (_ <= $step:expr ; $($rest:tt)+) => {
        $step.ichain(move |_| {
            $crate::ix_do!($($rest)+)
        })
    };

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::ix_do!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $value;
            $crate::ix_do!($($rest)+)
        }
    };
}
