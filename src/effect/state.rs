//! State monad - computations threading a single state type.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`. It is the special
//! case of [`IxState`](super::IxState) in which the input and output state
//! types coincide, and converts losslessly to and from `IxState<S, S, A>`.
//!
//! Sequencing follows the usual monad laws (`pure` is a unit for
//! `flat_map`, and `flat_map` is associative). `put` followed by `get`
//! observes the value put.
//!
//! # Examples
//!
//! An identifier allocator:
//!
//! ```rust
//! use kindred::effect::State;
//!
//! fn fresh() -> State<u32, String> {
//!     State::get().flat_map(|next: u32| State::put(next + 1).then(State::pure(format!("id-{next}"))))
//! }
//!
//! let pair = fresh().map2(fresh(), |first, second| (first, second));
//! assert_eq!(pair.run(7), (("id-7".to_string(), "id-8".to_string()), 9));
//! ```

use std::fmt;
use std::rc::Rc;

/// A state transition `S -> (A, S)`.
///
/// Cloning is cheap: clones share the transition function.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::State;
///
/// let tally: State<Vec<&str>, usize> = State::modify(|mut seen: Vec<&str>| {
///     seen.push("event");
///     seen
/// })
/// .then(State::gets(Vec::len));
///
/// assert_eq!(tally.run(vec!["boot"]), (2, vec!["boot", "event"]));
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(state.run(10), (11, 20));
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// A computation returning `value` and leaving the state untouched.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (result, next_state) = original(state);
            (function(result), next_state)
        })
    }

    /// Runs this computation, then the one built from its result.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (result, next_state) = original(state);
            function(result).run(next_state)
        })
    }

    /// Runs this computation, discards its result, then runs `next`.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs this computation, then `other`, combining both results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        State::new(move |state| {
            let (a, intermediate) = first(state);
            let (b, final_state) = second(intermediate);
            (function(a, b), final_state)
        })
    }

    /// Projects a value out of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(String::len);
    /// assert_eq!(length.run("four".to_string()), (4, "four".to_string()));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    pub(crate) fn into_transition(self) -> Rc<dyn Fn(S) -> (A, S)> {
        self.run_function
    }

    pub(crate) fn from_transition(run_function: Rc<dyn Fn(S) -> (A, S)>) -> Self {
        Self { run_function }
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the result.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
