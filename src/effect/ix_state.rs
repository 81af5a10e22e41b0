//! Indexed state - stateful computations whose state type may change.
//!
//! An `IxState<I, O, A>` wraps a function `I -> (A, O)`: it consumes an
//! input state of type `I`, produces a result `A` and an output state of type
//! `O`. Sequencing an `IxState<I, O, A>` with an `IxState<O, Z, B>` yields an
//! `IxState<I, Z, B>`, so the compiler checks that each step starts from the
//! state shape the previous step left behind.
//!
//! When `I == O` the type behaves like [`State`] and offers the familiar
//! non-indexed combinators (`pure`, `fmap`, `apply`, `flat_map`, ...). The two
//! convert into each other with [`IxState::from_state`] and
//! [`IxState::into_state`].
//!
//! # Laws
//!
//! - Identity: `m.imap(|x| x) == m`
//! - Left Identity: `IxState::iof(a).ichain(f) == f(a)`
//! - Right Identity: `m.ichain(IxState::iof) == m`
//! - Associativity: `m.ichain(f).ichain(g) == m.ichain(|x| f(x).ichain(g))`
//! - Local: `m.local(f).run(x) == m.run(f(x))`
//!
//! # Examples
//!
//! A state that starts as a number, becomes its decimal text, and ends up as
//! the list of its digits:
//!
//! ```rust
//! use kindred::effect::IxState;
//!
//! let digits: IxState<i32, Vec<String>, ()> = IxState::imodify(|n: i32| n.to_string())
//!     .ichain(|()| IxState::imodify(|text: String| text.chars().map(String::from).collect()));
//!
//! assert_eq!(digits.run(42), ((), vec!["4".to_string(), "2".to_string()]));
//! ```
//!
//! Consecutive steps must agree on the state in between:
//!
//! ```compile_fail
//! use kindred::effect::IxState;
//!
//! let to_text: IxState<i32, String, ()> = IxState::imodify(|n: i32| n.to_string());
//! let halve: IxState<i32, i32, ()> = IxState::imodify(|n: i32| n / 2);
//!
//! // `to_text` leaves a `String` behind but `halve` starts from an `i32`.
//! let _ = to_text.ichain(move |()| halve.clone());
//! ```

use std::fmt;
use std::rc::Rc;

use super::State;

/// A computation from an input state `I` to a result `A` and an output state `O`.
///
/// The computation holds no mutable data. Running it twice with equal inputs
/// yields equal outputs, and cloning shares the underlying function.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::IxState;
///
/// let describe: IxState<u8, String, bool> =
///     IxState::new(|n: u8| (n.is_power_of_two(), format!("n = {n}")));
///
/// assert_eq!(describe.run(8), (true, "n = 8".to_string()));
/// assert!(!describe.evaluate(6));
/// assert_eq!(describe.execute(6), "n = 6");
/// ```
pub struct IxState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(I) -> (A, O)>,
}

impl<I, O, A> IxState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    /// Creates a computation from a transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(I) -> (A, O) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `input`, returning the result and the output state.
    pub fn run(&self, input: I) -> (A, O) {
        (self.run_function)(input)
    }

    /// Runs the computation and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// assert_eq!(IxState::<i32, i32, i32>::iof(42).evaluate(6), 42);
    /// ```
    pub fn evaluate(&self, input: I) -> A {
        self.run(input).0
    }

    /// Runs the computation and keeps only the output state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let double = IxState::imodify(|n: i32| n * 2);
    /// assert_eq!(double.execute(42), 84);
    /// ```
    pub fn execute(&self, input: I) -> O {
        self.run(input).1
    }

    /// Maps the result, leaving both state indices untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let doubled = IxState::<i32, i32, i32>::iof(4).imap(|n| n * 2);
    /// assert_eq!(doubled.run(9), (8, 9));
    /// ```
    pub fn imap<B, F>(self, function: F) -> IxState<I, O, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        IxState::new(move |input| {
            let (result, output) = original(input);
            (function(result), output)
        })
    }

    /// Runs this computation, then the one `function` builds from its result,
    /// starting from the intermediate state.
    ///
    /// The continuation may move the state to a new type `Z`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let computation: IxState<i32, String, usize> = IxState::<i32, i32, i32>::get()
    ///     .ichain(|n| IxState::new(move |m: i32| (n as usize, format!("{m}!"))));
    ///
    /// assert_eq!(computation.run(7), (7, "7!".to_string()));
    /// ```
    pub fn ichain<Z, B, F>(self, function: F) -> IxState<I, Z, B>
    where
        F: Fn(A) -> IxState<O, Z, B> + 'static,
        Z: 'static,
        B: 'static,
    {
        let original = self.run_function;
        IxState::new(move |input| {
            let (result, intermediate) = original(input);
            function(result).run(intermediate)
        })
    }

    /// Like [`ichain`](IxState::ichain), but keeps this computation's result.
    ///
    /// The continuation still runs and still determines the output state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let computation = IxState::<i32, i32, &str>::iof("answer")
    ///     .ichain_first(|_| IxState::imodify(|n: i32| n.to_string()));
    ///
    /// assert_eq!(computation.run(42), ("answer", "42".to_string()));
    /// ```
    pub fn ichain_first<Z, B, F>(self, function: F) -> IxState<I, Z, A>
    where
        F: Fn(&A) -> IxState<O, Z, B> + 'static,
        Z: 'static,
        B: 'static,
    {
        let original = self.run_function;
        IxState::new(move |input| {
            let (result, intermediate) = original(input);
            let (_, output) = function(&result).run(intermediate);
            (result, output)
        })
    }

    /// Runs this computation, then `next`, keeping this computation's result.
    ///
    /// The final state is the one `next` produces.
    pub fn iap_first<Z, B>(self, next: IxState<O, Z, B>) -> IxState<I, Z, A>
    where
        Z: 'static,
        B: 'static,
    {
        let first = self.run_function;
        let second = next.run_function;
        IxState::new(move |input| {
            let (result, intermediate) = first(input);
            let (_, output) = second(intermediate);
            (result, output)
        })
    }

    /// Runs this computation, then `next`, keeping `next`'s result.
    pub fn iap_second<Z, B>(self, next: IxState<O, Z, B>) -> IxState<I, Z, B>
    where
        Z: 'static,
        B: 'static,
    {
        let first = self.run_function;
        let second = next.run_function;
        IxState::new(move |input| {
            let (_, intermediate) = first(input);
            second(intermediate)
        })
    }

    /// Runs the computation on `function(input)` instead of `input`.
    ///
    /// The caller now supplies an `I2`, which is converted before entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let double = IxState::imodify(|n: i32| n * 2);
    /// let from_text = double.local(|text: &'static str| text.parse::<i32>().unwrap_or_default());
    ///
    /// assert_eq!(from_text.execute("42"), 84);
    /// ```
    pub fn local<I2, F>(self, function: F) -> IxState<I2, O, A>
    where
        F: Fn(I2) -> I + 'static,
        I2: 'static,
    {
        let original = self.run_function;
        IxState::new(move |input| original(function(input)))
    }

    /// Extends a do-notation scope with a binding computed from it.
    ///
    /// `function` sees the current scope and produces the next step; `merge`
    /// builds the new scope from the old scope and the bound value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let scope = IxState::<(), (), ()>::begin()
    ///     .ibind(|_| IxState::iof(42), |(), answer| answer)
    ///     .ibind(|answer: &i32| IxState::iof(answer + 5), |answer, next| (answer, next));
    ///
    /// assert_eq!(scope.run(()), ((42, 47), ()));
    /// ```
    pub fn ibind<Z, B, C, F, M>(self, function: F, merge: M) -> IxState<I, Z, C>
    where
        F: Fn(&A) -> IxState<O, Z, B> + 'static,
        M: Fn(A, B) -> C + 'static,
        Z: 'static,
        B: 'static,
        C: 'static,
    {
        let original = self.run_function;
        IxState::new(move |input| {
            let (scope, intermediate) = original(input);
            let (bound, output) = function(&scope).run(intermediate);
            (merge(scope, bound), output)
        })
    }

    /// Starts a do-notation scope from this computation's result.
    pub fn ibind_to<C, W>(self, wrap: W) -> IxState<I, O, C>
    where
        W: Fn(A) -> C + 'static,
        C: 'static,
    {
        self.imap(wrap)
    }

    /// Extends a do-notation scope with an independent computation.
    ///
    /// Unlike [`ibind`](IxState::ibind), `next` does not depend on the scope.
    pub fn iap_s<Z, B, C, M>(self, next: IxState<O, Z, B>, merge: M) -> IxState<I, Z, C>
    where
        M: Fn(A, B) -> C + 'static,
        Z: 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = next.run_function;
        IxState::new(move |input| {
            let (scope, intermediate) = first(input);
            let (bound, output) = second(intermediate);
            (merge(scope, bound), output)
        })
    }
}

// =============================================================================
// Computations producing functions
// =============================================================================

impl<I, O, G> IxState<I, O, G>
where
    I: 'static,
    O: 'static,
    G: 'static,
{
    /// Runs this computation to get a function, then `argument` from the
    /// intermediate state to get its input, and applies one to the other.
    ///
    /// The function side always runs first. The output state is the one
    /// `argument` produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let double: IxState<String, String, fn(i32) -> i32> = IxState::iof(|n| n * 2);
    /// let answer = IxState::<String, String, i32>::iof(42)
    ///     .ichain_first(|_| IxState::imodify(|text: String| {
    ///         text.split(", ").map(String::from).collect::<Vec<_>>()
    ///     }));
    ///
    /// assert_eq!(
    ///     double.iap(answer).run("Hello, World!".to_string()),
    ///     (84, vec!["Hello".to_string(), "World!".to_string()]),
    /// );
    /// ```
    pub fn iap<Z, A, B>(self, argument: IxState<O, Z, A>) -> IxState<I, Z, B>
    where
        G: FnOnce(A) -> B,
        Z: 'static,
        A: 'static,
        B: 'static,
    {
        let functions = self.run_function;
        let arguments = argument.run_function;
        IxState::new(move |input| {
            let (function, intermediate) = functions(input);
            let (value, output) = arguments(intermediate);
            (function(value), output)
        })
    }

    /// Applies the produced function to a fixed argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let render: IxState<i32, i32, fn(i32) -> String> = IxState::iof(|n| n.to_string());
    /// assert_eq!(render.iflap(1).run(100), ("1".to_string(), 100));
    /// ```
    pub fn iflap<A, B>(self, argument: A) -> IxState<I, O, B>
    where
        G: FnOnce(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        let functions = self.run_function;
        IxState::new(move |input| {
            let (function, output) = functions(input);
            (function(argument.clone()), output)
        })
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<I, O> IxState<I, O, ()>
where
    I: 'static,
    O: 'static,
{
    /// Transforms the state, possibly into a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let to_text = IxState::imodify(|n: i32| n.to_string());
    /// assert_eq!(to_text.run(42), ((), "42".to_string()));
    /// ```
    pub fn imodify<F>(function: F) -> Self
    where
        F: Fn(I) -> O + 'static,
    {
        Self::new(move |input| ((), function(input)))
    }

    /// Discards the input state and replaces it with `state`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// assert_eq!(IxState::put(9).run(8), ((), 9));
    /// ```
    pub fn put(state: O) -> Self
    where
        O: Clone,
    {
        Self::new(move |_| ((), state.clone()))
    }
}

impl<S, A> IxState<S, S, A>
where
    S: 'static,
    A: 'static,
{
    /// Returns `value`, passing the state through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let answer = IxState::<i32, i32, &str>::iof("The Answer");
    /// assert_eq!(answer.run(42), ("The Answer", 42));
    /// ```
    pub fn iof(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Projects a result out of the state, passing the state through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let text = IxState::gets(|n: &i32| n.to_string());
    /// assert_eq!(text.run(42), ("42".to_string(), 42));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Lifts a [`State`]. The transition function is shared, not copied.
    pub fn from_state(state: State<S, A>) -> Self {
        Self {
            run_function: state.into_transition(),
        }
    }

    /// Converts into a [`State`], which is possible only when the state type
    /// does not change.
    ///
    /// ```compile_fail
    /// use kindred::effect::IxState;
    ///
    /// let to_text: IxState<i32, String, ()> = IxState::imodify(|n: i32| n.to_string());
    /// let _ = to_text.into_state();
    /// ```
    pub fn into_state(self) -> State<S, A> {
        State::from_transition(self.run_function)
    }

    /// Alias for [`iof`](IxState::iof).
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::iof(value)
    }

    /// Maps the result.
    pub fn fmap<B, F>(self, function: F) -> IxState<S, S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.imap(function)
    }

    /// Sequences a computation that keeps the state type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// let computation = IxState::<i32, i32, i32>::pure(1)
    ///     .flat_map(|x| IxState::imodify(move |y: i32| x + y))
    ///     .flat_map(|()| IxState::imodify(|y: i32| y - 2));
    ///
    /// assert_eq!(computation.run(42), ((), 41));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IxState<S, S, B>
    where
        F: Fn(A) -> IxState<S, S, B> + 'static,
        B: 'static,
    {
        self.ichain(function)
    }

    /// Runs this computation for its effect on the state, then `next`.
    pub fn then<B>(self, next: IxState<S, S, B>) -> IxState<S, S, B>
    where
        B: 'static,
    {
        self.iap_second(next)
    }

    /// Runs this computation, then `other`, combining both results.
    pub fn map2<B, C, F>(self, other: IxState<S, S, B>, function: F) -> IxState<S, S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.iap_s(other, function)
    }

    /// Runs both computations in order, keeping the first result.
    pub fn product_left<B>(self, other: IxState<S, S, B>) -> IxState<S, S, A>
    where
        B: 'static,
    {
        self.iap_first(other)
    }

    /// Runs both computations in order, keeping the second result.
    pub fn product_right<B>(self, other: IxState<S, S, B>) -> IxState<S, S, B>
    where
        B: 'static,
    {
        self.iap_second(other)
    }

    /// Extends a do-notation scope; see [`ibind`](IxState::ibind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Scope { a: i32, b: i32 }
    ///
    /// let scope = IxState::<i32, i32, ()>::begin()
    ///     .bind(|_| IxState::pure(42), |(), a| a)
    ///     .bind(|a: &i32| IxState::pure(a + 5), |a, b| Scope { a, b });
    ///
    /// assert_eq!(scope.run(0), (Scope { a: 42, b: 47 }, 0));
    /// ```
    pub fn bind<B, C, F, M>(self, function: F, merge: M) -> IxState<S, S, C>
    where
        F: Fn(&A) -> IxState<S, S, B> + 'static,
        M: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.ibind(function, merge)
    }

    /// Starts a do-notation scope from the result; see [`ibind_to`](IxState::ibind_to).
    pub fn bind_to<C, W>(self, wrap: W) -> IxState<S, S, C>
    where
        W: Fn(A) -> C + 'static,
        C: 'static,
    {
        self.ibind_to(wrap)
    }

    /// Extends a do-notation scope with an independent computation.
    pub fn ap_s<B, C, M>(self, next: IxState<S, S, B>, merge: M) -> IxState<S, S, C>
    where
        M: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.iap_s(next, merge)
    }
}

impl<S, G> IxState<S, S, G>
where
    S: 'static,
    G: 'static,
{
    /// Non-indexed [`iap`](IxState::iap).
    pub fn apply<A, B>(self, argument: IxState<S, S, A>) -> IxState<S, S, B>
    where
        G: FnOnce(A) -> B,
        A: 'static,
        B: 'static,
    {
        self.iap(argument)
    }

    /// Non-indexed [`iflap`](IxState::iflap).
    pub fn flap<A, B>(self, argument: A) -> IxState<S, S, B>
    where
        G: FnOnce(A) -> B,
        A: Clone + 'static,
        B: 'static,
    {
        self.iflap(argument)
    }
}

impl<S> IxState<S, S, S>
where
    S: Clone + 'static,
{
    /// Returns the state as the result, passing it through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// assert_eq!(IxState::<i32, i32, i32>::get().run(42), (42, 42));
    /// ```
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> IxState<S, S, ()>
where
    S: 'static,
{
    /// The empty do-notation scope: result `()`, state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IxState;
    ///
    /// assert_eq!(IxState::<i32, i32, ()>::begin().run(4), ((), 4));
    /// ```
    #[doc(alias = "Do")]
    pub fn begin() -> Self {
        Self::new(|state| ((), state))
    }
}

// =============================================================================
// Conversions and formatting
// =============================================================================

impl<S, A> From<State<S, A>> for IxState<S, S, A>
where
    S: 'static,
    A: 'static,
{
    fn from(state: State<S, A>) -> Self {
        Self::from_state(state)
    }
}

impl<S, A> From<IxState<S, S, A>> for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn from(state: IxState<S, S, A>) -> Self {
        state.into_state()
    }
}

impl<I, O, A> Clone for IxState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<I, O, A> fmt::Display for IxState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<IxState>")
    }
}

impl<I, O, A> fmt::Debug for IxState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IxState").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(IxState<i32, String, ()>: Send, Sync);
static_assertions::assert_impl_all!(IxState<i32, String, ()>: Clone);
