//! Deferred computations.
//!
//! `IO<A>` describes a computation producing an `A`. Nothing runs until
//! [`IO::run_unsafe`] is called, and every step of a composed action runs at
//! most once. [`IOKind`] is its brand, so an `IO` can serve as the outer
//! context of the transformer combinators in [`crate::effect::either_t`].
//! That is the setting in which ordering and laziness become observable:
//! an alternative that is never needed is never constructed, and a release
//! step runs exactly once.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IO, IOKind, either_t};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let journal = Rc::new(RefCell::new(Vec::new()));
//! let writer = Rc::clone(&journal);
//! let connect: IO<Result<&str, String>> = IO::new(move || {
//!     writer.borrow_mut().push("connect");
//!     Ok("session")
//! });
//!
//! let greeting = either_t::map(IOKind, connect, |session| format!("hello from {session}"));
//! assert!(journal.borrow().is_empty());
//!
//! assert_eq!(greeting.run_unsafe(), Ok("hello from session".to_string()));
//! assert_eq!(*journal.borrow(), vec!["connect"]);
//! ```

use std::fmt;

use crate::typeclass::{Apply, Chain, Functor, Pointed, TypeConstructor};

/// A deferred computation producing a value of type `A`.
///
/// Two actions are considered equal when running them yields the same value
/// after the same effects.
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates an action from a closure. The closure is not called here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::new(|| 6 * 7);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps an already computed value.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the action and returns its result.
    ///
    /// Named `run_unsafe` because it performs whatever effects the action
    /// describes. Call it at the edge of the program.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the eventual result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Runs this action, then the action produced from its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Alias for [`flat_map`](IO::flat_map).
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs this action for its effects, then `next`.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs this action, then `other`, and combines both results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Runs both actions and pairs their results.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<IO>")
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

/// Brand for [`IO`].
///
/// # Examples
///
/// ```rust
/// use kindred::effect::{IO, IOKind};
/// use kindred::typeclass::{Chain, Pointed};
///
/// let io: IO<i32> = IOKind::flat_map(IOKind::pure(4), |n: i32| IO::pure(n * n));
/// assert_eq!(io.run_unsafe(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IOKind;

impl TypeConstructor for IOKind {
    type WithType<A> = IO<A>;
}

impl Functor for IOKind {
    #[inline]
    fn fmap<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        fa.fmap(function)
    }
}

impl Pointed for IOKind {
    #[inline]
    fn pure<A>(value: A) -> IO<A>
    where
        A: 'static,
    {
        IO::pure(value)
    }
}

impl Apply for IOKind {
    /// `fa` runs before `fb`.
    #[inline]
    fn map2<A, B, C, F>(fa: IO<A>, fb: IO<B>, function: F) -> IO<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        fa.map2(fb, function)
    }
}

impl Chain for IOKind {
    #[inline]
    fn flat_map<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> IO<B> + 'static,
    {
        fa.flat_map(function)
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
static_assertions::assert_impl_all!(IOKind: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> IO<()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::clone(&log);
        let step = move |label: &'static str| {
            let handle = Rc::clone(&handle);
            IO::new(move || handle.borrow_mut().push(label))
        };
        (log, step)
    }

    #[rstest]
    fn nothing_runs_before_run_unsafe() {
        let (log, step) = recorder();
        let action = step("first").then(step("second"));
        assert!(log.borrow().is_empty());
        action.run_unsafe();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn map2_runs_left_then_right() {
        let (log, step) = recorder();
        let action = IOKind::map2(step("left"), step("right"), |(), ()| 1);
        assert_eq!(action.run_unsafe(), 1);
        assert_eq!(*log.borrow(), vec!["left", "right"]);
    }

    #[rstest]
    fn and_then_is_flat_map() {
        let io = IO::pure(3).and_then(|x| IO::pure(x + 4));
        assert_eq!(io.run_unsafe(), 7);
    }

    #[rstest]
    fn product_pairs_results() {
        assert_eq!(IO::pure(1).product(IO::pure('x')).run_unsafe(), (1, 'x'));
    }

    #[rstest]
    fn brand_fmap_delegates() {
        assert_eq!(IOKind::fmap(IO::pure(2), |n: i32| n + 1).run_unsafe(), 3);
    }

    #[rstest]
    fn display_is_opaque() {
        assert_eq!(IO::pure(0).to_string(), "<IO>");
    }
}
