//! Semigroup - merging two values of the same type.
//!
//! This is the capability the outcome transformer uses whenever two failures
//! have to become one: [`alt_validation`](crate::effect::either_t::alt_validation)
//! merges the failures of both alternatives, and the bracket protocol
//! concatenates body and release failures with the `Vec` instance.
//!
//! `combine` must be associative:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! It need not be commutative. Every instance here keeps the left operand
//! first, which is what makes "first failure first" hold for accumulated
//! failures.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! let parsing = vec!["missing field `id`"];
//! let checking = vec!["name too long", "age negative"];
//! assert_eq!(
//!     parsing.combine(checking),
//!     vec!["missing field `id`", "name too long", "age negative"],
//! );
//! ```

use std::num::NonZeroUsize;

use super::Identity;

/// Types whose values can be merged with an associative operation.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Semigroup;
///
/// let report = String::from("disk full; ").combine(String::from("retry later"));
/// assert_eq!(report, "disk full; retry later");
/// ```
pub trait Semigroup {
    /// Merges `other` into `self`, `self` first.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// [`combine`](Semigroup::combine) without consuming either operand.
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let first = vec![1];
    /// let second = vec![2];
    /// assert_eq!(first.combine_ref(&second), vec![1, 2]);
    /// assert_eq!(first, vec![1]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(x, 1)` returns `x`; `combine_n(x, 3)` returns
    /// `x.combine(x).combine(x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use kindred::typeclass::Semigroup;
    ///
    /// let three = NonZeroUsize::new(3).unwrap();
    /// assert_eq!(String::from("ab").combine_n(three), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: NonZeroUsize) -> Self
    where
        Self: Clone,
    {
        (1..count.get()).fold(self.clone(), |accumulator, _| accumulator.combine(self.clone()))
    }

    /// Merges every element left to right, or `None` for an empty iterator.
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let batches = vec![vec!["a"], vec![], vec!["b", "c"]];
    /// assert_eq!(Vec::reduce_all(batches), Some(vec!["a", "b", "c"]));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Instances
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

/// Concatenation, preserving order and duplicates.
///
/// No `Clone` bound on the elements: accumulated failures are frequently
/// error values that cannot be cloned.
impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is neutral: the other side is kept as is.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(first), Some(second)) => Some(first.combine(second)),
            (present, None) | (None, present) => present,
        }
    }
}

/// Combines successes; the first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(first), Ok(second)) => Ok(first.combine(second)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
