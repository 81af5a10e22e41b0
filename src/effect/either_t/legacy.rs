//! Bundled combinator record for an outer context.
//!
//! [`get_either_m`] fixes the outer context once and exposes the transformer
//! combinators as methods. Every method forwards to the free function of the
//! same name in [`either_t`](super); there is no additional behaviour.

use super::{EitherT, alt, ap, bimap, chain, fold, get_or_else, left, left_f, map, map_left, or_else, right, right_f, swap};
use crate::typeclass::Monad;

/// The transformer combinators specialised to one outer context `M`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t::get_either_m;
/// use kindred::typeclass::OptionKind;
///
/// let either_m = get_either_m(OptionKind);
/// let start: Option<Result<i32, String>> = either_m.of(20);
/// let doubled = either_m.chain(start, move |n| either_m.of(n * 2));
/// assert_eq!(either_m.map(doubled, |n| n + 2), Some(Ok(42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EitherM<M> {
    kind: M,
}

/// Builds the combinator record for the outer context `kind`.
#[doc(alias = "getEitherM")]
pub const fn get_either_m<M>(kind: M) -> EitherM<M>
where
    M: Monad + Copy,
{
    EitherM { kind }
}

impl<M> EitherM<M>
where
    M: Monad + Copy,
{
    /// See [`map`](super::map).
    pub fn map<E, A, B, G>(&self, fa: EitherT<M, E, A>, function: G) -> EitherT<M, E, B>
    where
        E: 'static,
        A: 'static,
        B: 'static,
        G: FnOnce(A) -> B + 'static,
    {
        map(self.kind, fa, function)
    }

    /// See [`ap`](super::ap).
    pub fn ap<E, A, B, G>(&self, fab: EitherT<M, E, G>, fa: EitherT<M, E, A>) -> EitherT<M, E, B>
    where
        E: 'static,
        A: 'static,
        B: 'static,
        G: FnOnce(A) -> B + 'static,
    {
        ap(self.kind, fab, fa)
    }

    /// See [`right`](super::right).
    pub fn of<E, A>(&self, value: A) -> EitherT<M, E, A>
    where
        E: 'static,
        A: 'static,
    {
        right(self.kind, value)
    }

    /// See [`chain`](super::chain).
    pub fn chain<E, A, B, G>(&self, ma: EitherT<M, E, A>, function: G) -> EitherT<M, E, B>
    where
        E: 'static,
        A: 'static,
        B: 'static,
        G: FnOnce(A) -> EitherT<M, E, B> + 'static,
    {
        chain(self.kind, ma, function)
    }

    /// See [`alt`](super::alt).
    pub fn alt<E, A, T>(&self, first: EitherT<M, E, A>, second: T) -> EitherT<M, E, A>
    where
        E: 'static,
        A: 'static,
        T: FnOnce() -> EitherT<M, E, A> + 'static,
    {
        alt(self.kind, first, second)
    }

    /// See [`bimap`](super::bimap).
    pub fn bimap<E, A, N, B, L, R>(&self, fea: EitherT<M, E, A>, on_left: L, on_right: R) -> EitherT<M, N, B>
    where
        E: 'static,
        A: 'static,
        N: 'static,
        B: 'static,
        L: FnOnce(E) -> N + 'static,
        R: FnOnce(A) -> B + 'static,
    {
        bimap(self.kind, fea, on_left, on_right)
    }

    /// See [`map_left`](super::map_left).
    pub fn map_left<E, A, N, L>(&self, fea: EitherT<M, E, A>, function: L) -> EitherT<M, N, A>
    where
        E: 'static,
        A: 'static,
        N: 'static,
        L: FnOnce(E) -> N + 'static,
    {
        map_left(self.kind, fea, function)
    }

    /// See [`fold`](super::fold).
    pub fn fold<E, A, B, L, R>(&self, ma: EitherT<M, E, A>, on_left: L, on_right: R) -> M::WithType<B>
    where
        E: 'static,
        A: 'static,
        B: 'static,
        L: FnOnce(E) -> M::WithType<B> + 'static,
        R: FnOnce(A) -> M::WithType<B> + 'static,
    {
        fold(self.kind, ma, on_left, on_right)
    }

    /// See [`get_or_else`](super::get_or_else).
    pub fn get_or_else<E, A, L>(&self, ma: EitherT<M, E, A>, on_left: L) -> M::WithType<A>
    where
        E: 'static,
        A: 'static,
        L: FnOnce(E) -> M::WithType<A> + 'static,
    {
        get_or_else(self.kind, ma, on_left)
    }

    /// See [`or_else`](super::or_else).
    pub fn or_else<E, A, N, L>(&self, ma: EitherT<M, E, A>, on_left: L) -> EitherT<M, N, A>
    where
        E: 'static,
        A: 'static,
        N: 'static,
        L: FnOnce(E) -> EitherT<M, N, A> + 'static,
    {
        or_else(self.kind, ma, on_left)
    }

    /// See [`swap`](super::swap).
    pub fn swap<E, A>(&self, ma: EitherT<M, E, A>) -> EitherT<M, A, E>
    where
        E: 'static,
        A: 'static,
    {
        swap(self.kind, ma)
    }

    /// See [`right_f`](super::right_f).
    pub fn right_m<E, A>(&self, ma: M::WithType<A>) -> EitherT<M, E, A>
    where
        E: 'static,
        A: 'static,
    {
        right_f(self.kind, ma)
    }

    /// See [`left_f`](super::left_f).
    pub fn left_m<E, A>(&self, me: M::WithType<E>) -> EitherT<M, E, A>
    where
        E: 'static,
        A: 'static,
    {
        left_f(self.kind, me)
    }

    /// See [`left`](super::left).
    pub fn left<E, A>(&self, error: E) -> EitherT<M, E, A>
    where
        E: 'static,
        A: 'static,
    {
        left(self.kind, error)
    }
}
