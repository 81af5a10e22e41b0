//! Combinators over wrapped outcomes.
//!
//! Every function takes the outer context's brand as its first argument and
//! asks only for the capabilities it uses.

use super::EitherT;
use crate::typeclass::{Apply, Chain, Functor, Monad, Pointed, Semigroup};

// =============================================================================
// Constructors
// =============================================================================

/// Lifts a success value.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let lifted: Option<Result<i32, String>> = either_t::right(OptionKind, 42);
/// assert_eq!(lifted, Some(Ok(42)));
/// ```
#[inline]
pub fn right<F, E, A>(_kind: F, value: A) -> EitherT<F, E, A>
where
    F: Pointed,
    E: 'static,
    A: 'static,
{
    F::pure::<Result<A, E>>(Ok(value))
}

/// Lifts a failure value.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::{Identity, IdentityKind};
///
/// let failed: Identity<Result<i32, &str>> = either_t::left(IdentityKind, "boom");
/// assert_eq!(failed, Identity(Err("boom")));
/// ```
#[inline]
pub fn left<F, E, A>(_kind: F, error: E) -> EitherT<F, E, A>
where
    F: Pointed,
    E: 'static,
    A: 'static,
{
    F::pure::<Result<A, E>>(Err(error))
}

/// Marks every value of a plain wrapped computation as a success.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let lifted: Option<Result<i32, String>> = either_t::right_f(OptionKind, Some(1));
/// assert_eq!(lifted, Some(Ok(1)));
/// ```
#[inline]
#[doc(alias = "rightF")]
pub fn right_f<F, E, A>(_kind: F, fa: F::WithType<A>) -> EitherT<F, E, A>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::fmap::<A, Result<A, E>, _>(fa, Ok)
}

/// Marks every value of a plain wrapped computation as a failure.
#[inline]
#[doc(alias = "leftF")]
pub fn left_f<F, E, A>(_kind: F, fe: F::WithType<E>) -> EitherT<F, E, A>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::fmap::<E, Result<A, E>, _>(fe, Err)
}

// =============================================================================
// Functor-level combinators
// =============================================================================

/// Applies `function` to the success payload. Failures pass through untouched.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// assert_eq!(either_t::map(OptionKind, Some(Ok::<i32, String>(2)), |n| n * 10), Some(Ok(20)));
/// assert_eq!(
///     either_t::map(OptionKind, Some(Err::<i32, _>("no".to_string())), |n| n * 10),
///     Some(Err("no".to_string())),
/// );
/// ```
#[inline]
pub fn map<F, E, A, B, G>(_kind: F, fa: EitherT<F, E, A>, function: G) -> EitherT<F, E, B>
where
    F: Functor,
    E: 'static,
    A: 'static,
    B: 'static,
    G: FnOnce(A) -> B + 'static,
{
    F::fmap::<Result<A, E>, Result<B, E>, _>(fa, move |outcome: Result<A, E>| outcome.map(function))
}

/// Transforms both payloads without changing the branch.
#[inline]
pub fn bimap<F, E, A, N, B, L, R>(_kind: F, fea: EitherT<F, E, A>, on_left: L, on_right: R) -> EitherT<F, N, B>
where
    F: Functor,
    E: 'static,
    A: 'static,
    N: 'static,
    B: 'static,
    L: FnOnce(E) -> N + 'static,
    R: FnOnce(A) -> B + 'static,
{
    F::fmap::<Result<A, E>, Result<B, N>, _>(fea, move |outcome: Result<A, E>| match outcome {
        Ok(value) => Ok(on_right(value)),
        Err(error) => Err(on_left(error)),
    })
}

/// Transforms the failure payload.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let failed: Option<Result<i32, &str>> = Some(Err("io"));
/// assert_eq!(either_t::map_left(OptionKind, failed, str::len), Some(Err(2)));
/// ```
#[inline]
#[doc(alias = "mapLeft")]
pub fn map_left<F, E, A, N, L>(_kind: F, fea: EitherT<F, E, A>, function: L) -> EitherT<F, N, A>
where
    F: Functor,
    E: 'static,
    A: 'static,
    N: 'static,
    L: FnOnce(E) -> N + 'static,
{
    F::fmap::<Result<A, E>, Result<A, N>, _>(fea, move |outcome: Result<A, E>| outcome.map_err(function))
}

/// Exchanges the failure and success payloads.
#[inline]
pub fn swap<F, E, A>(_kind: F, ma: EitherT<F, E, A>) -> EitherT<F, A, E>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::fmap::<Result<A, E>, Result<E, A>, _>(ma, |outcome: Result<A, E>| match outcome {
        Ok(value) => Err(value),
        Err(error) => Ok(error),
    })
}

/// Collapses both payloads into one type `U`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let outcome: Option<Result<u8, u16>> = Some(Ok(7));
/// let merged: Option<u32> = either_t::to_union(OptionKind, outcome);
/// assert_eq!(merged, Some(7));
/// ```
#[inline]
#[doc(alias = "toUnion")]
pub fn to_union<F, E, A, U>(_kind: F, fa: EitherT<F, E, A>) -> F::WithType<U>
where
    F: Functor,
    E: Into<U> + 'static,
    A: Into<U> + 'static,
    U: 'static,
{
    F::fmap::<Result<A, E>, U, _>(fa, |outcome: Result<A, E>| match outcome {
        Ok(value) => value.into(),
        Err(error) => error.into(),
    })
}

// =============================================================================
// Apply-level combinators
// =============================================================================

/// Applies a wrapped function to a wrapped argument.
///
/// Both wrapped values are combined with the context's `map2`. If either
/// outcome failed, the first failure is reported: the function's, then the
/// argument's. See [`ap_validation`] to keep both.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let function: Option<Result<fn(i32) -> i32, &str>> = Some(Ok(|n| n + 1));
/// assert_eq!(either_t::ap(OptionKind, function, Some(Ok(1))), Some(Ok(2)));
///
/// let broken: Option<Result<fn(i32) -> i32, &str>> = Some(Err("function"));
/// assert_eq!(either_t::ap(OptionKind, broken, Some(Err("argument"))), Some(Err("function")));
/// ```
#[inline]
pub fn ap<F, E, A, B, G>(_kind: F, fab: EitherT<F, E, G>, fa: EitherT<F, E, A>) -> EitherT<F, E, B>
where
    F: Apply,
    E: 'static,
    A: 'static,
    B: 'static,
    G: FnOnce(A) -> B + 'static,
{
    F::map2::<Result<G, E>, Result<A, E>, Result<B, E>, _>(
        fab,
        fa,
        |function: Result<G, E>, argument: Result<A, E>| match (function, argument) {
            (Ok(function), Ok(argument)) => Ok(function(argument)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        },
    )
}

/// Applies a wrapped function to a wrapped argument, combining both failures.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::IdentityKind;
/// use kindred::typeclass::Identity;
///
/// let function: Identity<Result<fn(i32) -> i32, Vec<&str>>> = Identity(Err(vec!["function"]));
/// let argument: Identity<Result<i32, Vec<&str>>> = Identity(Err(vec!["argument"]));
/// assert_eq!(
///     either_t::ap_validation(IdentityKind, function, argument),
///     Identity(Err(vec!["function", "argument"])),
/// );
/// ```
#[inline]
pub fn ap_validation<F, E, A, B, G>(_kind: F, fab: EitherT<F, E, G>, fa: EitherT<F, E, A>) -> EitherT<F, E, B>
where
    F: Apply,
    E: Semigroup + 'static,
    A: 'static,
    B: 'static,
    G: FnOnce(A) -> B + 'static,
{
    F::map2::<Result<G, E>, Result<A, E>, Result<B, E>, _>(fab, fa, |function, argument| {
        map2_validation(function, argument, |function: G, argument: A| function(argument))
    })
}

/// Combines two outcomes, accumulating failures with the semigroup of `E`.
///
/// This is the validation applicative on plain outcomes: when both fail, the
/// result is `Err(first.combine(second))`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t::map2_validation;
///
/// let first: Result<i32, String> = Err("a".to_string());
/// let second: Result<i32, String> = Err("b".to_string());
/// assert_eq!(map2_validation(first, second, |x, y| x + y), Err("ab".to_string()));
/// assert_eq!(map2_validation(Ok::<_, String>(1), Ok(2), |x, y| x + y), Ok(3));
/// ```
#[inline]
pub fn map2_validation<E, A, B, C, G>(first: Result<A, E>, second: Result<B, E>, function: G) -> Result<C, E>
where
    E: Semigroup,
    G: FnOnce(A, B) -> C,
{
    match (first, second) {
        (Ok(a), Ok(b)) => Ok(function(a, b)),
        (Err(first_error), Err(second_error)) => Err(first_error.combine(second_error)),
        (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
    }
}

// =============================================================================
// Chain-level combinators
// =============================================================================

/// Eliminates the outcome by continuing with the computation for its branch.
///
/// Needs only [`Chain`]: nothing is lifted back into the context.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let describe = |outcome: Option<Result<i32, String>>| {
///     either_t::fold(
///         OptionKind,
///         outcome,
///         |error| Some(format!("failed: {error}")),
///         |value| Some(format!("got {value}")),
///     )
/// };
/// assert_eq!(describe(Some(Ok(1))), Some("got 1".to_string()));
/// assert_eq!(describe(Some(Err("x".to_string()))), Some("failed: x".to_string()));
/// ```
#[inline]
#[doc(alias = "match")]
pub fn fold<F, E, A, B, L, R>(_kind: F, ma: EitherT<F, E, A>, on_left: L, on_right: R) -> F::WithType<B>
where
    F: Chain,
    E: 'static,
    A: 'static,
    B: 'static,
    L: FnOnce(E) -> F::WithType<B> + 'static,
    R: FnOnce(A) -> F::WithType<B> + 'static,
{
    F::flat_map::<Result<A, E>, B, _>(ma, move |outcome: Result<A, E>| match outcome {
        Ok(value) => on_right(value),
        Err(error) => on_left(error),
    })
}

// =============================================================================
// Monad-level combinators
// =============================================================================

/// Sequences a computation on the success payload.
///
/// A failure is absorbing: it is re-wrapped with `pure` and `function` is
/// never called.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let halve = |n: i32| Some(if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) });
///
/// assert_eq!(either_t::chain(OptionKind, Some(Ok(8)), halve), Some(Ok(4)));
/// assert_eq!(either_t::chain(OptionKind, Some(Ok(3)), halve), Some(Err("3 is odd".to_string())));
/// ```
#[inline]
#[doc(alias = "flat_map")]
pub fn chain<F, E, A, B, G>(_kind: F, ma: EitherT<F, E, A>, function: G) -> EitherT<F, E, B>
where
    F: Monad,
    E: 'static,
    A: 'static,
    B: 'static,
    G: FnOnce(A) -> EitherT<F, E, B> + 'static,
{
    F::flat_map::<Result<A, E>, Result<B, E>, _>(ma, move |outcome: Result<A, E>| match outcome {
        Ok(value) => function(value),
        Err(error) => F::pure::<Result<B, E>>(Err(error)),
    })
}

/// Falls back to `second` when `first` failed.
///
/// `second` is invoked at most once, and only after `first` has resolved to
/// a failure.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let primary: Option<Result<i32, &str>> = Some(Err("down"));
/// assert_eq!(either_t::alt(OptionKind, primary, || Some(Ok(2))), Some(Ok(2)));
///
/// let healthy: Option<Result<i32, &str>> = Some(Ok(1));
/// assert_eq!(either_t::alt(OptionKind, healthy, || unreachable!()), Some(Ok(1)));
/// ```
#[inline]
pub fn alt<F, E, A, T>(_kind: F, first: EitherT<F, E, A>, second: T) -> EitherT<F, E, A>
where
    F: Monad,
    E: 'static,
    A: 'static,
    T: FnOnce() -> EitherT<F, E, A> + 'static,
{
    F::flat_map::<Result<A, E>, Result<A, E>, _>(first, move |outcome: Result<A, E>| match outcome {
        Ok(value) => F::pure::<Result<A, E>>(Ok(value)),
        Err(_) => second(),
    })
}

/// Like [`alt`], but when both alternatives fail their failures are combined
/// with the semigroup of `E`, first failure first.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let first: Option<Result<i32, String>> = Some(Err("a".to_string()));
/// let combined = either_t::alt_validation(OptionKind, first, || Some(Err("b".to_string())));
/// assert_eq!(combined, Some(Err("ab".to_string())));
/// ```
#[inline]
#[doc(alias = "altValidation")]
pub fn alt_validation<F, E, A, T>(_kind: F, first: EitherT<F, E, A>, second: T) -> EitherT<F, E, A>
where
    F: Monad,
    E: Semigroup + 'static,
    A: 'static,
    T: FnOnce() -> EitherT<F, E, A> + 'static,
{
    F::flat_map::<Result<A, E>, Result<A, E>, _>(first, move |outcome: Result<A, E>| match outcome {
        Ok(value) => F::pure::<Result<A, E>>(Ok(value)),
        Err(first_error) => F::fmap::<Result<A, E>, Result<A, E>, _>(second(), move |fallback: Result<A, E>| {
            fallback.map_err(|second_error| first_error.combine(second_error))
        }),
    })
}

/// Recovers from a failure with a plain wrapped value.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let failed: Option<Result<usize, &str>> = Some(Err("four"));
/// assert_eq!(either_t::get_or_else(OptionKind, failed, |error| Some(error.len())), Some(4));
/// ```
#[inline]
#[doc(alias = "getOrElse")]
pub fn get_or_else<F, E, A, L>(_kind: F, ma: EitherT<F, E, A>, on_left: L) -> F::WithType<A>
where
    F: Monad,
    E: 'static,
    A: 'static,
    L: FnOnce(E) -> F::WithType<A> + 'static,
{
    F::flat_map::<Result<A, E>, A, _>(ma, move |outcome: Result<A, E>| match outcome {
        Ok(value) => F::pure::<A>(value),
        Err(error) => on_left(error),
    })
}

/// Recovers from a failure with a new wrapped outcome, whose failure type
/// may differ.
///
/// `on_left` is invoked only when `ma` failed.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::OptionKind;
///
/// let failed: Option<Result<i32, &str>> = Some(Err("7"));
/// let recovered: Option<Result<i32, std::num::ParseIntError>> =
///     either_t::or_else(OptionKind, failed, |text| Some(text.parse::<i32>()));
/// assert_eq!(recovered, Some(Ok(7)));
/// ```
#[inline]
#[doc(alias = "orElse")]
pub fn or_else<F, E, A, N, L>(_kind: F, ma: EitherT<F, E, A>, on_left: L) -> EitherT<F, N, A>
where
    F: Monad,
    E: 'static,
    A: 'static,
    N: 'static,
    L: FnOnce(E) -> EitherT<F, N, A> + 'static,
{
    F::flat_map::<Result<A, E>, Result<A, N>, _>(ma, move |outcome: Result<A, E>| match outcome {
        Ok(value) => F::pure::<Result<A, N>>(Ok(value)),
        Err(error) => on_left(error),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityKind, OptionKind, ResultKind};
    use rstest::rstest;

    #[rstest]
    fn right_and_left_lift_into_option() {
        let success: Option<Result<i32, String>> = right(OptionKind, 1);
        let failure: Option<Result<i32, String>> = left(OptionKind, "e".to_string());
        assert_eq!(success, Some(Ok(1)));
        assert_eq!(failure, Some(Err("e".to_string())));
    }

    #[rstest]
    fn left_f_marks_failures() {
        let lifted: Option<Result<i32, &str>> = left_f(OptionKind, Some("bad"));
        assert_eq!(lifted, Some(Err("bad")));
        let absent: Option<Result<i32, &str>> = left_f(OptionKind, None);
        assert_eq!(absent, None);
    }

    #[rstest]
    fn outer_failure_is_not_an_outcome() {
        let outer: Result<Result<i32, &str>, &str> = Err("outer");
        let mapped = map(ResultKind::<&str>::new(), outer, |n: i32| n + 1);
        assert_eq!(mapped, Err("outer"));
    }

    #[rstest]
    fn bimap_keeps_branch() {
        let success: Identity<Result<i32, &str>> = Identity(Ok(3));
        let failure: Identity<Result<i32, &str>> = Identity(Err("left"));
        assert_eq!(bimap(IdentityKind, success, str::len, |n: i32| n + 1), Identity(Ok(4)));
        assert_eq!(bimap(IdentityKind, failure, str::len, |n: i32| n + 1), Identity(Err(4)));
    }

    #[rstest]
    fn swap_exchanges_payloads() {
        let swapped: Option<Result<&str, i32>> = swap(OptionKind, Some(Ok::<i32, &str>(1)));
        assert_eq!(swapped, Some(Err(1)));
    }

    #[rstest]
    fn to_union_with_shared_type() {
        let merged: Option<String> = to_union(OptionKind, Some(Err::<String, String>("e".to_string())));
        assert_eq!(merged, Some("e".to_string()));
    }

    #[rstest]
    fn ap_reports_argument_failure_when_function_succeeds() {
        let function: Option<Result<fn(i32) -> i32, &str>> = Some(Ok(|n| n * 2));
        assert_eq!(ap(OptionKind, function, Some(Err("argument"))), Some(Err("argument")));
    }

    #[rstest]
    fn map2_validation_single_failure_passes_through() {
        let first: Result<i32, Vec<&str>> = Ok(1);
        let second: Result<i32, Vec<&str>> = Err(vec!["second"]);
        assert_eq!(map2_validation(first, second, |a, b| a + b), Err(vec!["second"]));
    }

    #[rstest]
    fn chain_on_failure_skips_function() {
        let failed: Option<Result<i32, &str>> = Some(Err("stop"));
        let chained = chain(OptionKind, failed, |_: i32| -> Option<Result<i32, &str>> {
            unreachable!("continuation must not run")
        });
        assert_eq!(chained, Some(Err("stop")));
    }

    #[rstest]
    fn fold_on_identity() {
        let folded = fold(
            IdentityKind,
            Identity(Err::<i32, i32>(5)),
            |error| Identity(error * 100),
            Identity,
        );
        assert_eq!(folded, Identity(500));
    }

    #[rstest]
    fn get_or_else_keeps_success() {
        let success: Option<Result<i32, &str>> = Some(Ok(1));
        assert_eq!(get_or_else(OptionKind, success, |_| Some(0)), Some(1));
    }

    #[rstest]
    fn or_else_keeps_success_and_changes_error_type() {
        let success: Option<Result<i32, &str>> = Some(Ok(1));
        let recovered: Option<Result<i32, usize>> = or_else(OptionKind, success, |_| Some(Err(0)));
        assert_eq!(recovered, Some(Ok(1)));
    }

    #[rstest]
    fn alt_validation_failing_first_succeeding_second() {
        let first: Option<Result<i32, String>> = Some(Err("a".to_string()));
        assert_eq!(alt_validation(OptionKind, first, || Some(Ok(2))), Some(Ok(2)));
    }
}
