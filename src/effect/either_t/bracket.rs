//! Scoped resource handling for wrapped outcomes.

use super::EitherT;
use super::combinators::map2_validation;
use crate::typeclass::Monad;

fn singleton<T, U>(error: T) -> Vec<U>
where
    T: Into<U>,
{
    vec![error.into()]
}

/// Acquires a resource, uses it, and releases it, reporting every failure.
///
/// 1. `acquire` is sequenced first. If it fails with `g`, the result is
///    `Err(vec![g])`; neither `use_resource` nor `release` runs.
/// 2. Otherwise `use_resource` runs with the resource.
/// 3. `release` then runs with `pure(Ok(resource))`, whatever the body's
///    outcome was.
/// 4. The two outcomes are combined: the body's success value if both
///    succeeded, otherwise every failure in order, body failure first and
///    release failure second.
///
/// Body and release failures may have different types; both are converted
/// into the caller's `U`. When the outer context itself short-circuits (an
/// `Option` body returning `None`, for example) nothing after that point
/// runs, release included.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::either_t;
/// use kindred::typeclass::{Identity, IdentityKind};
///
/// let acquired: Identity<Result<&str, String>> = Identity(Ok("handle"));
/// let result: Identity<Result<u8, Vec<String>>> = either_t::bracket(
///     IdentityKind,
///     acquired,
///     |_| Identity(Err("close failed".to_string())),
///     |_| Identity(Err::<u8, String>("read failed".to_string())),
/// );
///
/// assert_eq!(
///     result,
///     Identity(Err(vec!["read failed".to_string(), "close failed".to_string()])),
/// );
/// ```
#[doc(alias = "bracketT")]
pub fn bracket<F, G, B, E, A, U, Rel, Use>(
    _kind: F,
    acquire: EitherT<F, G, B>,
    release: Rel,
    use_resource: Use,
) -> EitherT<F, Vec<U>, A>
where
    F: Monad,
    G: Into<U> + 'static,
    B: Clone + 'static,
    E: Into<U> + 'static,
    A: 'static,
    U: 'static,
    Rel: FnOnce(EitherT<F, G, B>) -> EitherT<F, G, ()> + 'static,
    Use: FnOnce(B) -> EitherT<F, E, A> + 'static,
{
    F::flat_map::<Result<B, G>, Result<A, Vec<U>>, _>(acquire, move |acquired: Result<B, G>| match acquired {
        Err(error) => F::pure::<Result<A, Vec<U>>>(Err(singleton(error))),
        Ok(resource) => {
            let body = F::fmap::<Result<A, E>, Result<A, Vec<U>>, _>(
                use_resource(resource.clone()),
                |outcome: Result<A, E>| outcome.map_err(singleton),
            );
            F::flat_map::<Result<A, Vec<U>>, Result<A, Vec<U>>, _>(body, move |used: Result<A, Vec<U>>| {
                let released = release(F::pure::<Result<B, G>>(Ok(resource)));
                F::fmap::<Result<(), G>, Result<A, Vec<U>>, _>(released, move |freed: Result<(), G>| {
                    map2_validation(used, freed.map_err(singleton), |value, ()| value)
                })
            })
        }
    })
}
