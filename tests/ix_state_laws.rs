#![cfg(feature = "effect")]
//! Property-based tests for indexed state laws.
//!
//! ## Indexed Functor Laws
//! - Identity: m.imap(|x| x) == m
//! - Composition: m.imap(f).imap(g) == m.imap(|x| g(f(x)))
//!
//! ## Indexed Monad Laws
//! - Left Identity: iof(a).ichain(f) == f(a)
//! - Right Identity: m.ichain(iof) == m
//! - Associativity: m.ichain(f).ichain(g) == m.ichain(|x| f(x).ichain(g))
//!
//! ## State Laws
//! - Put Get: put(s).ichain(|()| get()) yields (s, s)
//! - Modify Composition: imodify(f).ichain(|()| imodify(g)) == imodify(|s| g(f(s)))
//! - Local: m.local(f).run(x) == m.run(f(x))
//! - Round trip: IxState -> State -> IxState preserves every run

use kindred::effect::{IxState, State};
use proptest::prelude::*;

fn sample() -> IxState<i32, String, i64> {
    IxState::new(|n: i32| (i64::from(n) * 3, format!("<{n}>")))
}

fn describe(value: i64) -> IxState<String, usize, i64> {
    IxState::new(move |text: String| (value - 1, text.len()))
}

fn widen(value: i64) -> IxState<usize, bool, u64> {
    IxState::new(move |length: usize| (value.unsigned_abs(), length % 2 == 0))
}

// =============================================================================
// Indexed Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_imap_identity(input in -1000i32..1000i32) {
        prop_assert_eq!(sample().imap(|x| x).run(input), sample().run(input));
    }

    #[test]
    fn prop_imap_composition(input in -1000i32..1000i32) {
        let first = |x: i64| x + 7;
        let second = |x: i64| x.to_string();

        let left = sample().imap(first).imap(second);
        let right = sample().imap(move |x| second(first(x)));

        prop_assert_eq!(left.run(input), right.run(input));
    }
}

// =============================================================================
// Indexed Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_ichain_left_identity(value in -1000i64..1000i64, input in "[a-z]{0,12}") {
        let left = IxState::<String, String, i64>::iof(value).ichain(describe);
        prop_assert_eq!(left.run(input.clone()), describe(value).run(input));
    }

    #[test]
    fn prop_ichain_right_identity(input in -1000i32..1000i32) {
        let left = sample().ichain(IxState::iof);
        prop_assert_eq!(left.run(input), sample().run(input));
    }

    #[test]
    fn prop_ichain_associativity(input in -1000i32..1000i32) {
        let left = sample().ichain(describe).ichain(widen);
        let right = sample().ichain(|x| describe(x).ichain(widen));
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_iap_matches_ichain(input in -1000i32..1000i32) {
        let argument = IxState::gets(|n: &i32| n.wrapping_add(1));

        let via_iap = function_value().iap(argument.clone());
        let via_ichain = function_value().ichain(move |f| argument.clone().imap(f));

        prop_assert_eq!(via_iap.run(input), via_ichain.run(input));
    }
}

fn function_value() -> IxState<i32, i32, fn(i32) -> i32> {
    IxState::iof(|x| x.wrapping_mul(2))
}

// =============================================================================
// State Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_put_then_get(input in any::<i32>(), replacement in any::<i32>()) {
        let put_get = IxState::<i32, i32, ()>::put(replacement).ichain(|()| IxState::<i32, i32, i32>::get());
        prop_assert_eq!(put_get.run(input), (replacement, replacement));
    }

    #[test]
    fn prop_get_then_put_is_noop(input in any::<i32>()) {
        let get_put = IxState::<i32, i32, i32>::get().ichain(IxState::put);
        prop_assert_eq!(get_put.run(input), ((), input));
    }

    #[test]
    fn prop_modify_composition(input in -10_000i32..10_000i32) {
        let first = |n: i32| n.to_string();
        let second = |text: String| text.len();

        let chained = IxState::imodify(first).ichain(move |()| IxState::imodify(second));
        let composed = IxState::imodify(move |n: i32| second(first(n)));

        prop_assert_eq!(chained.run(input), composed.run(input));
    }

    #[test]
    fn prop_local_equivalence(input in any::<u8>()) {
        let shift = |n: u8| i32::from(n) - 100;
        prop_assert_eq!(sample().local(shift).run(input), sample().run(shift(input)));
    }

    #[test]
    fn prop_state_round_trip(input in -1000i32..1000i32) {
        let indexed: IxState<i32, i32, String> = IxState::new(|n: i32| (n.to_string(), n.wrapping_sub(1)));
        let state: State<i32, String> = indexed.clone().into();
        let back: IxState<i32, i32, String> = state.clone().into();

        prop_assert_eq!(state.run(input), indexed.run(input));
        prop_assert_eq!(back.run(input), indexed.run(input));
    }
}

// =============================================================================
// Plain State Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_state_left_identity(value in -1000i32..1000i32, input in -1000i32..1000i32) {
        let step = |a: i32| State::new(move |s: i32| (a.wrapping_add(s), s.wrapping_mul(2)));
        prop_assert_eq!(State::pure(value).flat_map(step).run(input), step(value).run(input));
    }

    #[test]
    fn prop_state_right_identity(input in -1000i32..1000i32) {
        let state: State<i32, i32> = State::new(|s: i32| (s.wrapping_mul(3), s.wrapping_add(2)));
        prop_assert_eq!(state.clone().flat_map(State::pure).run(input), state.run(input));
    }

    #[test]
    fn prop_state_modify_then_get(input in -1000i32..1000i32) {
        let counter = State::modify(|s: i32| s.wrapping_add(1)).then(State::get());
        let expected = input.wrapping_add(1);
        prop_assert_eq!(counter.run(input), (expected, expected));
    }
}
