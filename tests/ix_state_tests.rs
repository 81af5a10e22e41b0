#![cfg(feature = "effect")]
//! Integration tests for indexed state computations.

use kindred::effect::{IxState, State};
use kindred::ix_do;
use rstest::rstest;

// =============================================================================
// Primitive Tests
// =============================================================================

#[rstest]
fn put_replaces_state() {
    assert_eq!(IxState::<i32, i32, ()>::put(9).run(8), ((), 9));
}

#[rstest]
fn put_can_change_the_state_type() {
    let reset: IxState<i32, String, ()> = IxState::put("reset".to_string());
    assert_eq!(reset.run(8), ((), "reset".to_string()));
}

#[rstest]
fn imodify_doubles() {
    assert_eq!(IxState::imodify(|n: i32| n * 2).execute(42), 84);
}

#[rstest]
fn get_returns_state_twice() {
    assert_eq!(IxState::<i32, i32, i32>::get().run(42), (42, 42));
}

#[rstest]
fn gets_projects_state() {
    assert_eq!(IxState::gets(|n: &i32| n.to_string()).run(42), ("42".to_string(), 42));
}

#[rstest]
#[case(1, 1)]
#[case(-3, -3)]
fn iof_leaves_state_alone(#[case] state: i32, #[case] expected: i32) {
    assert_eq!(IxState::iof("value").run(state), ("value", expected));
}

#[rstest]
fn imodify_to_string_then_split() {
    let computation = IxState::imodify(|n: i32| n.to_string()).ichain(|()| {
        IxState::imodify(|text: String| text.chars().map(String::from).collect::<Vec<_>>())
    });
    assert_eq!(computation.run(42), ((), vec!["4".to_string(), "2".to_string()]));
}

#[rstest]
fn evaluate_and_execute_split_the_pair() {
    let computation: IxState<i32, String, u32> = IxState::new(|n: i32| (n.unsigned_abs(), n.to_string()));
    assert_eq!(computation.evaluate(-7), 7);
    assert_eq!(computation.execute(-7), "-7");
}

#[rstest]
fn runs_are_independent() {
    let computation = IxState::imodify(|n: i32| n + 1);
    assert_eq!(computation.execute(1), 2);
    assert_eq!(computation.execute(10), 11);
    assert_eq!(computation.execute(1), 2);
}

// =============================================================================
// Sequencing Tests
// =============================================================================

#[rstest]
fn imap_keeps_output_state() {
    let computation = IxState::imodify(|n: i32| n.to_string()).imap(|()| "done");
    assert_eq!(computation.run(5), ("done", "5".to_string()));
}

#[rstest]
fn iap_runs_function_side_first() {
    let function: IxState<i32, String, Box<dyn FnOnce(i32) -> i32>> =
        IxState::new(|n: i32| (Box::new(move |x: i32| x + n) as Box<dyn FnOnce(i32) -> i32>, "Hello World!".to_string()));
    let argument: IxState<String, Vec<String>, i32> =
        IxState::new(|text: String| (42, text.split(' ').map(String::from).collect()));

    assert_eq!(
        function.iap(argument).run(42),
        (84, vec!["Hello".to_string(), "World!".to_string()])
    );
}

#[rstest]
fn ichain_changes_state_type_twice() {
    let computation = IxState::imodify(|n: i32| n.to_string())
        .ichain(|()| IxState::imodify(|text: String| text.parse::<i32>().unwrap() - 1));
    assert_eq!(computation.run(42), ((), 41));
}

#[rstest]
fn ichain_first_keeps_first_result() {
    let computation = IxState::<i32, i32, i32>::get().ichain_first(|n: &i32| IxState::put(n.to_string()));
    assert_eq!(computation.run(5), (5, "5".to_string()));
}

#[rstest]
fn iap_first_and_second_thread_state() {
    let first = IxState::gets(|n: &i32| n * 2).iap_first(IxState::imodify(|n: i32| n.to_string()));
    let second = IxState::gets(|n: &i32| n * 2).iap_second(IxState::gets(|n: &i32| n + 1));
    assert_eq!(first.run(21), (42, "21".to_string()));
    assert_eq!(second.run(21), (22, 21));
}

#[rstest]
fn iflap_supplies_the_argument() {
    let function: IxState<i32, i32, fn(u8) -> u32> = IxState::iof(|n| u32::from(n) * 10);
    assert_eq!(function.iflap(4).run(0), (40, 0));
}

// =============================================================================
// local Tests
// =============================================================================

#[rstest]
#[case(0)]
#[case(21)]
#[case(200)]
fn local_matches_running_on_transformed_input(#[case] input: u8) {
    let inner = IxState::imodify(|n: i32| n * 2);
    let widen = |n: u8| i32::from(n);

    let via_local = inner.clone().local(widen);
    assert_eq!(via_local.run(input), inner.run(widen(input)));
}

#[rstest]
fn local_with_string_input() {
    let length = IxState::<usize, usize, usize>::get().local(|text: String| text.len());
    assert_eq!(length.run("kindred".to_string()), (7, 7));
}

// =============================================================================
// Do-Notation Tests
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Scope {
    a: i32,
    b: i32,
}

#[rstest]
fn bind_builds_a_record() {
    let computation = IxState::<i32, i32, i32>::get()
        .bind_to(|a| a)
        .bind(|a: &i32| IxState::iof(*a + 5), |a, b| Scope { a, b });
    assert_eq!(computation.run(42), (Scope { a: 42, b: 47 }, 42));
}

#[rstest]
fn begin_then_ap_s() {
    let computation = IxState::<i32, i32, ()>::begin()
        .ap_s(IxState::get(), |(), a| a)
        .ap_s(IxState::gets(|n: &i32| n + 5), |a, b| Scope { a, b });
    assert_eq!(computation.run(42).0, Scope { a: 42, b: 47 });
}

#[rstest]
fn ibind_changes_state_type() {
    let computation = IxState::<i32, i32, i32>::get()
        .ibind_to(|a| a)
        .ibind(|a: &i32| IxState::put(a.to_string()), |a, ()| a)
        .iap_s(IxState::gets(|text: &String| text.len()), |a, length| (a, length));
    assert_eq!(computation.run(123), ((123, 3), "123".to_string()));
}

#[rstest]
fn ix_do_reads_like_the_combinators() {
    let computation: IxState<i32, String, Scope> = ix_do! {
        a <= IxState::<i32, i32, i32>::get();
        () <= IxState::imodify(move |n: i32| n + 5);
        b <= IxState::<i32, i32, i32>::get();
        () <= IxState::imodify(|n: i32| n.to_string());
        IxState::iof(Scope { a, b })
    };
    assert_eq!(computation.run(42), (Scope { a: 42, b: 47 }, "47".to_string()));
}

// =============================================================================
// Non-indexed Tests
// =============================================================================

#[rstest]
fn plain_combinators_keep_the_state_type() {
    let counter = IxState::<u32, u32, u32>::get()
        .flat_map(|n| IxState::<u32, u32, ()>::put(n + 1).then(IxState::pure(n)))
        .fmap(|n| n * 10);
    assert_eq!(counter.run(4), (40, 5));
}

#[rstest]
fn apply_and_map2() {
    let function: IxState<i32, i32, fn(i32) -> i32> = IxState::pure(|n| n + 1);
    assert_eq!(function.apply(IxState::get()).run(1), (2, 1));

    let sum = IxState::gets(|n: &i32| n * 2).map2(IxState::gets(|n: &i32| n * 3), |a, b| a + b);
    assert_eq!(sum.run(2), (10, 2));
}

#[rstest]
fn state_round_trip_preserves_behaviour() {
    let state: State<i32, String> = State::new(|n: i32| (format!("saw {n}"), n * 3));
    let indexed: IxState<i32, i32, String> = IxState::from(state.clone());
    let back: State<i32, String> = State::from(indexed.clone());

    for input in [-2, 0, 7] {
        assert_eq!(back.run(input), state.run(input));
        assert_eq!(indexed.run(input), state.run(input));
    }
}

#[rstest]
fn display_is_opaque() {
    assert_eq!(IxState::<i32, i32, i32>::get().to_string(), "<IxState>");
}
