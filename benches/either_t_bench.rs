//! Benchmark for the outcome transformer over several outer contexts.
//!
//! Measures `chain`, `alt` and `bracket` over `Option`, `Identity` and `IO`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::effect::{IO, IOKind, either_t};
use kindred::typeclass::{Identity, IdentityKind, OptionKind};
use std::hint::black_box;

// =============================================================================
// chain Benchmarks
// =============================================================================

fn chain_option(depth: u32) -> Option<Result<u32, String>> {
    (0..depth).fold(either_t::right(OptionKind, 0), |acc, _| {
        either_t::chain(OptionKind, acc, |n: u32| either_t::right(OptionKind, n + 1))
    })
}

fn chain_io(depth: u32) -> IO<Result<u32, String>> {
    (0..depth).fold(either_t::right(IOKind, 0), |acc, _| {
        either_t::chain(IOKind, acc, |n: u32| either_t::right(IOKind, n + 1))
    })
}

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_t_chain");

    for depth in [1u32, 10, 100] {
        group.bench_with_input(BenchmarkId::new("option", depth), &depth, |bencher, &depth| {
            bencher.iter(|| black_box(chain_option(black_box(depth))));
        });

        group.bench_with_input(BenchmarkId::new("io", depth), &depth, |bencher, &depth| {
            bencher.iter(|| black_box(chain_io(black_box(depth)).run_unsafe()));
        });
    }

    group.bench_function("short_circuit_100", |bencher| {
        bencher.iter(|| {
            let failed: Option<Result<u32, String>> = either_t::left(OptionKind, "stop".to_string());
            let result = (0..100).fold(failed, |acc, _| {
                either_t::chain(OptionKind, acc, |n: u32| either_t::right(OptionKind, n + 1))
            });
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Fallback Benchmarks
// =============================================================================

fn benchmark_fallbacks(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_t_fallbacks");

    group.bench_function("alt_success", |bencher| {
        bencher.iter(|| {
            let first: Identity<Result<u32, String>> = Identity(Ok(black_box(1)));
            black_box(either_t::alt(IdentityKind, first, || Identity(Ok(2))))
        });
    });

    group.bench_function("alt_failure", |bencher| {
        bencher.iter(|| {
            let first: Identity<Result<u32, String>> = Identity(Err(black_box("no".to_string())));
            black_box(either_t::alt(IdentityKind, first, || Identity(Ok(2))))
        });
    });

    group.bench_function("alt_validation_vec", |bencher| {
        bencher.iter(|| {
            let first: Identity<Result<u32, Vec<u32>>> = Identity(Err(vec![black_box(1)]));
            black_box(either_t::alt_validation(IdentityKind, first, || Identity(Err(vec![2]))))
        });
    });

    group.finish();
}

// =============================================================================
// bracket Benchmarks
// =============================================================================

fn benchmark_bracket(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_t_bracket");

    group.bench_function("identity_success", |bencher| {
        bencher.iter(|| {
            let result: Identity<Result<u32, Vec<String>>> = either_t::bracket(
                IdentityKind,
                Identity(Ok::<u32, String>(black_box(7))),
                |_| Identity(Ok(())),
                |resource: u32| Identity(Ok::<u32, String>(resource * 2)),
            );
            black_box(result)
        });
    });

    group.bench_function("io_both_fail", |bencher| {
        bencher.iter(|| {
            let result: IO<Result<u32, Vec<String>>> = either_t::bracket(
                IOKind,
                either_t::right::<_, String, u32>(IOKind, black_box(7)),
                |_| either_t::left(IOKind, "release".to_string()),
                |_| either_t::left::<_, String, u32>(IOKind, "body".to_string()),
            );
            black_box(result.run_unsafe())
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_chain, benchmark_fallbacks, benchmark_bracket);

criterion_main!(benches);
