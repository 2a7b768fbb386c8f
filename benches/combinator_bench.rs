//! Benchmark for container combinators: Maybe, Result, sequence, do_!.
//!
//! Measures the performance of monars' combinator chains.

use criterion::{Criterion, criterion_group, criterion_main};
use monars::container::{Maybe, Result};
use monars::do_;
use monars::sequence::sequence;
use monars::typeclass::Monad;
use std::hint::black_box;

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_bind_chain");

    // Single bind
    group.bench_function("bind_1", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1)).bind(|x| Maybe::some(x + 1));
            black_box(result)
        });
    });

    // Chain of 5 binds
    group.bench_function("bind_5", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1))
                .bind(|x| Maybe::some(x + 1))
                .bind(|x| Maybe::some(x * 2))
                .bind(|x| Maybe::some(x + 3))
                .bind(|x| Maybe::some(x * 4))
                .bind(|x| Maybe::some(x + 5));
            black_box(result)
        });
    });

    // Chain of 10 binds
    group.bench_function("bind_10", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1))
                .bind(|x| Maybe::some(x + 1))
                .bind(|x| Maybe::some(x * 2))
                .bind(|x| Maybe::some(x + 3))
                .bind(|x| Maybe::some(x * 4))
                .bind(|x| Maybe::some(x + 5))
                .bind(|x| Maybe::some(x - 1))
                .bind(|x| Maybe::some(x / 2))
                .bind(|x| Maybe::some(x + 7))
                .bind(|x| Maybe::some(x * 8))
                .bind(|x| Maybe::some(x - 9));
            black_box(result)
        });
    });

    // Chain of 5 binds starting from the absent state
    group.bench_function("bind_5_from_none", |bencher| {
        bencher.iter(|| {
            let result = Maybe::<i32>::none()
                .bind(|x| Maybe::some(x + 1))
                .bind(|x| Maybe::some(x * 2))
                .bind(|x| Maybe::some(x + 3))
                .bind(|x| Maybe::some(x * 4))
                .bind(|x| Maybe::some(x + 5));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_maybe_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_map_chain");

    // Single map
    group.bench_function("map_1", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1)).map(|x| x + 1);
            black_box(result)
        });
    });

    // Chain of 5 maps
    group.bench_function("map_5", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1))
                .map(|x| x + 1)
                .map(|x| x * 2)
                .map(|x| x + 3)
                .map(|x| x * 4)
                .map(|x| x + 5);
            black_box(result)
        });
    });

    // Chain of 10 maps
    group.bench_function("map_10", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(1))
                .map(|x| x + 1)
                .map(|x| x * 2)
                .map(|x| x + 3)
                .map(|x| x * 4)
                .map(|x| x + 5)
                .map(|x| x - 1)
                .map(|x| x / 2)
                .map(|x| x + 7)
                .map(|x| x * 8)
                .map(|x| x - 9);
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Result Benchmarks
// =============================================================================

fn benchmark_result_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_bind_chain");

    // Chain of 5 binds on the success path
    group.bench_function("bind_5_success", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = Result::success(black_box(1))
                .bind(|x| Result::success(x + 1))
                .bind(|x| Result::success(x * 2))
                .bind(|x| Result::success(x + 3))
                .bind(|x| Result::success(x * 4))
                .bind(|x| Result::success(x + 5));
            black_box(result)
        });
    });

    // Chain of 5 binds where the first value is already a failure
    group.bench_function("bind_5_first_fails", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = Result::failure(black_box("broken"))
                .bind(|x: i32| Result::success(x + 1))
                .bind(|x| Result::success(x * 2))
                .bind(|x| Result::success(x + 3))
                .bind(|x| Result::success(x * 4))
                .bind(|x| Result::success(x + 5));
            black_box(result)
        });
    });

    group.bench_function("or_else_recovers", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> =
                Result::<i32, &str>::failure(black_box("broken")).or_else(|_| Result::success(7));
            black_box(result)
        });
    });

    group.bench_function("map_failure_on_success", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, String> =
                Result::<i32, &str>::success(black_box(7)).map_failure(|message| message.to_string());
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn benchmark_conversions(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("container_conversions");

    group.bench_function("maybe_to_result", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = Maybe::some(black_box(42)).to_result("missing");
            black_box(result)
        });
    });

    group.bench_function("result_to_maybe", |bencher| {
        bencher.iter(|| {
            let maybe = Result::<i32, &str>::success(black_box(42)).to_maybe();
            black_box(maybe)
        });
    });

    group.bench_function("option_roundtrip", |bencher| {
        bencher.iter(|| {
            let maybe = Maybe::from(black_box(Some(42)));
            let option: Option<i32> = Option::from(maybe);
            black_box(option)
        });
    });

    group.finish();
}

// =============================================================================
// Sequence Benchmarks
// =============================================================================

fn benchmark_sequence_fold(criterion: &mut Criterion) {
    fn step_add_one(n: u64) -> Result<u64, &'static str> {
        Result::success(n + 1)
    }

    fn step_fail(_: u64) -> Result<u64, &'static str> {
        Result::failure("stop")
    }

    let mut group = criterion.benchmark_group("sequence_fold");

    group.bench_function("steps_10", |bencher| {
        bencher.iter(|| {
            let steps = vec![step_add_one as fn(u64) -> Result<u64, &'static str>; 10];
            black_box(sequence(black_box(0), steps))
        });
    });

    group.bench_function("steps_100", |bencher| {
        bencher.iter(|| {
            let steps = vec![step_add_one as fn(u64) -> Result<u64, &'static str>; 100];
            black_box(sequence(black_box(0), steps))
        });
    });

    group.bench_function("steps_1000", |bencher| {
        bencher.iter(|| {
            let steps = vec![step_add_one as fn(u64) -> Result<u64, &'static str>; 1000];
            black_box(sequence(black_box(0), steps))
        });
    });

    // The fold still walks every element, but bind skips the closures
    group.bench_function("steps_100_fail_first", |bencher| {
        bencher.iter(|| {
            let mut steps = vec![step_add_one as fn(u64) -> Result<u64, &'static str>; 100];
            steps[0] = step_fail;
            black_box(sequence(black_box(0), steps))
        });
    });

    group.finish();
}

// =============================================================================
// Do-notation Benchmarks
// =============================================================================

fn benchmark_do_notation_overhead(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("do_notation_overhead");

    group.bench_function("do_macro_chain_3", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = do_! {
                x <= Result::success(black_box(1));
                y <= Result::success(x + 1);
                Result::success(y * 2)
            };
            black_box(result)
        });
    });

    group.bench_function("manual_bind_chain_3", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = Result::success(black_box(1))
                .bind(|x| Result::success(x + 1))
                .bind(|y| Result::success(y * 2));
            black_box(result)
        });
    });

    group.bench_function("do_macro_chain_5", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = do_! {
                a <= Result::success(black_box(1));
                b <= Result::success(a + 1);
                c <= Result::success(b * 2);
                d <= Result::success(c + 3);
                Result::success(d * 4)
            };
            black_box(result)
        });
    });

    group.bench_function("manual_bind_chain_5", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, &str> = Result::success(black_box(1))
                .bind(|a| Result::success(a + 1))
                .bind(|b| Result::success(b * 2))
                .bind(|c| Result::success(c + 3))
                .bind(|d| Result::success(d * 4));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Generic Dispatch Benchmarks
// =============================================================================

fn benchmark_generic_dispatch(criterion: &mut Criterion) {
    fn double_inside<M: Monad<Inner = i32>>(value: M) -> M::WithType<i32> {
        value.flat_map(|n| M::pure(n * 2))
    }

    let mut group = criterion.benchmark_group("generic_dispatch");

    group.bench_function("monad_maybe", |bencher| {
        bencher.iter(|| {
            let result = double_inside(Maybe::some(black_box(21)));
            black_box(result)
        });
    });

    group.bench_function("monad_result", |bencher| {
        bencher.iter(|| {
            let result = double_inside(Result::<i32, &str>::success(black_box(21)));
            black_box(result)
        });
    });

    group.bench_function("inherent_maybe", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(21)).bind(|n| Maybe::some(n * 2));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_maybe_bind_chain,
    benchmark_maybe_map_chain,
    benchmark_result_bind_chain,
    benchmark_conversions,
    benchmark_sequence_fold,
    benchmark_do_notation_overhead,
    benchmark_generic_dispatch
);

criterion_main!(benches);
