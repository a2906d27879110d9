// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.
#![expect(missing_docs, reason = "benchmark code")]
#![expect(clippy::unwrap_used, reason = "benchmark code")]

use alloc_tracker::{Allocator, Session};
use criterion::{Criterion, criterion_group, criterion_main};
use holdoff::{Config, DecorrelatedJitter, EqualJitter, Exponential, FullJitter, RandomSource, Strategy, exp_cap};

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

fn entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    let session = Session::new();

    let config = Config::new(100, 10_000).random_source(RandomSource::fast());

    // The growth primitive alone
    let operation = session.operation("exp-cap");
    group.bench_function("exp-cap", |b| {
        let mut attempt = 0;
        b.iter(|| {
            let _span = operation.measure_thread();
            attempt = (attempt + 1) % 32;
            _ = exp_cap(100, 10_000, attempt);
        });
    });

    // Full jitter
    let operation = session.operation("full-jitter");
    group.bench_function("full-jitter", |b| {
        let mut strategy = FullJitter::new(config.clone()).unwrap();
        b.iter(|| {
            let _span = operation.measure_thread();
            _ = strategy.next(5);
        });
    });

    // Equal jitter
    let operation = session.operation("equal-jitter");
    group.bench_function("equal-jitter", |b| {
        let mut strategy = EqualJitter::new(config.clone()).unwrap();
        b.iter(|| {
            let _span = operation.measure_thread();
            _ = strategy.next(5);
        });
    });

    // Exponential without jitter
    let operation = session.operation("exponential");
    group.bench_function("exponential", |b| {
        let mut strategy = Exponential::new(config.clone()).unwrap();
        b.iter(|| {
            let _span = operation.measure_thread();
            _ = strategy.next(5);
        });
    });

    // Decorrelated jitter, state evolving across iterations
    let operation = session.operation("decorrelated-jitter");
    group.bench_function("decorrelated-jitter", |b| {
        let mut strategy = DecorrelatedJitter::new(config.clone()).unwrap();
        b.iter(|| {
            let _span = operation.measure_thread();
            _ = strategy.next(1);
        });
    });

    group.finish();
    session.print_to_stdout();
}

criterion_group!(benches, entry);
criterion_main!(benches);
