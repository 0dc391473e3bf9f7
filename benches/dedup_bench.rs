use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dedupe::{DeDup, DedupMethod};
use std::hint::black_box;

fn generate_values(count: usize, distinct: i64) -> Vec<i32> {
    // Pseudo-random spread with plenty of repeats
    (0..count as i64)
        .map(|i| ((i * 7919 + 13) % distinct) as i32)
        .collect()
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup/methods");

    for count in [100usize, 1_000, 10_000].iter() {
        let dedup = DeDup::with_values(generate_values(*count, (*count as i64 / 4).max(1)));

        for method in DedupMethod::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), count),
                count,
                |b, _| b.iter(|| black_box(dedup.apply(method))),
            );
        }
    }

    group.finish();
}

fn bench_distinct_stream_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup/distinct_stream");
    group.sample_size(20);

    let values = generate_values(1_000_000, 50_000);
    let sequential = DeDup::with_values(values.clone()).with_parallel_threshold(usize::MAX);
    let parallel = DeDup::with_values(values).with_parallel_threshold(0);

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.dedup_with_distinct_stream()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.dedup_with_distinct_stream()))
    });

    group.finish();
}

criterion_group!(benches, bench_methods, bench_distinct_stream_parallel);
criterion_main!(benches);
