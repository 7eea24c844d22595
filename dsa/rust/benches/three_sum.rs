use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dsa_exercises::problems::three_sum;

fn input(len: usize) -> Vec<i32> {
    // Deterministic spread of small values so there are plenty of duplicates and triplets.
    (0..len as i64)
        .map(|i| ((i * 7919) % 201 - 100) as i32)
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("three_sum");

    for len in [64, 512, 2048] {
        let nums = input(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &nums, |b, nums| {
            b.iter(|| three_sum(black_box(nums.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
