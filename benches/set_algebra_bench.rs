//! Set algebra benchmark.
//!
//! Compares the n-ary operations against folding the standard library's
//! binary operations, and measures the transforms over growing sets.
//!
//! Operands overlap the receiver by half so every operation does real work.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use set_algebra::prelude::*;
use std::collections::HashSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

fn generate_set(start: i32, size: i32) -> HashSet<i32> {
    (start..start + size).collect()
}

fn generate_operands(size: i32) -> Vec<HashSet<i32>> {
    (1..=3).map(|index| generate_set(index * size / 2, size)).collect()
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_union");

    for size in SIZES {
        let set = generate_set(0, size);
        let operands = generate_operands(size);

        group.bench_with_input(BenchmarkId::new("unite", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.unite(black_box(&operands)).unwrap_or_default()));
        });

        group.bench_with_input(BenchmarkId::new("std_fold", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(operands.iter().fold(set.clone(), |accumulator, operand| {
                    accumulator.union(operand).copied().collect()
                }))
            });
        });
    }

    group.finish();
}

fn benchmark_intersect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_intersect");

    for size in SIZES {
        let set = generate_set(0, size);
        let operands = generate_operands(size);

        group.bench_with_input(BenchmarkId::new("intersect", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.intersect(black_box(&operands)).unwrap_or_default()));
        });

        group.bench_with_input(BenchmarkId::new("std_fold", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(operands.iter().fold(set.clone(), |accumulator, operand| {
                    accumulator.intersection(operand).copied().collect()
                }))
            });
        });
    }

    group.finish();
}

fn benchmark_xor_and_subtract(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_xor_subtract");

    for size in SIZES {
        let set = generate_set(0, size);
        let operands = generate_operands(size);

        group.bench_with_input(BenchmarkId::new("xor", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.xor(black_box(&operands)).unwrap_or_default()));
        });

        group.bench_with_input(BenchmarkId::new("subtract", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.subtract(black_box(&operands))));
        });
    }

    group.finish();
}

fn benchmark_transforms(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_transforms");

    for size in SIZES {
        let set = generate_set(0, size);

        group.bench_with_input(BenchmarkId::new("map", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.map(|value, _, _| value / 2)));
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.filter(|value, _, _| value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("every", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.every(|value, _, _| *value >= 0)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_union,
    benchmark_intersect,
    benchmark_xor_and_subtract,
    benchmark_transforms
);
criterion_main!(benches);
