//! Criterion benchmarks for bounded sampling.
//!
//! Measures per-sample cost of each leaf variate, the effect of rejection
//! bounds, and mixture selection across nesting depths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use variate_core::rng::SeededSource;
use variate_models::{Distribution, MixtureDistribution};

/// Builds a chain of binary mixtures `depth` levels deep.
fn nested_mixture(depth: usize) -> Distribution {
    let mut node = Distribution::uniform(0.0, 1.0).unwrap();
    for _ in 0..depth {
        node = Distribution::from(
            MixtureDistribution::from_pairs([
                (0.5, node),
                (0.5, Distribution::exponential(1.0).unwrap()),
            ])
            .unwrap(),
        );
    }
    node
}

/// Benchmark raw leaf sampling without bounds.
fn bench_leaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_sampling");

    let leaves = [
        ("uniform", Distribution::uniform(3.0, 8.0).unwrap()),
        ("discrete", Distribution::discrete(vec![0.0, 1.0, 2.0, 5.0]).unwrap()),
        ("normal", Distribution::normal(0.0, 1.0).unwrap()),
        ("exponential", Distribution::exponential(0.5).unwrap()),
    ];

    for (name, leaf) in &leaves {
        group.bench_function(*name, |b| {
            let mut source = SeededSource::from_seed(42);
            b.iter(|| leaf.sample(black_box(&mut source)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rejection cost as the accepted window narrows.
fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_normal");

    for half_width in [3.0, 1.0, 0.25] {
        let normal = Distribution::normal(0.0, 1.0)
            .unwrap()
            .with_bounds(Some(-half_width), Some(half_width))
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(half_width),
            &normal,
            |b, normal| {
                let mut source = SeededSource::from_seed(42);
                b.iter(|| normal.sample(black_box(&mut source)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark mixture selection across nesting depths.
fn bench_mixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_mixture");

    for depth in [1, 4, 16] {
        let tree = nested_mixture(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            let mut source = SeededSource::from_seed(42);
            b.iter(|| tree.sample(black_box(&mut source)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_leaves, bench_bounds, bench_mixtures);
criterion_main!(benches);
