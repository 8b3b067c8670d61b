//! Criterion benchmarks for the point samplers.
//!
//! Compares the three variants in single and double precision across
//! sample counts.

use clustering_core::types::Precision;
use clustering_random::samplers::{RandomVariates, Sampler};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark each sampler variant in both precisions.
fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");
    let samplers = [
        ("in_sphere", Sampler::in_sphere(50.0, 500.0).expect("valid sampler")),
        ("in_box", Sampler::in_box(500.0).expect("valid sampler")),
        ("on_sphere", Sampler::on_sphere()),
    ];

    for (name, sampler) in &samplers {
        for size in [1_000, 100_000] {
            for precision in [Precision::Single, Precision::Double] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}_{precision}"), size),
                    &size,
                    |b, &size| {
                        b.iter(|| {
                            sampler
                                .sample_with_precision(black_box(size), black_box(42), precision)
                                .unwrap()
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_samplers);
criterion_main!(benches);
