//! Criterion benchmarks for the pole search and its distance oracle.
//! Focus sizes: n in {8, 32, 128, 512} vertices.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polylabel

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polylabel::pole::polylabel;
use polylabel::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use polylabel::ring::signed_distance;

fn star_ring(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.3,
        radial_jitter: 0.25,
        base_radius: 100.0,
        random_phase: true,
    };
    draw_ring_radial(cfg, ReplayToken { seed, index: 0 })
}

fn bench_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("pole");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("signed_distance", n), &n, |b, &n| {
            let ring = star_ring(n, 43);
            b.iter(|| signed_distance(&ring, Vector2::new(10.0, -25.0)))
        });

        group.bench_with_input(BenchmarkId::new("polylabel_p1", n), &n, |b, &n| {
            b.iter_batched(
                || star_ring(n, 44),
                |ring| polylabel(&ring, 1.0),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("polylabel_p01", n), &n, |b, &n| {
            b.iter_batched(
                || star_ring(n, 45),
                |ring| polylabel(&ring, 0.1),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pole);
criterion_main!(benches);
