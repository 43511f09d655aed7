//! Criterion benchmarks for coverage sampling.
//! Focus sizes: samples per zone in {64, 512, 4096}; boundary vertex counts in {4, 64}.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use vastu_kernel::api::{
    generate_32_zones, sample_all_zones, sample_zone_coverage, Point, Polygon, SamplerCfg,
};

/// Star-shaped boundary with `n` vertices around (50, 50).
fn jagged_boundary(n: usize) -> Polygon {
    let pts = (0..n)
        .map(|k| {
            let th = k as f64 / n as f64 * std::f64::consts::TAU;
            let r = if k % 2 == 0 { 50.0 } else { 38.0 };
            Point::new(50.0 + r * th.cos(), 50.0 + r * th.sin())
        })
        .collect();
    Polygon::new(pts).unwrap()
}

fn bench_sampler(c: &mut Criterion) {
    let zones = generate_32_zones(50.0, 50.0, 45.0, 0.0);
    let mut group = c.benchmark_group("sampler");
    for &verts in &[4usize, 64] {
        let boundary = jagged_boundary(verts);
        for &n in &[64usize, 512, 4096] {
            let cfg = SamplerCfg::with_samples(n);
            group.bench_with_input(
                BenchmarkId::new(format!("single_zone_v{verts}"), n),
                &n,
                |b, _| {
                    let mut rng = StdRng::seed_from_u64(43);
                    b.iter(|| {
                        sample_zone_coverage(
                            &zones.zones[3],
                            &boundary,
                            zones.center,
                            zones.radius,
                            None,
                            cfg,
                            &mut rng,
                        )
                        .unwrap()
                    })
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("all_zones_v{verts}"), n),
                &n,
                |b, _| b.iter(|| sample_all_zones(&zones, &boundary, None, cfg, 44, None).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sampler);
criterion_main!(benches);
