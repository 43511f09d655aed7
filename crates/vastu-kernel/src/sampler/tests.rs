use super::*;
use crate::error::KernelError;
use crate::geom::{Point, Polygon};
use crate::zones::generate_32_zones;
use rand::{rngs::StdRng, SeedableRng};

fn square(min: f64, max: f64) -> Polygon {
    Polygon::from_xy(&[(min, min), (max, min), (max, max), (min, max)]).unwrap()
}

/// 100 square with the south-east corner cut off diagonally.
fn clipped_corner() -> Polygon {
    Polygon::from_xy(&[
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 60.0),
        (40.0, 100.0),
        (0.0, 100.0),
    ])
    .unwrap()
}

fn cfg(n: usize, radial: RadialSampling) -> SamplerCfg {
    SamplerCfg {
        sample_count: n,
        radial,
    }
}

#[test]
fn north_zone_of_square_is_fully_covered() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    let s = sample_zone_coverage(
        &zones.zones[0],
        &boundary,
        zones.center,
        zones.radius,
        None,
        cfg(5000, RadialSampling::AreaUniform),
        &mut rng,
    )
    .unwrap();
    assert_eq!(s.samples, 5000);
    assert!(s.percentage > 97.0, "coverage {}", s.percentage);
}

#[test]
fn every_zone_inside_convex_boundary_converges_to_full() {
    let boundary = square(-10.0, 10.0);
    let zones = generate_32_zones(0.0, 0.0, 8.0, 17.0);
    let mut rng = StdRng::seed_from_u64(1);
    for zone in &zones {
        let s = sample_zone_coverage(
            zone,
            &boundary,
            zones.center,
            zones.radius,
            None,
            SamplerCfg::with_samples(2000),
            &mut rng,
        )
        .unwrap();
        assert!((s.percentage - 100.0).abs() <= 3.0, "zone {}: {}", zone.zone_number, s.percentage);
    }
}

#[test]
fn zone_outside_boundary_converges_to_zero() {
    let boundary = square(200.0, 300.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let mut rng = StdRng::seed_from_u64(9);
    for mode in [RadialSampling::AreaUniform, RadialSampling::CenterWeighted] {
        let s = sample_zone_coverage(
            &zones.zones[12],
            &boundary,
            zones.center,
            zones.radius,
            None,
            cfg(2000, mode),
            &mut rng,
        )
        .unwrap();
        assert!(s.percentage <= 3.0);
    }
}

#[test]
fn radial_modes_differ_on_core_heavy_boundary() {
    // Inner square of half-side 25 around the center: only the core of each zone is covered.
    // Area-uniform → ≈ 25.3 %, linear radius → ≈ 50.3 % for the North zone.
    let boundary = square(25.0, 75.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let zone = &zones.zones[0];
    let mut rng = StdRng::seed_from_u64(2024);
    let area = sample_zone_coverage(
        zone,
        &boundary,
        zones.center,
        zones.radius,
        None,
        cfg(5000, RadialSampling::AreaUniform),
        &mut rng,
    )
    .unwrap();
    let linear = sample_zone_coverage(
        zone,
        &boundary,
        zones.center,
        zones.radius,
        None,
        cfg(5000, RadialSampling::CenterWeighted),
        &mut rng,
    )
    .unwrap();
    assert!((area.percentage - 25.3).abs() < 3.0, "area-uniform {}", area.percentage);
    assert!((linear.percentage - 50.3).abs() < 3.0, "center-weighted {}", linear.percentage);
}

/// Analytic coverage of the annular sector `[inner·R, outer·R] × [a0, a1)` by the
/// half-plane `y > cy − 50` (the top edge of the 100-square), for bearings where the
/// side edges are out of reach.
fn analytic_top_edge_coverage(r: f64, inner: f64, outer: f64, a0: f64, a1: f64) -> f64 {
    let (ri, ro) = (inner * r, outer * r);
    let steps = 20_000;
    let mut acc = 0.0;
    for k in 0..steps {
        let th = (a0 + (a1 - a0) * (k as f64 + 0.5) / steps as f64).to_radians();
        let limit = (50.0 / th.cos()).clamp(ri, ro);
        acc += (limit * limit - ri * ri) / (ro * ro - ri * ri);
    }
    acc / steps as f64 * 100.0
}

#[test]
fn outer_ring_matches_circle_square_overlap() {
    // Radius 60 overshoots the 100-square along the axes but not toward the corners.
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 60.0, 0.0);
    let ring = RingBounds::new(0.9, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    let mut run = |zone_idx: usize| {
        sample_zone_coverage(
            &zones.zones[zone_idx],
            &boundary,
            zones.center,
            zones.radius,
            Some(ring),
            cfg(5000, RadialSampling::AreaUniform),
            &mut rng,
        )
        .unwrap()
        .percentage
    };
    // zone 1 (0°..11.25°): every ring point is beyond the top edge
    assert_eq!(run(0), 0.0);
    // zones 4 and 5 straddle the NE diagonal and stay inside
    assert_eq!(run(3), 100.0);
    assert_eq!(run(4), 100.0);
    // zone 3 (22.5°..33.75°) is partially covered
    let expected = analytic_top_edge_coverage(60.0, 0.9, 1.0, 22.5, 33.75);
    let sampled = run(2);
    assert!(expected > 10.0 && expected < 90.0);
    assert!((sampled - expected).abs() < 3.0, "sampled {sampled}, analytic {expected}");
}

#[test]
fn inscribed_circle_outer_ring_is_covered_everywhere() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let ring = RingBounds::new(0.9, 1.0).unwrap();
    let cfg = SamplerCfg::with_samples(500);
    let samples = sample_all_zones(&zones, &boundary, Some(ring), cfg, 5, None).unwrap();
    for s in samples {
        assert!(s.coverage.percentage > 99.0);
    }
}

#[test]
fn absolute_area_scales_theoretical_sector() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let zone = &zones.zones[0];
    let mut rng = StdRng::seed_from_u64(3);
    let c = zones.center;
    let cfg = SamplerCfg::with_samples(1000);
    let full = sample_absolute_area(zone, &boundary, c, 50.0, None, cfg, &mut rng).unwrap();
    let sector = 0.5 * 50.0 * 50.0 * 11.25f64.to_radians();
    assert!((full.theoretical_area - sector).abs() < 1e-9);
    assert!((full.estimated_area - full.coverage.fraction() * sector).abs() < 1e-9);
    assert!((full.estimated_area - sector).abs() / sector < 0.01);

    let ring = RingBounds::new(0.5, 1.0).unwrap();
    let cfg = SamplerCfg::with_samples(10);
    let annular =
        sample_absolute_area(zone, &boundary, c, 50.0, Some(ring), cfg, &mut rng).unwrap();
    assert!((annular.theoretical_area - sector * 0.75).abs() < 1e-9);
}

#[test]
fn rejects_bad_inputs() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let zone = &zones.zones[0];
    let mut rng = StdRng::seed_from_u64(0);
    let c = Point::new(50.0, 50.0);
    let empty = SamplerCfg::with_samples(0);
    assert_eq!(
        sample_zone_coverage(zone, &boundary, c, 50.0, None, empty, &mut rng),
        Err(KernelError::InvalidSampleCount)
    );
    assert!(matches!(
        sample_zone_coverage(zone, &boundary, c, 0.0, None, SamplerCfg::default(), &mut rng),
        Err(KernelError::DegenerateGeometry { .. })
    ));
    let inverted = Some(RingBounds {
        inner: 0.8,
        outer: 0.2,
    });
    assert!(matches!(
        sample_zone_coverage(zone, &boundary, c, 50.0, inverted, SamplerCfg::default(), &mut rng),
        Err(KernelError::InvalidRing { .. })
    ));
    assert!(RingBounds::new(0.0, 1.5).is_err());
    assert!(RingBounds::new(-0.1, 0.5).is_err());
    assert!(RingBounds::new(0.5, 0.5).is_err());
}

#[test]
fn seeded_runs_are_reproducible() {
    let boundary = clipped_corner();
    let zones = generate_32_zones(50.0, 50.0, 50.0, 8.0);
    let cfg = SamplerCfg::with_samples(300);
    let a = sample_all_zones(&zones, &boundary, None, cfg, 11, None).unwrap();
    let b = sample_all_zones(&zones, &boundary, None, cfg, 11, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parallel_fan_out_matches_sequential_tokens() {
    let boundary = clipped_corner();
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let cfg = SamplerCfg::with_samples(200);
    let par = sample_all_zones(&zones, &boundary, None, cfg, 99, None).unwrap();
    assert_eq!(par.len(), 32);
    for (zone, got) in zones.iter().zip(&par) {
        let mut rng = SampleToken::new(99, zone.zone_number as u64).rng();
        let seq =
            sample_absolute_area(zone, &boundary, zones.center, zones.radius, None, cfg, &mut rng)
                .unwrap();
        assert_eq!(&seq, got);
    }
}

#[test]
fn ring_profile_shapes_and_ordering() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 60.0, 0.0);
    let rings = [RingBounds::new(0.0, 0.5).unwrap(), RingBounds::new(0.9, 1.0).unwrap()];
    let cfg = SamplerCfg::with_samples(400);
    let profile = sample_ring_profile(&zones, &boundary, &rings, cfg, 4, None).unwrap();
    assert_eq!(profile.len(), 2);
    assert!(profile.iter().all(|row| row.len() == 32));
    // the core ring is always inside; the outer ring misses the North axis
    assert!(profile[0].iter().all(|s| s.coverage.percentage == 100.0));
    assert_eq!(profile[1][0].coverage.percentage, 0.0);

    let bad = [RingBounds {
        inner: 0.4,
        outer: 0.1,
    }];
    assert!(sample_ring_profile(&zones, &boundary, &bad, SamplerCfg::default(), 4, None).is_err());
}

#[test]
fn cancelled_runs_stop_with_error() {
    let boundary = square(0.0, 100.0);
    let zones = generate_32_zones(50.0, 50.0, 50.0, 0.0);
    let cancel = CancelToken::new();
    cancel.cancel();
    let cfg = SamplerCfg::with_samples(100_000);
    assert_eq!(
        sample_all_zones(&zones, &boundary, None, cfg, 1, Some(&cancel)),
        Err(KernelError::Cancelled)
    );
}
