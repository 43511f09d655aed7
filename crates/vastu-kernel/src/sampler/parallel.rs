//! Whole-partition sampling fanned out over rayon.
//!
//! Zones only read the shared boundary, so they run without locking. Each task seeds its
//! own RNG from a `SampleToken`; the output is identical to a sequential loop.

use rayon::prelude::*;

use super::{estimate_area, AreaSample, CancelToken, RingBounds, SampleToken, SamplerCfg};
use crate::cfg::ZONE_COUNT;
use crate::error::KernelError;
use crate::geom::Polygon;
use crate::zones::Circle32Zones;

/// Sample all 32 zones of `zones`, in zone order.
///
/// Zone `k` draws from `SampleToken { seed, index: k }`.
pub fn sample_all_zones(
    zones: &Circle32Zones,
    boundary: &Polygon,
    ring: Option<RingBounds>,
    cfg: SamplerCfg,
    seed: u64,
    cancel: Option<&CancelToken>,
) -> Result<Vec<AreaSample>, KernelError> {
    let ring = ring.unwrap_or_default();
    tracing::debug!(
        samples = cfg.sample_count,
        radial = ?cfg.radial,
        inner = ring.inner,
        outer = ring.outer,
        seed,
        "sampling all zones"
    );
    zones
        .zones
        .as_slice()
        .par_iter()
        .map(|zone| {
            let mut rng = SampleToken::new(seed, zone.zone_number as u64).rng();
            estimate_area(
                zone,
                boundary,
                zones.center,
                zones.radius,
                ring,
                cfg,
                &mut rng,
                cancel,
            )
        })
        .collect()
}

/// Sample every `(ring, zone)` pair. Outer index follows `rings`, inner follows zones.
///
/// Ring `r`, zone `k` draws from `SampleToken { seed, index: r·32 + k }`.
pub fn sample_ring_profile(
    zones: &Circle32Zones,
    boundary: &Polygon,
    rings: &[RingBounds],
    cfg: SamplerCfg,
    seed: u64,
    cancel: Option<&CancelToken>,
) -> Result<Vec<Vec<AreaSample>>, KernelError> {
    for ring in rings {
        ring.validate()?;
    }
    tracing::debug!(
        rings = rings.len(),
        samples = cfg.sample_count,
        seed,
        "sampling ring profile"
    );
    rings
        .par_iter()
        .enumerate()
        .map(|(r, ring)| {
            zones
                .zones
                .as_slice()
                .par_iter()
                .map(|zone| {
                    let index = (r * ZONE_COUNT) as u64 + zone.zone_number as u64;
                    let mut rng = SampleToken::new(seed, index).rng();
                    estimate_area(
                        zone,
                        boundary,
                        zones.center,
                        zones.radius,
                        *ring,
                        cfg,
                        &mut rng,
                        cancel,
                    )
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
