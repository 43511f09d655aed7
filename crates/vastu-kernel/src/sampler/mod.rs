//! Monte Carlo coverage of compass zones and ring-sectors by a boundary polygon.
//!
//! Purpose
//! - Estimate which fraction of a zone's (or annular sector's) theoretical area lies
//!   inside the building boundary. This is a statistical estimate, not an exact area:
//!   the standard error shrinks as `O(1/√n)`.
//!
//! Model
//! - Each trial draws a bearing uniformly in `[start, end)` of the zone and a radius
//!   according to `RadialSampling`, converts it with `polar_to_cartesian` and tests it
//!   with `point_in_polygon`.
//! - The random source is always an explicit argument. Whole-plan runs derive one
//!   independent `StdRng` per zone from a `SampleToken`, so results do not depend on
//!   thread scheduling.
//!
//! Radial modes
//! - `AreaUniform`: `r = R·√(u·(o² − i²) + i²)`, uniform by area.
//! - `CenterWeighted`: `r = R·(i + u·(o − i))`, linear in radius, biased toward the
//!   center. Kept as its own mode for rule modules that weight the core on purpose.

mod parallel;
mod seed;

pub use parallel::{sample_all_zones, sample_ring_profile};
pub use seed::{CancelToken, SampleToken};

use rand::Rng;

use crate::cfg::CANCEL_CHECK_EVERY;
use crate::error::KernelError;
use crate::geom::{polar_to_cartesian, Point, Polygon};
use crate::zones::CircleZone;

/// How trial radii are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialSampling {
    #[default]
    AreaUniform,
    CenterWeighted,
}

impl RadialSampling {
    /// Stable kebab-case identifier, for reports and sidecars.
    pub fn label(self) -> &'static str {
        match self {
            RadialSampling::AreaUniform => "area-uniform",
            RadialSampling::CenterWeighted => "center-weighted",
        }
    }
}

/// Annulus given as fractions of the partition radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBounds {
    pub inner: f64,
    pub outer: f64,
}

impl RingBounds {
    /// The whole disc.
    pub const FULL: RingBounds = RingBounds {
        inner: 0.0,
        outer: 1.0,
    };

    pub fn new(inner: f64, outer: f64) -> Result<Self, KernelError> {
        let ring = Self { inner, outer };
        ring.validate()?;
        Ok(ring)
    }

    /// Require `0 <= inner < outer <= 1`.
    pub fn validate(&self) -> Result<(), KernelError> {
        let ok = self.inner.is_finite()
            && self.outer.is_finite()
            && self.inner >= 0.0
            && self.inner < self.outer
            && self.outer <= 1.0;
        if ok {
            Ok(())
        } else {
            Err(KernelError::InvalidRing {
                inner: self.inner,
                outer: self.outer,
            })
        }
    }

    /// Fraction of the full disc's area covered by this annulus.
    #[inline]
    pub fn area_fraction(&self) -> f64 {
        self.outer * self.outer - self.inner * self.inner
    }
}

impl Default for RingBounds {
    fn default() -> Self {
        Self::FULL
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerCfg {
    /// Trials per zone. Must be > 0.
    pub sample_count: usize,
    pub radial: RadialSampling,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            sample_count: 64,
            radial: RadialSampling::AreaUniform,
        }
    }
}

impl SamplerCfg {
    pub fn with_samples(sample_count: usize) -> Self {
        Self {
            sample_count,
            ..Self::default()
        }
    }
}

/// Result of a coverage estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageSample {
    /// `inside / samples · 100`, in `[0, 100]`.
    pub percentage: f64,
    pub inside: usize,
    pub samples: usize,
}

impl CoverageSample {
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Coverage scaled by the zone's theoretical area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaSample {
    pub coverage: CoverageSample,
    /// `½·R²·Δθ·(o² − i²)` with `Δθ` in radians.
    pub theoretical_area: f64,
    pub estimated_area: f64,
}

/// Geometric area of a zone's sector (or annular sector) of radius `radius`.
pub fn theoretical_area(zone: &CircleZone, radius: f64, ring: RingBounds) -> f64 {
    0.5 * radius * radius * zone.width().to_radians() * ring.area_fraction()
}

/// Percentage of the zone (optionally restricted to `ring`) covered by `boundary`.
pub fn sample_zone_coverage<R: Rng + ?Sized>(
    zone: &CircleZone,
    boundary: &Polygon,
    center: Point,
    radius: f64,
    ring: Option<RingBounds>,
    cfg: SamplerCfg,
    rng: &mut R,
) -> Result<CoverageSample, KernelError> {
    estimate_coverage(
        zone,
        boundary,
        center,
        radius,
        ring.unwrap_or_default(),
        cfg,
        rng,
        None,
    )
}

/// Absolute covered area: estimated coverage fraction times the theoretical area.
///
/// With `RadialSampling::CenterWeighted` the fraction is biased toward the core, and so is
/// the resulting area.
pub fn sample_absolute_area<R: Rng + ?Sized>(
    zone: &CircleZone,
    boundary: &Polygon,
    center: Point,
    radius: f64,
    ring: Option<RingBounds>,
    cfg: SamplerCfg,
    rng: &mut R,
) -> Result<AreaSample, KernelError> {
    estimate_area(
        zone,
        boundary,
        center,
        radius,
        ring.unwrap_or_default(),
        cfg,
        rng,
        None,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate_area<R: Rng + ?Sized>(
    zone: &CircleZone,
    boundary: &Polygon,
    center: Point,
    radius: f64,
    ring: RingBounds,
    cfg: SamplerCfg,
    rng: &mut R,
    cancel: Option<&CancelToken>,
) -> Result<AreaSample, KernelError> {
    let coverage = estimate_coverage(zone, boundary, center, radius, ring, cfg, rng, cancel)?;
    let theoretical_area = theoretical_area(zone, radius, ring);
    Ok(AreaSample {
        coverage,
        theoretical_area,
        estimated_area: coverage.fraction() * theoretical_area,
    })
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate_coverage<R: Rng + ?Sized>(
    zone: &CircleZone,
    boundary: &Polygon,
    center: Point,
    radius: f64,
    ring: RingBounds,
    cfg: SamplerCfg,
    rng: &mut R,
    cancel: Option<&CancelToken>,
) -> Result<CoverageSample, KernelError> {
    if cfg.sample_count == 0 {
        return Err(KernelError::InvalidSampleCount);
    }
    if !(radius.is_finite() && radius > 0.0) {
        let diameter = 2.0 * radius;
        return Err(KernelError::DegenerateGeometry {
            width: diameter,
            height: diameter,
        });
    }
    ring.validate()?;

    let width = zone.width();
    let (i2, o2) = (ring.inner * ring.inner, ring.outer * ring.outer);
    let mut inside = 0usize;
    for trial in 0..cfg.sample_count {
        if trial % CANCEL_CHECK_EVERY == 0 && cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(KernelError::Cancelled);
        }
        let angle = zone.start_angle + rng.gen::<f64>() * width;
        let u = rng.gen::<f64>();
        let frac = match cfg.radial {
            RadialSampling::AreaUniform => (u * (o2 - i2) + i2).sqrt(),
            RadialSampling::CenterWeighted => ring.inner + u * (ring.outer - ring.inner),
        };
        let p = polar_to_cartesian(center, radius, angle, frac * 100.0);
        if boundary.contains(p) {
            inside += 1;
        }
    }
    let sample = CoverageSample {
        percentage: inside as f64 / cfg.sample_count as f64 * 100.0,
        inside,
        samples: cfg.sample_count,
    };
    tracing::trace!(
        zone = zone.zone_number,
        inside,
        samples = cfg.sample_count,
        "zone coverage sampled"
    );
    Ok(sample)
}

#[cfg(test)]
mod tests;
