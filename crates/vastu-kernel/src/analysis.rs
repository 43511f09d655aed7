//! Whole-plan analysis: boundary → partition → per-zone coverage → balance.
//!
//! This is the calling contract rule modules build on. They bring their own ideal and
//! weight tables; the pipeline only returns numbers, zones and bands.

use crate::cfg::ZONE_COUNT;
use crate::error::KernelError;
use crate::geom::{BoundingBox, GeomCfg, Polygon};
use crate::sampler::{sample_all_zones, AreaSample, CancelToken, RingBounds, SamplerCfg};
use crate::scoring::{mean, standard_deviation, BalanceScore};
use crate::zones::{generate_32_zones, Circle32Zones, CircleZone, Sector};

/// Where the partition is centered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CenterMode {
    /// Center of the bounding box.
    #[default]
    BoundingBox,
    /// Area centroid of the boundary; falls back to the bounding-box center when the
    /// polygon encloses no area.
    AreaCentroid,
}

impl CenterMode {
    pub fn label(self) -> &'static str {
        match self {
            CenterMode::BoundingBox => "bounding-box",
            CenterMode::AreaCentroid => "area-centroid",
        }
    }
}

/// Options for `analyze_plan`.
#[derive(Clone, Debug, Default)]
pub struct AnalysisCfg {
    /// Degrees the drawing's North is rotated clockwise from the page's up direction.
    pub north_rotation: f64,
    pub sampler: SamplerCfg,
    /// Restrict sampling to an annulus; `None` samples the full disc.
    pub ring: Option<RingBounds>,
    pub center: CenterMode,
    /// Base seed; zone `k` samples from `SampleToken { seed, index: k }`.
    pub seed: u64,
    pub geom: GeomCfg,
    pub cancel: Option<CancelToken>,
}

/// Coverage result for one zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneCoverage {
    pub zone: CircleZone,
    /// Percentage in `[0, 100]`.
    pub coverage: f64,
    pub area: AreaSample,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanAnalysis {
    pub bbox: BoundingBox,
    pub zones: Circle32Zones,
    /// One entry per zone, in zone order.
    pub coverages: Vec<ZoneCoverage>,
}

/// Run the full coverage analysis of `boundary`.
///
/// Non-finite rotations and degenerate bounding boxes are rejected before any partitioning
/// happens.
pub fn analyze_plan(boundary: &Polygon, cfg: &AnalysisCfg) -> Result<PlanAnalysis, KernelError> {
    if !cfg.north_rotation.is_finite() {
        return Err(KernelError::NonFinite {
            what: "north rotation",
            value: cfg.north_rotation,
        });
    }
    let bbox = boundary.bounding_box();
    bbox.ensure_non_degenerate()?;
    let center = match cfg.center {
        CenterMode::BoundingBox => bbox.center(),
        CenterMode::AreaCentroid => boundary
            .area_centroid(cfg.geom)
            .unwrap_or_else(|| bbox.center()),
    };
    if let Some(bad) = [center.x, center.y].into_iter().find(|v| !v.is_finite()) {
        return Err(KernelError::NonFinite {
            what: "partition center",
            value: bad,
        });
    }
    let radius = bbox.inscribed_radius();
    tracing::debug!(
        vertices = boundary.len(),
        center_x = center.x,
        center_y = center.y,
        radius,
        "analyzing plan"
    );

    let zones = generate_32_zones(center.x, center.y, radius, cfg.north_rotation);
    let samples = sample_all_zones(
        &zones,
        boundary,
        cfg.ring,
        cfg.sampler,
        cfg.seed,
        cfg.cancel.as_ref(),
    )?;
    let coverages = zones
        .iter()
        .zip(samples)
        .map(|(zone, area)| ZoneCoverage {
            zone: *zone,
            coverage: area.coverage.percentage,
            area,
        })
        .collect();
    Ok(PlanAnalysis {
        bbox,
        zones,
        coverages,
    })
}

impl PlanAnalysis {
    /// Coverage percentages in zone order.
    pub fn coverage_values(&self) -> Vec<f64> {
        self.coverages.iter().map(|c| c.coverage).collect()
    }

    /// Mean coverage of each main sector, North first.
    pub fn sector_coverage(&self) -> [(Sector, f64); 8] {
        Sector::ALL.map(|sector| {
            let values: Vec<f64> = self
                .coverages
                .iter()
                .filter(|c| c.zone.sector == sector)
                .map(|c| c.coverage)
                .collect();
            (sector, mean(&values))
        })
    }

    /// Population standard deviation of the 32 zone coverages.
    pub fn coverage_spread(&self) -> f64 {
        standard_deviation(&self.coverage_values())
    }

    /// Estimated built area summed over all zones.
    pub fn estimated_area(&self) -> f64 {
        self.coverages.iter().map(|c| c.area.estimated_area).sum()
    }

    /// Judge each zone against a table of 32 ideal percentages (zone order).
    pub fn balance(&self, ideals: &[f64]) -> Result<Vec<BalanceScore>, KernelError> {
        if ideals.len() != ZONE_COUNT {
            return Err(KernelError::IdealTableLength {
                expected: ZONE_COUNT,
                got: ideals.len(),
            });
        }
        Ok(self
            .coverages
            .iter()
            .zip(ideals)
            .map(|(c, &ideal)| BalanceScore::evaluate(c.coverage, ideal))
            .collect())
    }
}
