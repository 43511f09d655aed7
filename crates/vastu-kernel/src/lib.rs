//! Directional zone kernel for floor-plan analysis.
//!
//! Purpose
//! - Partition a plan into 32 fixed compass zones around its center, estimate how much of
//!   each zone (or ring-sector) the building boundary covers, and turn coverage into
//!   deviation bands and composite scores.
//! - Rule modules own their ideal/weight tables and call into this crate; nothing here
//!   produces display text.
//!
//! Conventions
//! - Angles are degrees clockwise from North, normalized into `[0, 360)`.
//! - Drawing space has `+y` pointing down, so North is `-y`.
//! - All randomness is passed in explicitly (see `sampler::SampleToken`).

pub mod analysis;
pub mod api;
mod cfg;
pub mod error;
pub mod geom;
pub mod sampler;
pub mod scoring;
pub mod zones;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::KernelError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze_plan, AnalysisCfg, CenterMode, PlanAnalysis, ZoneCoverage};
    pub use crate::error::KernelError;
    pub use crate::geom::{
        bounding_box, distance_to_segment, point_in_polygon, polar_to_cartesian, BoundingBox,
        Point, Polygon,
    };
    pub use crate::sampler::{
        sample_absolute_area, sample_all_zones, sample_zone_coverage, AreaSample, CancelToken,
        CoverageSample, RadialSampling, RingBounds, SampleToken, SamplerCfg,
    };
    pub use crate::scoring::{
        classify_deviation, mean, standard_deviation, weighted_composite, BalanceScore, Band,
        WeightedScore,
    };
    pub use crate::zones::{
        find_zone_for_point, generate_32_zones, zones_by_direction_code, zones_by_sector,
        Circle32Zones, CircleZone, Sector,
    };
}
