//! Curated surface for rule modules.
//!
//! Rule modules should import from here (or `prelude`) rather than reaching into
//! submodules, so the kernel can be reorganized without touching them.

// Geometry
pub use crate::geom::{
    bearing_degrees, bounding_box, distance_to_segment, normalize_degrees, point_in_polygon,
    polar_to_cartesian, BoundingBox, GeomCfg, Point, Polygon,
};
// Partition and lookups
pub use crate::zones::{
    find_zone_for_point, generate_32_zones, zones_by_direction_code, zones_by_sector,
    Circle32Zones, CircleZone, Sector, COMPASS_POINTS,
};
// Sampling
pub use crate::sampler::{
    sample_absolute_area, sample_all_zones, sample_ring_profile, sample_zone_coverage,
    theoretical_area, AreaSample, CancelToken, CoverageSample, RadialSampling, RingBounds,
    SampleToken, SamplerCfg,
};
// Scoring
pub use crate::scoring::{
    classify_deviation, mean, standard_deviation, weighted_composite, BalanceScore, Band,
    WeightedScore,
};
// Pipeline
pub use crate::analysis::{analyze_plan, AnalysisCfg, CenterMode, PlanAnalysis, ZoneCoverage};
pub use crate::error::KernelError;
