//! Serializable views of kernel results for the JSON report.

use serde::Serialize;
use vastu_kernel::api::{BalanceScore, BoundingBox, CircleZone, PlanAnalysis};

#[derive(Serialize)]
pub struct BBoxView {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl From<&BoundingBox> for BBoxView {
    fn from(b: &BoundingBox) -> Self {
        Self {
            min_x: b.min_x,
            max_x: b.max_x,
            min_y: b.min_y,
            max_y: b.max_y,
            width: b.width,
            height: b.height,
            center_x: b.center_x,
            center_y: b.center_y,
        }
    }
}

#[derive(Serialize)]
pub struct ZoneView {
    pub zone_number: u8,
    pub direction: &'static str,
    pub direction_code: &'static str,
    pub sector: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    pub center_angle: f64,
}

impl From<&CircleZone> for ZoneView {
    fn from(z: &CircleZone) -> Self {
        Self {
            zone_number: z.zone_number,
            direction: z.direction,
            direction_code: z.direction_code,
            sector: z.sector.code(),
            start_angle: z.start_angle,
            end_angle: z.end_angle,
            center_angle: z.center_angle,
        }
    }
}

#[derive(Serialize)]
pub struct CoverageView {
    #[serde(flatten)]
    pub zone: ZoneView,
    pub coverage: f64,
    pub samples: usize,
    pub theoretical_area: f64,
    pub estimated_area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<BalanceView>,
}

#[derive(Serialize)]
pub struct BalanceView {
    pub normalized_value: f64,
    pub deviation: f64,
    pub band: &'static str,
}

impl From<&BalanceScore> for BalanceView {
    fn from(s: &BalanceScore) -> Self {
        Self {
            normalized_value: s.normalized_value,
            deviation: s.deviation,
            band: s.band.label(),
        }
    }
}

#[derive(Serialize)]
pub struct SectorView {
    pub sector: &'static str,
    pub mean_coverage: f64,
}

#[derive(Serialize)]
pub struct AnalysisReport {
    pub bbox: BBoxView,
    pub center: [f64; 2],
    pub radius: f64,
    pub north_rotation: f64,
    pub zones: Vec<CoverageView>,
    pub sectors: Vec<SectorView>,
    pub coverage_spread: f64,
    pub estimated_area: f64,
}

impl AnalysisReport {
    /// `balance`, when present, holds one score per zone in zone order.
    pub fn build(res: &PlanAnalysis, balance: Option<&[BalanceScore]>) -> Self {
        let zones = res
            .coverages
            .iter()
            .enumerate()
            .map(|(i, c)| CoverageView {
                zone: ZoneView::from(&c.zone),
                coverage: c.coverage,
                samples: c.area.coverage.samples,
                theoretical_area: c.area.theoretical_area,
                estimated_area: c.area.estimated_area,
                balance: balance.and_then(|b| b.get(i)).map(BalanceView::from),
            })
            .collect();
        let sectors = res
            .sector_coverage()
            .iter()
            .map(|(s, m)| SectorView {
                sector: s.code(),
                mean_coverage: *m,
            })
            .collect();
        Self {
            bbox: BBoxView::from(&res.bbox),
            center: [res.zones.center.x, res.zones.center.y],
            radius: res.zones.radius,
            north_rotation: res.zones.north_rotation,
            zones,
            sectors,
            coverage_spread: res.coverage_spread(),
            estimated_area: res.estimated_area(),
        }
    }
}
