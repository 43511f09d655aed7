use super::compass::{Sector, COMPASS_POINTS};
use crate::cfg::{ZONES_PER_SECTOR, ZONE_COUNT, ZONE_WIDTH_DEG};
use crate::geom::{normalize_degrees, Point};

/// One 11.25° compass zone.
///
/// Invariants
/// - `start_angle`, `end_angle`, `center_angle` are in `[0, 360)`.
/// - `end_angle < start_angle` only for the zone straddling North (0°/360°).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleZone {
    /// 1..=32, clockwise from the North zone.
    pub zone_number: u8,
    pub direction: &'static str,
    pub direction_code: &'static str,
    pub sector: Sector,
    pub start_angle: f64,
    pub end_angle: f64,
    pub center_angle: f64,
}

impl CircleZone {
    /// Half-open membership `[start, end)` for a bearing in `[0, 360)`.
    #[inline]
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.start_angle < self.end_angle {
            angle >= self.start_angle && angle < self.end_angle
        } else {
            angle >= self.start_angle || angle < self.end_angle
        }
    }

    /// Angular width in degrees (11.25 up to rounding).
    #[inline]
    pub fn width(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(360.0)
    }

    /// 0-based position in the partition.
    #[inline]
    pub fn index(&self) -> usize {
        self.zone_number as usize - 1
    }
}

/// A full 32-zone partition around `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle32Zones {
    pub center: Point,
    /// Carried for downstream sampling; the partition itself never tests polygons.
    pub radius: f64,
    pub north_rotation: f64,
    pub zones: [CircleZone; ZONE_COUNT],
}

impl Circle32Zones {
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CircleZone> {
        self.zones.iter()
    }

    /// Zone by its 1-based number.
    pub fn zone(&self, zone_number: u8) -> Option<&CircleZone> {
        (zone_number as usize)
            .checked_sub(1)
            .and_then(|i| self.zones.get(i))
    }
}

impl<'a> IntoIterator for &'a Circle32Zones {
    type Item = &'a CircleZone;
    type IntoIter = std::slice::Iter<'a, CircleZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

/// Build the 32-zone partition. Pure and deterministic (bit-for-bit).
///
/// The rotation is wrapped into `[0, 360)` first, so arbitrarily large rotations keep full
/// precision. Boundaries all come from `rot + (k mod 32)·11.25`, so the end of zone `k`
/// equals the start of zone `k+1` exactly, including 32 → 1.
///
/// A non-finite rotation yields NaN angles; `analyze_plan` rejects it up front.
pub fn generate_32_zones(
    center_x: f64,
    center_y: f64,
    radius: f64,
    north_rotation_deg: f64,
) -> Circle32Zones {
    let rot = normalize_degrees(north_rotation_deg);
    let boundary = |k: usize| normalize_degrees(rot + (k % ZONE_COUNT) as f64 * ZONE_WIDTH_DEG);
    let zones = std::array::from_fn(|i| {
        let (code, name) = COMPASS_POINTS[i];
        CircleZone {
            zone_number: (i + 1) as u8,
            direction: name,
            direction_code: code,
            sector: Sector::from_index(i / ZONES_PER_SECTOR),
            start_angle: boundary(i),
            end_angle: boundary(i + 1),
            center_angle: normalize_degrees(rot + (i as f64 + 0.5) * ZONE_WIDTH_DEG),
        }
    });
    tracing::debug!(
        center_x,
        center_y,
        radius,
        north_rotation_deg,
        "generated 32-zone partition"
    );
    Circle32Zones {
        center: Point::new(center_x, center_y),
        radius,
        north_rotation: north_rotation_deg,
        zones,
    }
}
