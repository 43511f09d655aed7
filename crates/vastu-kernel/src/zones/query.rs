use super::compass::Sector;
use super::partition::{Circle32Zones, CircleZone};
use crate::geom::{bearing_degrees, Point};

/// Zone whose `[start, end)` range holds the bearing from the partition center to
/// `point`. `None` when `point` is the center itself.
pub fn find_zone_for_point<'a>(point: Point, zones: &'a Circle32Zones) -> Option<&'a CircleZone> {
    let angle = bearing_degrees(zones.center, point)?;
    zones.iter().find(|z| z.contains_angle(angle))
}

/// Zones owned by a main sector, given by full name or code. Unknown names give an
/// empty result.
pub fn zones_by_sector<'a>(sector_name: &str, zones: &'a Circle32Zones) -> Vec<&'a CircleZone> {
    match Sector::from_name(sector_name) {
        Some(sector) => zones.iter().filter(|z| z.sector == sector).collect(),
        None => Vec::new(),
    }
}

/// Zones with the given compass code (exact match).
pub fn zones_by_direction_code<'a>(code: &str, zones: &'a Circle32Zones) -> Vec<&'a CircleZone> {
    zones.iter().filter(|z| z.direction_code == code).collect()
}
