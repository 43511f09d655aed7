use super::types::{BoundingBox, Point};
use crate::error::KernelError;

/// Bounding box of a point set. A single point yields a zero-size box.
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox, KernelError> {
    let first = points
        .first()
        .ok_or_else(|| KernelError::boundary("bounding box needs at least one point"))?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    Ok(BoundingBox::from_extents(min_x, max_x, min_y, max_y))
}

/// Even-odd ray casting with a half-open crossing rule.
///
/// An edge `(p_i, p_j)` toggles membership when exactly one endpoint lies strictly below
/// the point (`(y_i > y) != (y_j > y)`) and the crossing lies strictly to the right
/// (`x < x_cross`). Consequences:
/// - a vertex sitting on the ray is counted for exactly one of its two edges;
/// - horizontal edges never toggle;
/// - points exactly on the boundary are inside on left/top edges and outside on
///   right/bottom edges (for an axis-aligned box in `+y`-down drawing space: inside on
///   `x = min_x` and `y = min_y`, outside on `x = max_x` and `y = max_y`).
///
/// Fewer than 3 vertices never contain anything.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Euclidean distance from `point` to the closed segment `[seg_start, seg_end]`.
pub fn distance_to_segment(point: Point, seg_start: Point, seg_end: Point) -> f64 {
    let d = seg_end - seg_start;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return (point - seg_start).norm();
    }
    let t = ((point - seg_start).dot(&d) / len2).clamp(0.0, 1.0);
    (point - (seg_start + d * t)).norm()
}

/// Point at `distance` from `center` along compass bearing `angle_deg`.
///
/// Bearings run clockwise from North with `+y` down: `x = cx + d·sin θ`, `y = cy − d·cos θ`.
/// `distance_percent` is a percentage (0..=100) of `radius`.
#[inline]
pub fn polar_to_cartesian(
    center: Point,
    radius: f64,
    angle_deg: f64,
    distance_percent: f64,
) -> Point {
    let d = radius * distance_percent / 100.0;
    let th = angle_deg.to_radians();
    Point::new(center.x + d * th.sin(), center.y - d * th.cos())
}

/// Compass bearing of `point` seen from `center`, in `[0, 360)`. `None` at the center.
pub fn bearing_degrees(center: Point, point: Point) -> Option<f64> {
    let v = point - center;
    if v.x == 0.0 && v.y == 0.0 {
        return None;
    }
    Some(normalize_degrees(v.x.atan2(-v.y).to_degrees()))
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}
