//! Planar geometry primitives for floor-plan boundaries.
//!
//! Purpose
//! - One shared home for bounding boxes, ray-casting membership, segment distance and
//!   compass-polar conversion, so every zone and sampling routine agrees on them.
//!
//! Conventions
//! - `Point` is `nalgebra::Vector2<f64>` in drawing units, `+y` pointing down.
//! - `point_in_polygon` uses the half-open even-odd rule documented on the function;
//!   every caller in the crate goes through it.

mod types;
mod util;

pub use types::{BoundingBox, GeomCfg, Point, Polygon};
pub use util::{
    bearing_degrees, bounding_box, distance_to_segment, normalize_degrees, point_in_polygon,
    polar_to_cartesian,
};
