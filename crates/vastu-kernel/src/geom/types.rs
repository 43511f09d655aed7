//! Boundary value types: `Point`, `Polygon`, `BoundingBox`, plus tolerances.

use nalgebra::Vector2;

use super::util::{bounding_box, point_in_polygon};
use crate::error::KernelError;

/// A 2D coordinate in drawing units.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Below this absolute signed area a polygon has no usable centroid.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_area: 1e-12 }
    }
}

/// Closed building boundary: at least three finite vertices, last joined to first.
///
/// The kernel never mutates a boundary; it is built once per analysis and borrowed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, KernelError> {
        if vertices.len() < 3 {
            return Err(KernelError::boundary(format!(
                "closed polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(i) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(KernelError::boundary(format!("vertex {i} is not finite")));
        }
        Ok(Self { vertices })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(pairs: &[(f64, f64)]) -> Result<Self, KernelError> {
        Self::new(pairs.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: construction guarantees three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        // Non-empty by construction.
        bounding_box(&self.vertices)
            .unwrap_or_else(|_| BoundingBox::from_extents(0.0, 0.0, 0.0, 0.0))
    }

    /// Shoelace signed area in drawing coordinates.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid; `None` when the polygon encloses (numerically) no area.
    ///
    /// Valid for either winding order; self-intersecting input yields the centroid of the
    /// signed shoelace decomposition.
    pub fn area_centroid(&self, cfg: GeomCfg) -> Option<Point> {
        let n = self.vertices.len();
        let mut a = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            let cross = p.x * q.y - q.x * p.y;
            a += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        a *= 0.5;
        if a.abs() < cfg.eps_area {
            return None;
        }
        Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
    }
}

/// Axis-aligned extent of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl BoundingBox {
    pub fn from_extents(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Radius of the largest circle centered in the box: `min(width, height) / 2`.
    #[inline]
    pub fn inscribed_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Reject boxes that would produce a zero partition radius.
    pub fn ensure_non_degenerate(&self) -> Result<(), KernelError> {
        if self.is_degenerate() {
            return Err(KernelError::DegenerateGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
