//! Error type shared by the geometry, sampling and scoring layers.
//!
//! Every variant is an input-validation failure reported synchronously; nothing in the
//! kernel fails transiently, so there is no retry path. "Not found" lookups are not
//! errors and return `Option`/empty collections instead.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum KernelError {
    /// Boundary cannot serve as a closed polygon (too few or non-finite vertices).
    InvalidBoundary { reason: String },
    /// Bounding box has zero (or non-finite) width or height, so the partition radius is 0.
    DegenerateGeometry { width: f64, height: f64 },
    /// A scalar input (rotation, partition center) is NaN or infinite.
    NonFinite { what: &'static str, value: f64 },
    /// Composite weights are malformed or do not sum to 1.
    InvalidWeight { reason: String },
    /// Ring fractions violate `0 <= inner < outer <= 1`.
    InvalidRing { inner: f64, outer: f64 },
    /// A sampler was asked to draw zero points.
    InvalidSampleCount,
    /// A per-zone ideal table does not have one entry per zone.
    IdealTableLength { expected: usize, got: usize },
    /// Sampling was cancelled through a `CancelToken`.
    Cancelled,
}

impl KernelError {
    pub(crate) fn boundary(reason: impl Into<String>) -> Self {
        Self::InvalidBoundary {
            reason: reason.into(),
        }
    }

    pub(crate) fn weight(reason: impl Into<String>) -> Self {
        Self::InvalidWeight {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoundary { reason } => write!(f, "invalid boundary: {reason}"),
            Self::DegenerateGeometry { width, height } => write!(
                f,
                "degenerate geometry: {width} x {height} bounding box gives radius 0"
            ),
            Self::NonFinite { what, value } => write!(f, "{what} must be finite, got {value}"),
            Self::InvalidWeight { reason } => write!(f, "invalid weights: {reason}"),
            Self::InvalidRing { inner, outer } => write!(
                f,
                "invalid ring: need 0 <= inner < outer <= 1, got {inner}..{outer}"
            ),
            Self::InvalidSampleCount => write!(f, "sample count must be > 0"),
            Self::IdealTableLength { expected, got } => {
                write!(f, "ideal table has {got} entries, expected {expected}")
            }
            Self::Cancelled => write!(f, "sampling cancelled"),
        }
    }
}

impl std::error::Error for KernelError {}
