//! Fixed kernel constants (internal).
//!
//! Policy
//! - These are not tunables. Zone geometry is fixed by the 32-point compass and the
//!   weight tolerance is shared by every composite score so rule modules cannot drift.

/// Number of angular zones in a partition.
pub(crate) const ZONE_COUNT: usize = 32;
/// Angular width of every zone, in degrees.
pub(crate) const ZONE_WIDTH_DEG: f64 = 360.0 / ZONE_COUNT as f64;
/// Zones per main compass sector.
pub(crate) const ZONES_PER_SECTOR: usize = 4;
/// Allowed slack on `Σ weights == 1`.
pub(crate) const WEIGHT_SUM_EPS: f64 = 1e-6;
/// Samples drawn between two cancellation checks.
pub(crate) const CANCEL_CHECK_EVERY: usize = 256;
