//! 32-zone compass partition of a circle and lookups over it.
//!
//! Model
//! - Zone `k` (1-based) spans `[(k-1)·11.25 + rotation, k·11.25 + rotation)` degrees,
//!   clockwise from North, wrapped into `[0, 360)`. Zone 1 is always the North zone.
//! - Direction codes and sectors are assigned by index, before rotation enters, so
//!   "North" refers to true North whatever the drawing orientation.
//! - Sectors group consecutive zones in fours: zones 1–4 belong to N, 5–8 to NE, …

mod compass;
mod partition;
mod query;

pub use compass::{Sector, COMPASS_POINTS};
pub use partition::{generate_32_zones, Circle32Zones, CircleZone};
pub use query::{find_zone_for_point, zones_by_direction_code, zones_by_sector};
