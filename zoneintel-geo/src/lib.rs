//! # zoneintel-geo
//!
//! Centroid, great-circle distance, bearing, and polyline math. Pure
//! functions, no side effects; the only failure mode is NaN on degenerate
//! input, which callers must pre-validate.

pub mod centroid;
pub mod distance;
pub mod polyline;

pub use centroid::{bounding_box, centroid};
pub use distance::{haversine_km, haversine_meters, initial_bearing_deg};
pub use polyline::{midpoint, path_length_meters};
