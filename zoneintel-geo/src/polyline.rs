//! Polyline helpers for corridor geometry.

use zoneintel_core::geo::Point;

use crate::distance::haversine_meters;

/// Middle vertex of a polyline, or `None` when empty.
///
/// Vertex-based rather than length-based: corridor geometries are short
/// and roughly evenly sampled.
pub fn midpoint(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    Some(points[points.len() / 2])
}

/// Sum of consecutive haversine legs in meters.
pub fn path_length_meters(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_meters(pair[0], pair[1]))
        .sum()
}
