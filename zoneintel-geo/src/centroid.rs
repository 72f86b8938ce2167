//! Polygon centroid and bounding box.

use zoneintel_core::geo::{BoundingBox, Point, Polygon};

/// Arithmetic mean of the polygon vertices.
///
/// Sufficient precision for city-block-sized zones; not a true spherical
/// centroid. Returns NaN coordinates for an empty polygon — callers guard
/// degenerate input.
pub fn centroid(polygon: &Polygon) -> Point {
    let n = polygon.len() as f64;
    let (lat_sum, lon_sum) = polygon
        .vertices()
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
    Point::new(lat_sum / n, lon_sum / n)
}

/// Axis-aligned bounding box of the polygon vertices, or `None` when the
/// polygon is empty.
pub fn bounding_box(polygon: &Polygon) -> Option<BoundingBox> {
    let first = polygon.vertices().first()?;
    let mut bbox = BoundingBox {
        min_lat: first.lat,
        min_lon: first.lon,
        max_lat: first.lat,
        max_lon: first.lon,
    };
    for p in polygon.vertices() {
        bbox.min_lat = bbox.min_lat.min(p.lat);
        bbox.min_lon = bbox.min_lon.min(p.lon);
        bbox.max_lat = bbox.max_lat.max(p.lat);
        bbox.max_lon = bbox.max_lon.max(p.lon);
    }
    Some(bbox)
}
