//! Geographic value types shared by every component.
//!
//! The math that operates on these lives in `zoneintel-geo`; this module
//! only defines the immutable shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS-84 coordinate in decimal degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True if either coordinate is NaN. Degenerate points must be guarded
    /// by callers before any distance math.
    pub fn is_degenerate(&self) -> bool {
        self.lat.is_nan() || self.lon.is_nan()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A zone boundary as an ordered ring of vertices.
///
/// City-block scale; no holes, no winding-order requirement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon(pub Vec<Point>);

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self(vertices)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self(vertices)
    }
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn contains(&self, p: Point) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }
}
