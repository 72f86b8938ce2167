use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// A pre-scored walkable path segment. Read-only input to the corridor
/// router; all three scores are 0.0–1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeCorridor {
    pub id: String,
    pub zone_id: String,
    pub geometry: Vec<Point>,
    pub vitality_score: f64,
    pub lighting_score: f64,
    pub foot_traffic_score: f64,
}

/// A routed safe walking path: waypoint chain plus distance/time estimates
/// and any advisory warnings. Warnings are data, never exceptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeReturnPath {
    pub waypoints: Vec<Point>,
    pub total_distance_m: f64,
    pub estimated_minutes: f64,
    pub vitality_safe: bool,
    pub warnings: Vec<String>,
}
