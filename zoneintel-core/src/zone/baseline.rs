use serde::{Deserialize, Serialize};

/// Baseline statistics for a zone, supplied by the geodata collaborator
/// at pack-generation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineStats {
    /// Points of interest per zone (raw count).
    pub poi_density: f64,
    /// Street-lighting coverage, 0.0–1.0.
    pub lighting_density: f64,
    /// Pedestrian infrastructure quality, 0–100.
    pub pedestrian_score: f64,
    /// Transit accessibility, 0–100.
    pub transit_access: f64,
    /// Whether the zone has a pharmacy or convenience store.
    pub has_pharmacy_or_convenience: bool,
}

impl Default for BaselineStats {
    fn default() -> Self {
        Self {
            poi_density: 0.0,
            lighting_density: 0.0,
            pedestrian_score: 0.0,
            transit_access: 0.0,
            has_pharmacy_or_convenience: false,
        }
    }
}
