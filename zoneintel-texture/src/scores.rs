//! Walkability and safety scores derived from baseline signals.

use zoneintel_core::zone::BaselineStats;

/// `0.5×pedestrian + 30×lighting + 0.2×min(poi, 100)`, clamped to 0–100.
pub fn walkability(baseline: &BaselineStats) -> f64 {
    let score = 0.5 * baseline.pedestrian_score
        + 30.0 * baseline.lighting_density
        + 0.2 * baseline.poi_density.min(100.0);
    score.clamp(0.0, 100.0)
}

/// `40×lighting + 0.3×transit + pedestrian bonus + pharmacy bonus`,
/// clamped to 0–100.
pub fn safety(baseline: &BaselineStats) -> f64 {
    let pedestrian_bonus = if baseline.pedestrian_score > 50.0 {
        20.0
    } else {
        10.0
    };
    let pharmacy_bonus = if baseline.has_pharmacy_or_convenience {
        10.0
    } else {
        0.0
    };
    let score = 40.0 * baseline.lighting_density
        + 0.3 * baseline.transit_access
        + pedestrian_bonus
        + pharmacy_bonus;
    score.clamp(0.0, 100.0)
}
