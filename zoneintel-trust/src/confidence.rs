//! Baseline confidence initialization.

use zoneintel_core::constants::INITIAL_CONFIDENCE_CAP;
use zoneintel_core::zone::{BaselineStats, Confidence};

/// Initial confidence from baseline signals:
/// `30 + min(30, poiDensity) + 20×lighting + 0.2×transit`, capped at 75.
///
/// The cap sits below the HIGH threshold: a zone earns HIGH only through
/// verification, never from baseline signals alone.
pub fn initial_confidence(baseline: &BaselineStats) -> Confidence {
    let score = 30.0
        + baseline.poi_density.min(30.0)
        + 20.0 * baseline.lighting_density
        + 0.2 * baseline.transit_access;
    Confidence::new(score.clamp(0.0, INITIAL_CONFIDENCE_CAP))
}
