//! 4-factor additive anchor scoring formula.
//!
//! ```text
//! score = weights.priority     × isPriority
//!       + weights.proximity    × (1 − distance/maxRadius)
//!       + weights.connectivity × connectivityScore
//!       + weights.tagRichness  × min(tags, capacity)/capacity
//! ```

use zoneintel_core::candidate::Candidate;
use zoneintel_core::config::AnchorConfig;
use zoneintel_core::traits::ConnectivityProvider;

use crate::factors;

/// Weighted score for one candidate at a known centroid distance.
pub fn compute(
    candidate: &Candidate,
    distance_m: f64,
    cfg: &AnchorConfig,
    connectivity: &dyn ConnectivityProvider,
) -> f64 {
    compute_breakdown(candidate, distance_m, cfg, connectivity).total
}

/// Per-factor contributions for debugging/observability.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub priority: f64,
    pub proximity: f64,
    pub connectivity: f64,
    pub tag_richness: f64,
    pub total: f64,
}

/// Compute the score with each factor reported individually.
pub fn compute_breakdown(
    candidate: &Candidate,
    distance_m: f64,
    cfg: &AnchorConfig,
    connectivity: &dyn ConnectivityProvider,
) -> ScoreBreakdown {
    let w = &cfg.weights;

    let priority = w.priority * factors::priority::calculate(candidate, cfg);
    let proximity = w.proximity * factors::proximity::calculate(distance_m, cfg.max_radius());
    let conn = w.connectivity * connectivity.connectivity_score(candidate);
    let richness =
        w.tag_richness * factors::richness::calculate(candidate, cfg.tag_richness_capacity);

    ScoreBreakdown {
        priority,
        proximity,
        connectivity: conn,
        tag_richness: richness,
        total: priority + proximity + conn + richness,
    }
}
