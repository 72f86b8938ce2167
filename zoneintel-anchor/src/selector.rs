use std::cmp::Ordering;

use tracing::debug;

use zoneintel_core::candidate::Candidate;
use zoneintel_core::config::AnchorConfig;
use zoneintel_core::geo::Polygon;
use zoneintel_core::traits::{ConnectivityProvider, NoConnectivity};
use zoneintel_core::zone::Anchor;
use zoneintel_geo::{centroid, haversine_meters};

use crate::factors::priority;
use crate::fallback;
use crate::formula;

static NO_CONNECTIVITY: NoConnectivity = NoConnectivity;

/// Scores and picks one anchor per zone. Pure per call; safe to invoke
/// concurrently.
pub struct AnchorSelector<'a> {
    config: AnchorConfig,
    connectivity: &'a dyn ConnectivityProvider,
}

impl AnchorSelector<'static> {
    /// Create a selector with no connectivity signal (the default).
    pub fn new(config: AnchorConfig) -> Self {
        Self {
            config,
            connectivity: &NO_CONNECTIVITY,
        }
    }
}

impl<'a> AnchorSelector<'a> {
    /// Attach a connectivity provider for road/transit-graph density.
    pub fn with_connectivity<'b>(
        self,
        connectivity: &'b dyn ConnectivityProvider,
    ) -> AnchorSelector<'b> {
        AnchorSelector {
            config: self.config,
            connectivity,
        }
    }

    pub fn config(&self) -> &AnchorConfig {
        &self.config
    }

    /// Select the anchor for one zone.
    ///
    /// Selection is deterministic: strictly highest score wins, ties broken
    /// by smallest centroid distance, then by candidate id. When no
    /// candidate survives the negative-tag exclusion and radius cut, a
    /// synthetic anchor at the centroid is returned instead of an error.
    pub fn select(&self, polygon: &Polygon, candidates: &[Candidate]) -> Anchor {
        let center = centroid(polygon);
        let max_radius = self.config.max_radius();

        let mut scored: Vec<(f64, f64, &Candidate)> = candidates
            .iter()
            .filter(|c| !priority::is_excluded(c, &self.config))
            .filter_map(|c| {
                let distance = haversine_meters(c.point, center);
                // NaN distances fail this comparison and drop out here.
                if distance <= max_radius {
                    Some((distance, c))
                } else {
                    None
                }
            })
            .map(|(distance, c)| {
                let score = formula::compute(c, distance, &self.config, self.connectivity);
                (score, distance, c)
            })
            .collect();

        scored.sort_by(|a, b| rank_order(a, b));

        match scored.first() {
            Some(&(score, distance, winner)) => {
                debug!(
                    candidate = %winner.id,
                    score,
                    distance_m = distance,
                    "anchor selected"
                );
                self.build_anchor(winner, score, distance)
            }
            None => {
                debug!(zone_centroid = %center, "no qualifying candidates, synthesizing anchor");
                fallback::synthetic_anchor(center)
            }
        }
    }

    /// Select anchors for a batch of zones.
    pub fn select_batch(&self, zones: &[(Polygon, Vec<Candidate>)]) -> Vec<Anchor> {
        zones
            .iter()
            .map(|(polygon, candidates)| self.select(polygon, candidates))
            .collect()
    }

    fn build_anchor(&self, winner: &Candidate, score: f64, distance_m: f64) -> Anchor {
        let selection_reason = match priority::matching_tag(winner, &self.config) {
            Some((key, value)) => format!(
                "Priority match ({key}={value}), {distance_m:.0}m from centroid"
            ),
            None => format!("Best weighted score, {distance_m:.0}m from centroid"),
        };
        Anchor {
            candidate_id: Some(winner.id.clone()),
            point: winner.point,
            name: winner.name().to_string(),
            tags: winner.tags.clone(),
            score,
            selection_reason,
        }
    }
}

/// Ordering for scored candidates: score descending, then distance
/// ascending, then id ascending. Total and stable so packs reproduce.
fn rank_order(a: &(f64, f64, &Candidate), b: &(f64, f64, &Candidate)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .then_with(|| a.2.id.cmp(&b.2.id))
}
