//! Search ranking: weighted multi-factor scoring of zones against a
//! text query, descending by score.

pub mod query;
pub mod scorer;

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use zoneintel_core::config::RankingConfig;
use zoneintel_core::models::ScoredZone;
use zoneintel_core::zone::Zone;
use zoneintel_geo::haversine_km;

pub use query::{SearchFilters, SearchQuery};
pub use scorer::{compute_breakdown, text_match, SearchBreakdown};

use crate::cache::ScoreCache;

/// Ranks zones against a search query. Stateless; safe to share across
/// requests without coordination.
#[derive(Debug, Clone, Default)]
pub struct SearchRanker {
    config: RankingConfig,
}

impl SearchRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Rank `zones` against `query`, descending by score.
    ///
    /// Zones outside an explicit radius filter are excluded outright.
    /// Ties keep input order (stable sort).
    pub fn rank(&self, query: &SearchQuery, zones: &[Zone]) -> Vec<ScoredZone> {
        let mut scored: Vec<ScoredZone> = zones
            .iter()
            .filter_map(|zone| self.score_zone(query, zone))
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            query = %query.text,
            candidates = zones.len(),
            ranked = scored.len(),
            "search ranking complete"
        );
        scored
    }

    /// Rank through the injected cache. Identical query + zone set within
    /// the cache TTL returns the cached ranking without rescoring.
    pub fn rank_cached(
        &self,
        cache: &ScoreCache,
        query: &SearchQuery,
        zones: &[Zone],
    ) -> Arc<Vec<ScoredZone>> {
        let key = ScoreCache::fingerprint(query, zones);
        if let Some(hit) = cache.get(&key) {
            debug!(query = %query.text, "search ranking served from cache");
            return hit;
        }
        let ranked = Arc::new(self.rank(query, zones));
        cache.insert(key, Arc::clone(&ranked));
        ranked
    }

    fn score_zone(&self, query: &SearchQuery, zone: &Zone) -> Option<ScoredZone> {
        let distance_km = query
            .caller_location
            .map(|origin| haversine_km(origin, zone.centroid));

        // Radius filter: a hard cut, not a penalty.
        if let (Some(radius), Some(km)) = (query.filters.radius_km, distance_km) {
            if km > radius {
                return None;
            }
        }

        let breakdown = compute_breakdown(zone, query, distance_km, &self.config);
        Some(ScoredZone {
            zone: zone.clone(),
            score: breakdown.total,
            text_match: breakdown.text_match > 0.0,
            distance_km,
        })
    }
}
