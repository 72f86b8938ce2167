//! TTL cache for search rankings.
//!
//! An injected collaborator, never a module-level singleton: the caller
//! owns the cache, its capacity, and its TTL, and decides which rankers
//! share it.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use zoneintel_core::models::ScoredZone;
use zoneintel_core::zone::Zone;

use crate::search::SearchQuery;

/// Cached search rankings keyed by a (query, zone set) fingerprint.
#[derive(Debug, Clone)]
pub struct ScoreCache {
    inner: Cache<String, Arc<Vec<ScoredZone>>>,
}

impl ScoreCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<ScoredZone>>> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: String, ranking: Arc<Vec<ScoredZone>>) {
        self.inner.insert(key, ranking);
    }

    /// Deterministic key over the query (text, filters, caller location)
    /// and the zone set. Zone ids are order-sensitive: the ranker's stable
    /// sort makes input order part of the result.
    pub fn fingerprint(query: &SearchQuery, zones: &[Zone]) -> String {
        let mut key = String::with_capacity(64 + zones.len() * 8);
        let _ = write!(
            key,
            "q={};tex={:?};bud={:?};rad={:?};loc={:?}|",
            query.text.to_lowercase(),
            query.filters.texture,
            query.filters.budget,
            query.filters.radius_km,
            query.caller_location,
        );
        for zone in zones {
            key.push_str(&zone.id);
            key.push(',');
        }
        key
    }
}

impl Default for ScoreCache {
    /// 1k entries, 60s TTL. Callers with other needs use [`ScoreCache::new`].
    fn default() -> Self {
        Self::new(1_000, Duration::from_secs(60))
    }
}
