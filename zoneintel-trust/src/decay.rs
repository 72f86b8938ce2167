//! Per-zone confidence records and the daily decay sweep.

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use zoneintel_core::config::TrustConfig;
use zoneintel_core::zone::{BaselineStats, Confidence};

use crate::confidence::initial_confidence;

/// An idempotent "apply this delta" operation for the persistence layer.
/// Re-applying a delta for a day that already ran is a no-op upstream
/// because the store refuses to produce a second one for the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayDelta {
    pub zone_id: String,
    pub old_score: f64,
    pub new_score: f64,
    pub applied_on: NaiveDate,
}

#[derive(Debug, Clone)]
struct ZoneRecord {
    confidence: Confidence,
    last_decayed_on: Option<NaiveDate>,
}

/// Shared confidence store: the one component with cross-request mutable
/// state. Each zone's record mutates under its own map entry guard, so
/// decay and verification votes racing on the same zone serialize.
#[derive(Debug, Default)]
pub struct ConfidenceStore {
    config: TrustConfig,
    records: DashMap<String, ZoneRecord>,
}

impl ConfidenceStore {
    pub fn new(config: TrustConfig) -> Self {
        Self {
            config,
            records: DashMap::new(),
        }
    }

    /// Register a zone with baseline-derived initial confidence.
    pub fn insert_zone(&self, zone_id: impl Into<String>, baseline: &BaselineStats) {
        let mut confidence = initial_confidence(baseline);
        confidence.decay_factor = self.config.decay_factor;
        self.records.insert(
            zone_id.into(),
            ZoneRecord {
                confidence,
                last_decayed_on: None,
            },
        );
    }

    /// Snapshot of a zone's confidence. Eventually consistent.
    pub fn get(&self, zone_id: &str) -> Option<Confidence> {
        self.records.get(zone_id).map(|r| r.confidence.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a verification event against a zone.
    pub fn record_verification(&self, zone_id: &str, at: DateTime<Utc>, boost: f64) {
        if let Some(mut record) = self.records.get_mut(zone_id) {
            record.confidence.record_verification(at, boost);
        }
    }

    /// Anomaly override: the only operation allowed to reset a score.
    pub fn flag_anomaly(&self, zone_id: &str, reason: impl Into<String>, reset_score: f64) {
        if let Some(mut record) = self.records.get_mut(zone_id) {
            record.confidence.anomaly_detected = true;
            record.confidence.anomaly_reason = Some(reason.into());
            record.confidence.set_score(reset_score);
        }
    }

    /// Decay one zone for `today`. Returns the delta, or `None` when the
    /// zone is unknown, already decayed today, or was verified today.
    /// Idempotent under repeated invocation within the same day.
    pub fn decay_zone(&self, zone_id: &str, today: NaiveDate) -> Option<DecayDelta> {
        let mut record = self.records.get_mut(zone_id)?;

        if record.last_decayed_on == Some(today) {
            return None;
        }

        let verified_today = record
            .confidence
            .last_verified_at
            .is_some_and(|at| at.date_naive() == today);
        if verified_today {
            // Re-verified zones skip decay but still consume the day.
            record.last_decayed_on = Some(today);
            return None;
        }

        let old_score = record.confidence.score();
        let factor = record.confidence.decay_factor;
        record.confidence.set_score(old_score * factor);
        record.last_decayed_on = Some(today);

        debug!(zone_id, old_score, new_score = record.confidence.score(), "decayed zone");

        Some(DecayDelta {
            zone_id: zone_id.to_string(),
            old_score,
            new_score: record.confidence.score(),
            applied_on: today,
        })
    }

    /// The daily sweep: decay every registered zone. Safe to re-run within
    /// the same day and to run concurrently with vote processing — both
    /// paths serialize on the per-zone entry guard.
    pub fn decay_all(&self, today: NaiveDate) -> Vec<DecayDelta> {
        let zone_ids: Vec<String> = self.records.iter().map(|r| r.key().clone()).collect();
        let deltas: Vec<DecayDelta> = zone_ids
            .par_iter()
            .filter_map(|id| self.decay_zone(id, today))
            .collect();
        info!(zones = zone_ids.len(), decayed = deltas.len(), %today, "decay sweep complete");
        deltas
    }
}
