use serde::{Deserialize, Serialize};

use super::anchor::Anchor;
use super::baseline::BaselineStats;
use super::confidence::Confidence;
use super::texture::ZoneTexture;
use crate::geo::{Point, Polygon};

/// Aggregated field-report intelligence for a zone, maintained by the
/// report stream collaborator and read by the ranking engines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelAggregate {
    /// Reports received within the recent window (feeds the incident
    /// modifier and vitality penalties).
    pub recent_report_count: u32,
    /// Share of observations authored by locals, 0.0–1.0.
    pub local_ratio: f64,
    /// Pre-tokenized search terms for this zone.
    pub search_tokens: Vec<String>,
}

/// Typical visitor spend for a zone, in the pack's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pricing {
    pub typical_spend: f64,
}

/// Hassle/hazard signals for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hazard {
    /// Tout/scam pressure on a 0–10 scale.
    pub hassle_penalty: f64,
}

/// The central aggregate: a named geographic cell with its anchor,
/// texture, and confidence. Created once per city during pack generation;
/// never deleted, only marked offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub city: String,
    pub name: String,
    pub polygon: Polygon,
    pub centroid: Point,
    pub selected_anchor: Anchor,
    pub texture: ZoneTexture,
    pub confidence: Confidence,
    pub intel_aggregate: IntelAggregate,
    pub pricing: Pricing,
    pub hazard: Hazard,
    pub baseline: BaselineStats,
    pub offline: bool,
}
