//! Multi-factor search scorer (7 factors).
//!
//! Factors: text match (+ texture bonus), anchor quality, freshness,
//! hassle penalty, price fit, local ratio, distance.

use serde::{Deserialize, Serialize};

use zoneintel_core::config::RankingConfig;
use zoneintel_core::zone::Zone;

use super::query::SearchQuery;

/// Per-factor contributions behind a search score. Factor values are
/// pre-weight; `total` is the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchBreakdown {
    /// 0.0 or 1.0: did the query text match name/anchor/tags/tokens?
    pub text_match: f64,
    /// Bonus added into the text factor when the primary texture matches
    /// an explicit filter.
    pub texture_bonus: f64,
    pub anchor_quality: f64,
    pub freshness: f64,
    pub hassle_penalty: f64,
    pub price_fit: f64,
    pub local_ratio: f64,
    pub distance: f64,
    pub total: f64,
}

/// Case-insensitive substring match of the query text against the zone's
/// name, anchor name, texture tags, and pre-tokenized search terms. An
/// empty query matches nothing.
pub fn text_match(zone: &Zone, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    if zone.name.to_lowercase().contains(&needle)
        || zone.selected_anchor.name.to_lowercase().contains(&needle)
    {
        return true;
    }
    zone.texture
        .tags
        .iter()
        .chain(zone.intel_aggregate.search_tokens.iter())
        .any(|t| t.to_lowercase().contains(&needle))
}

/// Score one zone against a query. `distance_km` is the caller-to-centroid
/// distance when caller coordinates were given; without it the distance
/// factor contributes nothing.
pub fn compute_breakdown(
    zone: &Zone,
    query: &SearchQuery,
    distance_km: Option<f64>,
    config: &RankingConfig,
) -> SearchBreakdown {
    let w = &config.search;

    // Factor 1: Text match, binary.
    let f_text = if text_match(zone, &query.text) { 1.0 } else { 0.0 };

    // Bonus rides on the text factor when the primary texture matches an
    // explicit filter.
    let texture_bonus = match query.filters.texture {
        Some(kind) if kind == zone.texture.primary => config.texture_filter_bonus,
        _ => 0.0,
    };

    // Factor 2: Anchor quality, normalized to [0, 1].
    let f_anchor = (zone.selected_anchor.score / 100.0).min(1.0);

    // Factor 3: Freshness. Fixed constant; not derived from recency data.
    let f_freshness = config.freshness_boost;

    // Factor 4: Hassle penalty, 0–10 scale normalized and subtracted.
    let f_hassle = zone.hazard.hassle_penalty / 10.0;

    // Factor 5: Price fit against the budget filter; neutral without one.
    let f_price = match query.filters.budget {
        Some(budget) => (1.0 - (zone.pricing.typical_spend - budget).abs() / 100.0).max(0.0),
        None => 1.0,
    };

    // Factor 6: Local ratio, already 0–1.
    let f_local = zone.intel_aggregate.local_ratio;

    // Factor 7: Distance, linear falloff to zero at the range limit.
    let f_distance = match distance_km {
        Some(km) => (1.0 - km / config.distance_score_range_km).max(0.0),
        None => 0.0,
    };

    let total = w.text_match * (f_text + texture_bonus)
        + w.anchor_quality * f_anchor
        + w.freshness * f_freshness
        - w.hassle_penalty * f_hassle
        + w.price_fit * f_price
        + w.local_ratio * f_local
        + w.distance * f_distance;

    SearchBreakdown {
        text_match: f_text,
        texture_bonus,
        anchor_quality: f_anchor,
        freshness: f_freshness,
        hassle_penalty: f_hassle,
        price_fit: f_price,
        local_ratio: f_local,
        distance: f_distance,
        total,
    }
}
