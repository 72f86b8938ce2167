use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Weights for the search ranking formula. Penalty weights are stored
/// positive and subtracted by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
    pub text_match: f64,
    pub anchor_quality: f64,
    pub freshness: f64,
    pub hassle_penalty: f64,
    pub price_fit: f64,
    pub local_ratio: f64,
    pub distance: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            text_match: defaults::SEARCH_WEIGHT_TEXT,
            anchor_quality: defaults::SEARCH_WEIGHT_ANCHOR,
            freshness: defaults::SEARCH_WEIGHT_FRESHNESS,
            hassle_penalty: defaults::SEARCH_WEIGHT_HASSLE,
            price_fit: defaults::SEARCH_WEIGHT_PRICE,
            local_ratio: defaults::SEARCH_WEIGHT_LOCAL,
            distance: defaults::SEARCH_WEIGHT_DISTANCE,
        }
    }
}

/// Weights for the corridor combined score. Sum to 1.0 by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorWeights {
    pub vitality: f64,
    pub lighting: f64,
    pub foot_traffic: f64,
}

impl Default for CorridorWeights {
    fn default() -> Self {
        Self {
            vitality: defaults::CORRIDOR_WEIGHT_VITALITY,
            lighting: defaults::CORRIDOR_WEIGHT_LIGHTING,
            foot_traffic: defaults::CORRIDOR_WEIGHT_FOOT_TRAFFIC,
        }
    }
}

/// Search ranker and corridor router configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub search: SearchWeights,
    /// Added to the text factor when a zone's texture tag matches an
    /// explicit filter.
    pub texture_filter_bonus: f64,
    /// Fixed freshness boost; not derived from recency data.
    pub freshness_boost: f64,
    /// Distance at which the distance factor reaches zero.
    pub distance_score_range_km: f64,

    pub corridor: CorridorWeights,
    pub max_waypoint_corridors: usize,
    /// Minimum lighting score when lit routes are preferred.
    pub min_lit_route_lighting: f64,
    /// Minimum corridor vitality to serve as a fallback destination.
    pub min_destination_vitality: f64,
    /// Zone vitality below which a path carries a warning.
    pub low_vitality_threshold: f64,
    /// Paths shorter than this are vitality-safe regardless of vitality.
    pub short_path_m: f64,
    pub walking_speed_kmh: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            search: SearchWeights::default(),
            texture_filter_bonus: defaults::TEXTURE_FILTER_BONUS,
            freshness_boost: defaults::FRESHNESS_BOOST,
            distance_score_range_km: defaults::DISTANCE_SCORE_RANGE_KM,
            corridor: CorridorWeights::default(),
            max_waypoint_corridors: defaults::MAX_WAYPOINT_CORRIDORS,
            min_lit_route_lighting: defaults::MIN_LIT_ROUTE_LIGHTING,
            min_destination_vitality: defaults::MIN_DESTINATION_VITALITY,
            low_vitality_threshold: defaults::LOW_VITALITY_THRESHOLD,
            short_path_m: defaults::SHORT_PATH_M,
            walking_speed_kmh: constants::WALKING_SPEED_KMH,
        }
    }
}
