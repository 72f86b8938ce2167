use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// A zone with its search-ranking score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredZone {
    pub zone: Zone,
    /// Final composite score; unbounded above, ordered descending.
    pub score: f64,
    /// Whether the query text matched name/anchor/tags/tokens.
    pub text_match: bool,
    /// Distance from the caller in km, when caller coordinates were given.
    pub distance_km: Option<f64>,
}
