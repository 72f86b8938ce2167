use serde::{Deserialize, Serialize};

use crate::candidate::TagMap;
use crate::geo::Point;

/// The single representative point of interest chosen for a zone.
///
/// Owned exclusively by its zone; replaced wholesale on re-selection,
/// never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Id of the winning candidate, or `None` for a synthetic fallback.
    pub candidate_id: Option<String>,
    pub point: Point,
    pub name: String,
    pub tags: TagMap,
    /// Raw weighted score at selection time (0 for synthetic fallbacks).
    pub score: f64,
    /// Human-readable explanation of why this anchor won.
    pub selection_reason: String,
}

impl Anchor {
    /// True if this anchor was synthesized because no candidate qualified.
    pub fn is_synthetic(&self) -> bool {
        self.tags.has("synthetic", "true")
    }
}
