use zoneintel_core::candidate::TagMap;
use zoneintel_core::geo::Point;
use zoneintel_core::zone::Anchor;

pub const FALLBACK_REASON: &str = "Fallback: no qualifying candidates";

/// Synthesize an anchor at the zone centroid when no candidate survives
/// exclusion and the radius cut.
pub fn synthetic_anchor(centroid: Point) -> Anchor {
    let mut tags = TagMap::new();
    tags.insert("synthetic", "true");
    Anchor {
        candidate_id: None,
        point: centroid,
        name: "Zone center".to_string(),
        tags,
        score: 0.0,
        selection_reason: FALLBACK_REASON.to_string(),
    }
}
