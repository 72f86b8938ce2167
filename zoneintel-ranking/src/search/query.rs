use serde::{Deserialize, Serialize};

use zoneintel_core::geo::Point;
use zoneintel_core::zone::TextureKind;

/// Optional narrowing filters for a search.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Zones whose primary texture matches get the texture bonus.
    pub texture: Option<TextureKind>,
    /// Budget in the pack's currency unit; drives the price-fit factor.
    pub budget: Option<f64>,
    /// Hard cutoff: zones farther than this from the caller are excluded
    /// outright, not merely penalized. Requires caller coordinates.
    pub radius_km: Option<f64>,
}

/// A search request: free text plus optional caller location and filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub caller_location: Option<Point>,
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: Point) -> Self {
        self.caller_location = Some(location);
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}
