//! Point-of-interest type histogram.

use std::collections::HashMap;

use zoneintel_core::candidate::Candidate;

/// POI categories the classifier distinguishes. OSM-style tags outside
/// these buckets contribute to the total but to no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiCategory {
    Cafe,
    Bar,
    Market,
    Temple,
    Park,
    Transit,
    Tourist,
}

/// Map a candidate to its category, if any.
pub fn categorize(candidate: &Candidate) -> Option<PoiCategory> {
    let tags = &candidate.tags;

    if let Some(amenity) = tags.get("amenity") {
        match amenity {
            "cafe" => return Some(PoiCategory::Cafe),
            "bar" | "pub" | "nightclub" => return Some(PoiCategory::Bar),
            "marketplace" => return Some(PoiCategory::Market),
            "place_of_worship" => return Some(PoiCategory::Temple),
            _ => {}
        }
    }
    if let Some(shop) = tags.get("shop") {
        if matches!(shop, "convenience" | "supermarket") {
            return Some(PoiCategory::Market);
        }
    }
    if let Some(leisure) = tags.get("leisure") {
        if matches!(leisure, "park" | "garden") {
            return Some(PoiCategory::Park);
        }
    }
    if tags.has("highway", "bus_stop")
        || tags.has("railway", "station")
        || tags.has("public_transport", "platform")
        || tags.has("public_transport", "station")
    {
        return Some(PoiCategory::Transit);
    }
    if let Some(tourism) = tags.get("tourism") {
        if matches!(
            tourism,
            "hotel" | "guest_house" | "attraction" | "museum" | "monument" | "viewpoint"
        ) {
            return Some(PoiCategory::Tourist);
        }
    }
    None
}

/// Category counts over a zone's POI set.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    counts: HashMap<PoiCategory, usize>,
    total: usize,
}

impl Histogram {
    pub fn from_candidates(pois: &[Candidate]) -> Self {
        let mut counts: HashMap<PoiCategory, usize> = HashMap::new();
        for poi in pois {
            if let Some(category) = categorize(poi) {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            total: pois.len(),
        }
    }

    pub fn count(&self, category: PoiCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Category share of the total POI count. The denominator floors at 1
    /// so an empty set yields 0.0 ratios, never a division by zero.
    pub fn ratio(&self, category: PoiCategory) -> f64 {
        self.count(category) as f64 / self.total.max(1) as f64
    }
}
