use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights for the four anchor scoring factors. All fields non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorWeights {
    pub priority: f64,
    pub proximity: f64,
    pub connectivity: f64,
    pub tag_richness: f64,
}

impl Default for AnchorWeights {
    fn default() -> Self {
        Self {
            priority: defaults::DEFAULT_WEIGHT_PRIORITY,
            proximity: defaults::DEFAULT_WEIGHT_PROXIMITY,
            connectivity: defaults::DEFAULT_WEIGHT_CONNECTIVITY,
            tag_richness: defaults::DEFAULT_WEIGHT_TAG_RICHNESS,
        }
    }
}

/// Anchor selection configuration.
///
/// `priority_tags` and `negative_tags` map a tag category (e.g. `tourism`)
/// to the tag values that qualify. Negative matches are hard exclusions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Search radii in meters, ascending. The last entry is the hard
    /// distance cut for candidates.
    pub radii: Vec<f64>,
    pub priority_tags: HashMap<String, Vec<String>>,
    pub negative_tags: HashMap<String, Vec<String>>,
    pub weights: AnchorWeights,
    /// Tag count at which the richness factor saturates.
    pub tag_richness_capacity: usize,
}

impl AnchorConfig {
    /// Largest configured radius; 0 when no radii are configured.
    pub fn max_radius(&self) -> f64 {
        self.radii.last().copied().unwrap_or(0.0)
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        let priority_tags = HashMap::from([
            (
                "tourism".to_string(),
                vec![
                    "monument".to_string(),
                    "attraction".to_string(),
                    "museum".to_string(),
                    "viewpoint".to_string(),
                ],
            ),
            (
                "amenity".to_string(),
                vec!["place_of_worship".to_string(), "marketplace".to_string()],
            ),
            (
                "historic".to_string(),
                vec![
                    "monument".to_string(),
                    "memorial".to_string(),
                    "castle".to_string(),
                ],
            ),
        ]);
        let negative_tags = HashMap::from([
            (
                "amenity".to_string(),
                vec![
                    "toilets".to_string(),
                    "waste_disposal".to_string(),
                    "parking".to_string(),
                ],
            ),
            (
                "landuse".to_string(),
                vec!["industrial".to_string(), "landfill".to_string()],
            ),
        ]);
        Self {
            radii: defaults::DEFAULT_ANCHOR_RADII_M.to_vec(),
            priority_tags,
            negative_tags,
            weights: AnchorWeights::default(),
            tag_richness_capacity: defaults::DEFAULT_TAG_RICHNESS_CAPACITY,
        }
    }
}
