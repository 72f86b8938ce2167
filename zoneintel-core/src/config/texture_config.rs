use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the static classification cascade and the dynamic
/// shifter. Cascade order itself is fixed contract, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub market_ratio: f64,
    pub bar_ratio: f64,
    pub cafe_ratio: f64,
    pub temple_ratio: f64,
    pub park_ratio: f64,
    pub transit_ratio: f64,
    pub tourist_ratio: f64,
    /// Below this baseline POI density a quiet zone is Residential.
    pub residential_poi_density: f64,

    pub secondary_cafe_ratio: f64,
    pub secondary_nightlife_ratio: f64,
    pub secondary_market_ratio: f64,

    /// Night window for the time modifier, wrapping midnight.
    pub night_start_hour: u32,
    pub night_end_hour: u32,
    /// Net modifier magnitude below which the texture does not move.
    pub shift_step_threshold: f64,
    /// Net modifier magnitude that permits a two-step spectrum jump.
    pub large_shift_threshold: f64,
    /// Ceiling on the incident modifier.
    pub incident_modifier_cap: f64,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            market_ratio: defaults::MARKET_RATIO_THRESHOLD,
            bar_ratio: defaults::BAR_RATIO_THRESHOLD,
            cafe_ratio: defaults::CAFE_RATIO_THRESHOLD,
            temple_ratio: defaults::TEMPLE_RATIO_THRESHOLD,
            park_ratio: defaults::PARK_RATIO_THRESHOLD,
            transit_ratio: defaults::TRANSIT_RATIO_THRESHOLD,
            tourist_ratio: defaults::TOURIST_RATIO_THRESHOLD,
            residential_poi_density: defaults::RESIDENTIAL_POI_DENSITY,
            secondary_cafe_ratio: defaults::SECONDARY_CAFE_THRESHOLD,
            secondary_nightlife_ratio: defaults::SECONDARY_NIGHTLIFE_THRESHOLD,
            secondary_market_ratio: defaults::SECONDARY_MARKET_THRESHOLD,
            night_start_hour: defaults::NIGHT_START_HOUR,
            night_end_hour: defaults::NIGHT_END_HOUR,
            shift_step_threshold: defaults::SHIFT_STEP_THRESHOLD,
            large_shift_threshold: defaults::LARGE_SHIFT_THRESHOLD,
            incident_modifier_cap: defaults::INCIDENT_MODIFIER_CAP,
        }
    }
}
