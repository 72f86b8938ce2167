use zoneintel_core::config::TextureConfig;

/// Time-of-day modifier. Negative during the night window (pushes toward
/// Silence/Analog), mildly positive in the evening, zero midday.
pub fn calculate(hour: u32, cfg: &TextureConfig) -> f64 {
    if is_night(hour, cfg) {
        -0.8
    } else if (18..cfg.night_start_hour).contains(&hour) {
        0.3
    } else {
        0.0
    }
}

/// Night window wraps midnight: [start, 24) ∪ [0, end).
pub fn is_night(hour: u32, cfg: &TextureConfig) -> bool {
    hour >= cfg.night_start_hour || hour < cfg.night_end_hour
}
