use zoneintel_core::config::TextureConfig;

/// Per-report push toward Chaos.
const PER_REPORT: f64 = 0.2;

/// Incident modifier: positive, scaling with recent report count, capped
/// so a report flood cannot run the shift away.
pub fn calculate(recent_reports: u32, cfg: &TextureConfig) -> f64 {
    (recent_reports as f64 * PER_REPORT).min(cfg.incident_modifier_cap)
}
