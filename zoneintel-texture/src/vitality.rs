//! Zone vitality: a 0–10 liveability score for the current moment.

use zoneintel_core::zone::SpectrumTexture;

/// Request-time context for a vitality evaluation. `recent_reports` is
/// signed and `crowd_density` unbounded because the result must stay in
/// range for any input the report stream produces.
#[derive(Debug, Clone, Copy)]
pub struct VitalityContext {
    /// Local hour of day, 0–23.
    pub hour: u32,
    pub recent_reports: i64,
    /// Nominal 0.0–1.0, but may exceed 1.0 under crowd surges.
    pub crowd_density: f64,
}

/// Base score per spectrum texture: Silence highest, Chaos lowest.
fn base_score(texture: SpectrumTexture) -> f64 {
    match texture {
        SpectrumTexture::Silence => 9.0,
        SpectrumTexture::Analog => 7.5,
        SpectrumTexture::Neon => 6.0,
        SpectrumTexture::Chaos => 4.0,
    }
}

/// Compute vitality. Penalized by reports and crowding, boosted during
/// daytime; clamped to [0, 10] regardless of how extreme the inputs are.
pub fn calculate_vitality(texture: SpectrumTexture, ctx: &VitalityContext) -> f64 {
    let report_penalty = 0.5 * ctx.recent_reports.max(0) as f64;
    let crowd_penalty = 2.0 * ctx.crowd_density.max(0.0);
    let daytime_boost = if (8..18).contains(&ctx.hour) { 1.0 } else { 0.0 };

    (base_score(texture) - report_penalty - crowd_penalty + daytime_boost).clamp(0.0, 10.0)
}
