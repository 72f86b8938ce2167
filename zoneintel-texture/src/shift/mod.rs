//! Dynamic texture shifting along the Silence–Analog–Neon–Chaos spectrum.
//!
//! Three modifier factors (time, day, incidents) sum into a net push.
//! The active texture moves at most one spectrum step per evaluation
//! unless the magnitude crosses the large-shift threshold, in which case
//! it may jump two.

pub mod alert;
pub mod day;
pub mod incident;
pub mod time;

pub use alert::{should_alert_shift, AlertSeverity, ShiftAlert};

use chrono::Weekday;
use tracing::debug;

use zoneintel_core::config::TextureConfig;
use zoneintel_core::zone::{DynamicTexture, SpectrumTexture};

/// Request-time context for a shift evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ShiftContext {
    /// Local hour of day, 0–23.
    pub hour: u32,
    pub day_of_week: Weekday,
    /// Incident reports within the recent window.
    pub recent_reports: u32,
}

/// Compute the dynamic texture overlay for a zone. Pure; recomputed on
/// every read and never persisted.
pub fn calculate_texture_shift(
    base: SpectrumTexture,
    ctx: &ShiftContext,
    cfg: &TextureConfig,
) -> DynamicTexture {
    let time_modifier = time::calculate(ctx.hour, cfg);
    let day_modifier = day::calculate(ctx.day_of_week, ctx.hour);
    let incident_modifier = incident::calculate(ctx.recent_reports, cfg);

    let net = time_modifier + day_modifier + incident_modifier;
    let shift_magnitude = net.abs();

    let steps = if shift_magnitude >= cfg.large_shift_threshold {
        2
    } else if shift_magnitude >= cfg.shift_step_threshold {
        1
    } else {
        0
    };
    let direction = if net > 0.0 { 1 } else { -1 };
    let current_texture = SpectrumTexture::from_index(base.index() as i64 + direction * steps);

    if current_texture != base {
        debug!(
            from = ?base,
            to = ?current_texture,
            magnitude = shift_magnitude,
            "texture shifted"
        );
    }

    DynamicTexture {
        current_texture,
        time_modifier,
        day_modifier,
        incident_modifier,
        shift_magnitude,
    }
}
