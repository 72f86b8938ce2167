//! # zoneintel-texture
//!
//! Two-part texture engine: a static classifier that derives a zone's
//! baseline character from its point-of-interest histogram, and a dynamic
//! shifter that moves the active texture along the
//! Silence–Analog–Neon–Chaos spectrum with time-of-day, day-of-week, and
//! incident signals. All functions are pure.

pub mod classify;
pub mod histogram;
pub mod profile;
pub mod scores;
pub mod shift;
pub mod vitality;

pub use classify::classify_texture;
pub use histogram::{Histogram, PoiCategory};
pub use shift::{calculate_texture_shift, should_alert_shift, ShiftAlert, ShiftContext};
pub use vitality::{calculate_vitality, VitalityContext};
