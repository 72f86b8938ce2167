/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Baseline signals alone can never push initial confidence above this;
/// a zone earns HIGH only through verification.
pub const INITIAL_CONFIDENCE_CAP: f64 = 75.0;

/// Karma needed per voter level (level = karma/200 + 1).
pub const KARMA_PER_LEVEL: u32 = 200;

/// Assumed walking speed for ETA estimates, km/h.
pub const WALKING_SPEED_KMH: f64 = 4.5;
