//! # zoneintel-anchor
//!
//! Picks one representative anchor point per zone from a candidate set:
//! hard negative-tag exclusion, radius cut, 4-factor weighted score,
//! deterministic tie-breaks, synthetic centroid fallback. Never errors —
//! an empty candidate list is defined behavior, not a failure.

pub mod factors;
pub mod fallback;
pub mod formula;
pub mod selector;

pub use formula::ScoreBreakdown;
pub use selector::AnchorSelector;
