//! # zoneintel-core
//!
//! Foundation crate for the zone intelligence engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod geo;
pub mod models;
pub mod traits;
pub mod zone;

// Re-export the most commonly used types at the crate root.
pub use candidate::{Candidate, TagMap};
pub use config::ZoneIntelConfig;
pub use errors::{EngineError, EngineResult};
pub use geo::{Point, Polygon};
pub use zone::{Anchor, BaselineStats, Confidence, ConfidenceLevel, TextureKind, Zone, ZoneTexture};
