pub mod anchor;
pub mod base;
pub mod baseline;
pub mod confidence;
pub mod texture;

pub use anchor::Anchor;
pub use base::{Hazard, IntelAggregate, Pricing, Zone};
pub use baseline::BaselineStats;
pub use confidence::{Confidence, ConfidenceLevel};
pub use texture::{DynamicTexture, SpectrumTexture, TextureKind, ZoneTexture};
