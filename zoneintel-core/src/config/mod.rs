pub mod anchor_config;
pub mod defaults;
pub mod ranking_config;
pub mod texture_config;
pub mod trust_config;

pub use anchor_config::{AnchorConfig, AnchorWeights};
pub use ranking_config::{CorridorWeights, RankingConfig, SearchWeights};
pub use texture_config::TextureConfig;
pub use trust_config::TrustConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Umbrella configuration for the whole engine. Every section defaults
/// independently, so a config file may override a single weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneIntelConfig {
    pub anchor: AnchorConfig,
    pub texture: TextureConfig,
    pub trust: TrustConfig,
    pub ranking: RankingConfig,
}

impl ZoneIntelConfig {
    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Enforce the cross-field invariants config files can break.
    fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.anchor.weights;
        if w.priority < 0.0 || w.proximity < 0.0 || w.connectivity < 0.0 || w.tag_richness < 0.0 {
            return Err(ConfigError::Invalid {
                reason: "anchor weights must be non-negative".to_string(),
            });
        }
        if self
            .anchor
            .radii
            .windows(2)
            .any(|pair| pair[1] < pair[0])
        {
            return Err(ConfigError::Invalid {
                reason: "anchor radii must be ascending".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.trust.decay_factor) {
            return Err(ConfigError::Invalid {
                reason: "trust decay_factor must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}
