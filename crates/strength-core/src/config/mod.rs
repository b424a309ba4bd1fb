pub mod decay_config;
pub mod defaults;
pub mod scoring_config;
pub mod store_config;

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use scoring_config::{FactorWeights, ScoringConfig};
pub use store_config::{ActivityWindow, StoreConfig};

use crate::errors::ConfigError;

/// Top-level engine configuration. Every section falls back to its defaults
/// when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    pub scoring: ScoringConfig,
    pub decay: DecayConfig,
    pub store: StoreConfig,
}

impl StrengthConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.weights.validate()?;
        self.decay.validate()?;
        self.store.validate()
    }
}
