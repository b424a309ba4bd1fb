use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Inactivity decay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Hours after the latest activity before any decay applies.
    pub grace_period_hours: f64,
    /// Decay per inactive day at strength 0.
    pub base_rate: f64,
    /// Extra decay per inactive day at strength 100, scaled linearly.
    pub strength_rate: f64,
}

impl DecayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("decay.grace_period_hours", self.grace_period_hours),
            ("decay.base_rate", self.base_rate),
            ("decay.strength_rate", self.strength_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("expected a finite value >= 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            grace_period_hours: defaults::DEFAULT_DECAY_GRACE_PERIOD_HOURS,
            base_rate: defaults::DEFAULT_DECAY_BASE_RATE,
            strength_rate: defaults::DEFAULT_DECAY_STRENGTH_RATE,
        }
    }
}
