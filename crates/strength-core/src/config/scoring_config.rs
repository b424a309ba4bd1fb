use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::models::MemoryStrengthFactors;

/// Per-factor weights used by the score aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub consistency: f64,
    pub activity_count: f64,
    pub recent_activity: f64,
    pub engagement_depth: f64,
    pub activity_diversity: f64,
    pub progress_streak: f64,
    pub challenge_level: f64,
    pub social_engagement: f64,
}

impl FactorWeights {
    /// Weights in the same order as [`MemoryStrengthFactors::values`].
    pub fn values(&self) -> [f64; 8] {
        [
            self.consistency,
            self.activity_count,
            self.recent_activity,
            self.engagement_depth,
            self.activity_diversity,
            self.progress_streak,
            self.challenge_level,
            self.social_engagement,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }

    /// Weighted sum of the factors, divided by 100. In [0, 1] for valid weights.
    pub fn weighted_score(&self, factors: &MemoryStrengthFactors) -> f64 {
        self.values()
            .iter()
            .zip(factors.values())
            .map(|(w, f)| w * f)
            .sum::<f64>()
            / 100.0
    }

    /// Every weight finite and non-negative, total within 1e-9 of 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.values().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.weights".to_string(),
                reason: "weights must be finite and non-negative".to_string(),
            });
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(())
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            consistency: defaults::DEFAULT_WEIGHT_CONSISTENCY,
            activity_count: defaults::DEFAULT_WEIGHT_ACTIVITY_COUNT,
            recent_activity: defaults::DEFAULT_WEIGHT_RECENT_ACTIVITY,
            engagement_depth: defaults::DEFAULT_WEIGHT_ENGAGEMENT_DEPTH,
            activity_diversity: defaults::DEFAULT_WEIGHT_ACTIVITY_DIVERSITY,
            progress_streak: defaults::DEFAULT_WEIGHT_PROGRESS_STREAK,
            challenge_level: defaults::DEFAULT_WEIGHT_CHALLENGE_LEVEL,
            social_engagement: defaults::DEFAULT_WEIGHT_SOCIAL_ENGAGEMENT,
        }
    }
}

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
}
