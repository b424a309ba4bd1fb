use chrono::{DateTime, Utc};
use strength_core::activity::Activity;
use strength_core::config::{DecayConfig, FactorWeights, StrengthConfig};
use strength_core::models::{MemoryStrengthFactors, ScoreOutcome, Strength};
use strength_core::traits::IStrengthScorer;

use crate::aggregate::{self, AggregateBreakdown};
use crate::decay;
use crate::factors;

/// Scoring engine running factors → aggregation → decay over an activity set.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: FactorWeights,
    decay: DecayConfig,
}

impl ScoringEngine {
    /// Create a new ScoringEngine with the default weights and decay rates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a loaded configuration.
    pub fn from_config(config: &StrengthConfig) -> Self {
        Self {
            weights: config.scoring.weights,
            decay: config.decay,
        }
    }

    /// Create with custom factor weights.
    pub fn with_weights(weights: FactorWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    pub fn decay_config(&self) -> &DecayConfig {
        &self.decay
    }

    pub fn compute_factors(
        &self,
        activities: &[Activity],
        now: DateTime<Utc>,
    ) -> MemoryStrengthFactors {
        factors::compute_factors(activities, now)
    }

    pub fn aggregate(&self, factors: &MemoryStrengthFactors) -> f64 {
        aggregate::aggregate_with(factors, &self.weights)
    }

    pub fn aggregate_breakdown(&self, factors: &MemoryStrengthFactors) -> AggregateBreakdown {
        aggregate::aggregate_breakdown(factors, &self.weights)
    }

    pub fn decay(&self, current: Strength, activities: &[Activity], now: DateTime<Utc>) -> f64 {
        decay::decay_with(current, activities, now, &self.decay)
    }
}

impl IStrengthScorer for ScoringEngine {
    fn score(
        &self,
        previous: Strength,
        activities: &[Activity],
        now: DateTime<Utc>,
    ) -> ScoreOutcome {
        let factors = self.compute_factors(activities, now);
        let base_increase = self.aggregate(&factors);
        let decay = self.decay(previous, activities, now);
        let new_strength = Strength::from_score(previous.as_f64() + base_increase - decay);

        ScoreOutcome {
            previous,
            factors,
            base_increase,
            decay,
            new_strength,
        }
    }
}
