use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A single normalized factor, clamped to [0.0, 100.0].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(from = "f64")]
#[ts(export)]
pub struct FactorScore(f64);

impl FactorScore {
    pub const ZERO: FactorScore = FactorScore(0.0);
    pub const FULL: FactorScore = FactorScore(100.0);

    /// Create a new FactorScore, clamping to [0.0, 100.0]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for FactorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for FactorScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// The eight normalized sub-scores computed over an activity set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemoryStrengthFactors {
    pub consistency: FactorScore,
    pub activity_count: FactorScore,
    pub recent_activity: FactorScore,
    pub engagement_depth: FactorScore,
    pub activity_diversity: FactorScore,
    pub progress_streak: FactorScore,
    pub challenge_level: FactorScore,
    pub social_engagement: FactorScore,
}

impl MemoryStrengthFactors {
    /// Factor names in declaration order.
    pub const NAMES: [&'static str; 8] = [
        "consistency",
        "activity_count",
        "recent_activity",
        "engagement_depth",
        "activity_diversity",
        "progress_streak",
        "challenge_level",
        "social_engagement",
    ];

    /// All factors at 0. The result for an empty activity set.
    pub fn zero() -> Self {
        Self::default()
    }

    /// All factors at 100.
    pub fn full() -> Self {
        Self {
            consistency: FactorScore::FULL,
            activity_count: FactorScore::FULL,
            recent_activity: FactorScore::FULL,
            engagement_depth: FactorScore::FULL,
            activity_diversity: FactorScore::FULL,
            progress_streak: FactorScore::FULL,
            challenge_level: FactorScore::FULL,
            social_engagement: FactorScore::FULL,
        }
    }

    /// Factor values in declaration order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.consistency.value(),
            self.activity_count.value(),
            self.recent_activity.value(),
            self.engagement_depth.value(),
            self.activity_diversity.value(),
            self.progress_streak.value(),
            self.challenge_level.value(),
            self.social_engagement.value(),
        ]
    }
}
