use chrono::{DateTime, Utc};

use crate::activity::Activity;
use crate::models::{ScoreOutcome, Strength};

/// Pure scoring pipeline: factors, aggregation, decay.
pub trait IStrengthScorer: Send + Sync {
    /// Score `activities` starting from `previous`. Total over its input and
    /// deterministic for a fixed `now`.
    fn score(&self, previous: Strength, activities: &[Activity], now: DateTime<Utc>)
        -> ScoreOutcome;
}
