use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::factors::MemoryStrengthFactors;
use super::strength::Strength;

/// Everything one pass of the scoring pipeline produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOutcome {
    /// Strength the pass started from.
    pub previous: Strength,
    pub factors: MemoryStrengthFactors,
    /// Bounded amount added before decay, in [0.5, 4.0].
    pub base_increase: f64,
    /// Inactivity penalty, >= 0.
    pub decay: f64,
    /// round(clamp(previous + base_increase - decay, 0, 100)).
    pub new_strength: Strength,
}
