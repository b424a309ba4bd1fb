use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Persisted engagement metric, an integer clamped to [0, 100].
/// Deserialization clamps through [`Strength::new`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(from = "u8")]
#[ts(export)]
pub struct Strength(u8);

impl Strength {
    pub const MIN: Strength = Strength(0);
    pub const MAX: Strength = Strength(100);

    /// Create a new Strength, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Round a raw score to the nearest integer after clamping to [0, 100].
    /// NaN maps to 0.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::MIN;
        }
        Self(score.clamp(0.0, 100.0).round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Strength {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Strength> for u8 {
    fn from(s: Strength) -> Self {
        s.0
    }
}
