pub mod factors;
pub mod profile;
pub mod score_outcome;
pub mod strength;

pub use factors::{FactorScore, MemoryStrengthFactors};
pub use profile::{CachedProfile, StrengthRecord};
pub use score_outcome::ScoreOutcome;
pub use strength::Strength;
