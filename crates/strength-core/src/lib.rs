//! # strength-core
//!
//! Foundation crate for the memory strength engine.
//! Defines the activity model, factor and strength types, errors, config,
//! collaborator traits, and constants. Every other crate in the workspace
//! depends on this.

pub mod activity;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use activity::{Activity, ActivityKind, ActivityType, Difficulty, ImportSource};
pub use config::StrengthConfig;
pub use errors::{StrengthError, StrengthResult};
pub use models::{FactorScore, MemoryStrengthFactors, ScoreOutcome, Strength};
