//! # strength-scoring
//!
//! Pure scoring pipeline for the memory strength engine.
//! Point table, eight-factor calculator, weighted aggregation into a bounded
//! base increase, and strength-scaled inactivity decay. Nothing here performs
//! I/O or fails.

pub mod aggregate;
pub mod decay;
pub mod engine;
pub mod factors;
pub mod points;

pub use aggregate::{aggregate, aggregate_with, AggregateBreakdown};
pub use decay::{decay, decay_with};
pub use engine::ScoringEngine;
pub use factors::compute_factors;
pub use points::{points_for, points_for_name};
