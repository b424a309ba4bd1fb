use strength_core::activity::Activity;
use strength_core::models::FactorScore;

use super::mean;

/// Engagement depth: `min(100, mean(value) × 10)`.
pub fn calculate(activities: &[Activity]) -> FactorScore {
    match mean(activities.iter().map(Activity::value)) {
        Some(avg) => FactorScore::new((avg * 10.0).min(100.0)),
        None => FactorScore::ZERO,
    }
}
