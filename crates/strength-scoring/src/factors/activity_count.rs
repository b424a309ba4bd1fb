use strength_core::activity::Activity;
use strength_core::models::FactorScore;

/// Volume factor: `min(100, count × 2)`. Saturates at 50 activities.
pub fn calculate(activities: &[Activity]) -> FactorScore {
    FactorScore::new((activities.len() as f64 * 2.0).min(100.0))
}
