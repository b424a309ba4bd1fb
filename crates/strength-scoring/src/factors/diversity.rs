use std::collections::HashSet;

use strength_core::activity::{Activity, ActivityType};
use strength_core::models::FactorScore;

/// Diversity factor: share of the 8 activity types seen, as a percentage.
pub fn calculate(activities: &[Activity]) -> FactorScore {
    let distinct: HashSet<ActivityType> = activities.iter().map(Activity::activity_type).collect();
    let share = distinct.len() as f64 / ActivityType::COUNT as f64 * 100.0;
    FactorScore::new(share.min(100.0))
}
