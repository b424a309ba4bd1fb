use std::collections::HashSet;

use strength_core::activity::{Activity, ActivityType, ImportSource};
use strength_core::models::FactorScore;

/// Social factor over shares and collaboration imports.
///
/// Formula: `min(100, count × 25 + distinctTypes × 10)`, 0 when nothing qualifies.
pub fn calculate(activities: &[Activity]) -> FactorScore {
    let social: Vec<&Activity> = activities.iter().filter(|a| qualifies(a)).collect();
    if social.is_empty() {
        return FactorScore::ZERO;
    }
    let distinct: HashSet<ActivityType> = social.iter().map(|a| a.activity_type()).collect();
    let score = social.len() as f64 * 25.0 + distinct.len() as f64 * 10.0;
    FactorScore::new(score.min(100.0))
}

fn qualifies(activity: &Activity) -> bool {
    activity.activity_type() == ActivityType::MemoryShared
        || activity.kind().import_source() == Some(ImportSource::Collaboration)
}
