use strength_core::activity::{Activity, ActivityType, Difficulty};
use strength_core::models::FactorScore;

use super::mean;

/// Challenge factor over games and anything carrying a difficulty.
///
/// Per activity: base by difficulty (easy 10, medium 25, hard 50, none 15),
/// doubled for a perfect score, +10 for a completed game.
/// Factor: `min(100, mean × 2)`, 0 when nothing qualifies.
pub fn calculate(activities: &[Activity]) -> FactorScore {
    let scores = activities.iter().filter(|a| qualifies(a)).map(activity_score);
    match mean(scores) {
        Some(avg) => FactorScore::new((avg * 2.0).min(100.0)),
        None => FactorScore::ZERO,
    }
}

fn qualifies(activity: &Activity) -> bool {
    activity.activity_type().is_game() || activity.kind().difficulty().is_some()
}

fn activity_score(activity: &Activity) -> f64 {
    let mut score = match activity.kind().difficulty() {
        Some(Difficulty::Easy) => 10.0,
        Some(Difficulty::Medium) => 25.0,
        Some(Difficulty::Hard) => 50.0,
        None => 15.0,
    };
    match activity.activity_type() {
        ActivityType::GamePerfectScore => score *= 2.0,
        ActivityType::GameCompleted => score += 10.0,
        _ => {}
    }
    score
}
