use strength_core::activity::{ActivityKind, ActivityType, Difficulty};
use strength_core::constants::{FALLBACK_BASE_POINTS, MAX_STREAK_BONUS_DAYS};

/// Base points for each activity type.
pub fn base_points(activity_type: ActivityType) -> u32 {
    match activity_type {
        ActivityType::MemoryAdded => 10,
        ActivityType::MemoryImported => 3,
        ActivityType::GameCompleted => 15,
        ActivityType::MemoryReviewed => 5,
        ActivityType::DailyLogin => 2,
        ActivityType::GamePerfectScore => 25,
        ActivityType::MemoryShared => 8,
        ActivityType::StreakMaintained => 12,
    }
}

/// Point multiplier for a reported difficulty.
pub fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 1.0,
        Difficulty::Medium => 1.5,
        Difficulty::Hard => 2.0,
    }
}

/// Points an activity is worth.
///
/// ```text
/// points = round(base × difficultyMultiplier + min(streakDays, 10))
/// ```
///
/// The multiplier applies only when the kind carries a difficulty, the bonus
/// only when it carries a streak length.
pub fn points_for(kind: &ActivityKind) -> u32 {
    apply_modifiers(
        base_points(kind.activity_type()),
        kind.difficulty(),
        kind.streak_days(),
    )
}

/// Points for a raw type name from an external producer.
///
/// Unknown names score [`FALLBACK_BASE_POINTS`] before modifiers. Metadata is
/// taken as given, without checking that the type may carry it.
pub fn points_for_name(
    type_name: &str,
    difficulty: Option<Difficulty>,
    streak_days: Option<u32>,
) -> u32 {
    let base = match type_name.parse::<ActivityType>() {
        Ok(activity_type) => base_points(activity_type),
        Err(_) => {
            tracing::debug!(type_name, "unknown activity type, using fallback points");
            FALLBACK_BASE_POINTS
        }
    };
    apply_modifiers(base, difficulty, streak_days)
}

fn apply_modifiers(base: u32, difficulty: Option<Difficulty>, streak_days: Option<u32>) -> u32 {
    let mut points = f64::from(base);
    if let Some(d) = difficulty {
        points *= difficulty_multiplier(d);
    }
    if let Some(days) = streak_days {
        points += f64::from(days.min(MAX_STREAK_BONUS_DAYS));
    }
    points.round() as u32
}
