use chrono::{DateTime, Utc};
use strength_core::activity::Activity;
use strength_core::config::DecayConfig;
use strength_core::models::Strength;

/// Inactivity penalty with the default decay configuration.
///
/// ```text
/// daysInactive = hoursSinceLatest / 24
/// decayRate    = 0.1 + (currentStrength / 100) × 0.2
/// decay        = daysInactive × decayRate
/// ```
///
/// Zero when the set is empty or the latest activity is under 24 hours old.
/// Higher strength decays faster, so scores cannot saturate monotonically.
pub fn decay(current: Strength, activities: &[Activity], now: DateTime<Utc>) -> f64 {
    decay_with(current, activities, now, &DecayConfig::default())
}

/// Inactivity penalty with explicit configuration. Always >= 0.
pub fn decay_with(
    current: Strength,
    activities: &[Activity],
    now: DateTime<Utc>,
    config: &DecayConfig,
) -> f64 {
    let Some(latest) = activities.iter().map(Activity::timestamp).max() else {
        return 0.0;
    };
    let hours_inactive = (now - latest).num_milliseconds().max(0) as f64 / 3_600_000.0;
    if hours_inactive < config.grace_period_hours {
        return 0.0;
    }

    let days_inactive = hours_inactive / 24.0;
    let rate = config.base_rate + (current.as_f64() / 100.0) * config.strength_rate;
    (days_inactive * rate).max(0.0)
}
