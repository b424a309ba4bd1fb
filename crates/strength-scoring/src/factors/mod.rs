pub mod activity_count;
pub mod challenge;
pub mod consistency;
pub mod depth;
pub mod diversity;
pub mod recency;
pub mod social;
pub mod streak;

use chrono::{DateTime, NaiveDate, Utc};
use strength_core::activity::Activity;
use strength_core::models::MemoryStrengthFactors;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Compute all eight factors over an activity set.
///
/// Pure and deterministic for a fixed `now`. An empty set yields all-zero
/// factors. Input order does not matter: a timestamp-sorted copy is scored.
pub fn compute_factors(activities: &[Activity], now: DateTime<Utc>) -> MemoryStrengthFactors {
    if activities.is_empty() {
        return MemoryStrengthFactors::zero();
    }
    let sorted = sorted_by_time(activities);

    MemoryStrengthFactors {
        consistency: consistency::calculate(&sorted),
        activity_count: activity_count::calculate(&sorted),
        recent_activity: recency::calculate(&sorted, now),
        engagement_depth: depth::calculate(&sorted),
        activity_diversity: diversity::calculate(&sorted),
        progress_streak: streak::calculate(&sorted),
        challenge_level: challenge::calculate(&sorted),
        social_engagement: social::calculate(&sorted),
    }
}

/// Stable sort by timestamp ascending.
pub fn sorted_by_time(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.timestamp());
    sorted
}

/// Distinct UTC calendar dates with at least one activity, ascending.
pub(crate) fn active_days(sorted: &[Activity]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = sorted.iter().map(|a| a.timestamp().date_naive()).collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Elapsed whole days between two instants, rounded up. Never negative.
pub(crate) fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let seconds = (to - from).num_seconds().max(0) as f64;
    (seconds / SECONDS_PER_DAY).ceil()
}

/// Fractional hours from `from` to `to`. Never negative.
pub(crate) fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds().max(0) as f64 / MILLIS_PER_HOUR
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}
