use strength_core::activity::Activity;
use strength_core::models::FactorScore;

use super::{active_days, days_between};

/// Consistency factor: share of days in the span that saw activity.
///
/// Formula: `min(100, uniqueActiveDays / max(1, spanDays) × 100)`
/// where `spanDays` is the first-to-last elapsed time rounded up to whole days.
/// A single activity scores 100.
pub fn calculate(sorted: &[Activity]) -> FactorScore {
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return FactorScore::ZERO;
    };
    let unique_days = active_days(sorted).len() as f64;
    let span_days = days_between(first.timestamp(), last.timestamp()).max(1.0);

    FactorScore::new((unique_days / span_days * 100.0).min(100.0))
}
