use strength_core::activity::Activity;
use strength_core::constants::FULL_STREAK_DAYS;
use strength_core::models::FactorScore;

use super::active_days;

/// Progress streak factor: `min(100, longestRun × 100/7)`.
///
/// A run is a sequence of active calendar days, each at most one day after
/// the previous. Only multi-day runs count, so a single active day scores 0
/// and a full week saturates the factor.
pub fn calculate(sorted: &[Activity]) -> FactorScore {
    let run = longest_run(sorted);
    FactorScore::new((run as f64 * (100.0 / FULL_STREAK_DAYS)).min(100.0))
}

/// Length in days of the longest multi-day run, 0 if there is none.
pub fn longest_run(sorted: &[Activity]) -> u32 {
    let days = active_days(sorted);
    let mut longest = 0;
    let mut current = 1;

    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() <= 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}
