use chrono::{DateTime, Utc};
use strength_core::activity::Activity;
use strength_core::models::FactorScore;

use super::hours_between;

/// Recency factor: `max(0, 100 − hoursSinceLastActivity)`.
///
/// Range: 0 – 100. Reaches 0 after ~4 days without activity. Timestamps
/// in the future count as zero hours ago.
pub fn calculate(sorted: &[Activity], now: DateTime<Utc>) -> FactorScore {
    let Some(last) = sorted.last() else {
        return FactorScore::ZERO;
    };
    let hours = hours_between(last.timestamp(), now);
    FactorScore::new((100.0 - hours).max(0.0))
}
