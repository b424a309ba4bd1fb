/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of variants in the closed activity type enum.
pub const ACTIVITY_TYPE_COUNT: usize = 8;

/// Upper bound of every factor and of the persisted strength.
pub const SCORE_CEILING: f64 = 100.0;

/// Smallest amount a recalculation adds before decay.
pub const BASE_INCREASE_FLOOR: f64 = 0.5;

/// Span between the base increase floor and its ceiling (4.0).
pub const BASE_INCREASE_RANGE: f64 = 3.5;

/// Largest amount a recalculation adds before decay.
pub const BASE_INCREASE_CEILING: f64 = BASE_INCREASE_FLOOR + BASE_INCREASE_RANGE;

/// Base points assigned to an activity type name the point table does not know.
pub const FALLBACK_BASE_POINTS: u32 = 5;

/// Cap on the additive streak bonus in the point table.
pub const MAX_STREAK_BONUS_DAYS: u32 = 10;

/// Length of a streak (in days) that saturates the progress streak factor.
pub const FULL_STREAK_DAYS: f64 = 7.0;

/// Tolerance used when checking that factor weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
