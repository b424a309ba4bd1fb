// Single source of truth for all default values.

// --- Scoring weights (sum to exactly 1.0) ---
pub const DEFAULT_WEIGHT_CONSISTENCY: f64 = 0.15;
pub const DEFAULT_WEIGHT_ACTIVITY_COUNT: f64 = 0.10;
pub const DEFAULT_WEIGHT_RECENT_ACTIVITY: f64 = 0.15;
pub const DEFAULT_WEIGHT_ENGAGEMENT_DEPTH: f64 = 0.15;
pub const DEFAULT_WEIGHT_ACTIVITY_DIVERSITY: f64 = 0.10;
pub const DEFAULT_WEIGHT_PROGRESS_STREAK: f64 = 0.15;
pub const DEFAULT_WEIGHT_CHALLENGE_LEVEL: f64 = 0.10;
pub const DEFAULT_WEIGHT_SOCIAL_ENGAGEMENT: f64 = 0.10;

// --- Decay ---
pub const DEFAULT_DECAY_GRACE_PERIOD_HOURS: f64 = 24.0;
pub const DEFAULT_DECAY_BASE_RATE: f64 = 0.1;
pub const DEFAULT_DECAY_STRENGTH_RATE: f64 = 0.2;

// --- Store ---
pub const DEFAULT_IO_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_CAS_RETRIES: u32 = 3;
pub const DEFAULT_ACTIVITY_WINDOW_DAYS: u32 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
