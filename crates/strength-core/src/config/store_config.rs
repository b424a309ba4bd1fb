use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Which slice of the activity log a recalculation scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityWindow {
    /// Every activity ever recorded for the user.
    AllTime,
    /// Activities from the last `days` days.
    Recent { days: u32 },
}

impl ActivityWindow {
    /// Lower bound of the window, `None` when unbounded.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::AllTime => None,
            Self::Recent { days } => Some(now - Duration::days(i64::from(*days))),
        }
    }
}

impl Default for ActivityWindow {
    fn default() -> Self {
        Self::Recent {
            days: defaults::DEFAULT_ACTIVITY_WINDOW_DAYS,
        }
    }
}

/// Strength Store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Timeout applied to every remote and cache call (milliseconds).
    pub io_timeout_ms: u64,
    /// Re-read/recompute attempts after a version conflict.
    pub max_cas_retries: u32,
    /// Window queried from the activity log by `record_activity`.
    pub activity_window: ActivityWindow,
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.io_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.io_timeout_ms".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if let ActivityWindow::Recent { days: 0 } = self.activity_window {
            return Err(ConfigError::InvalidValue {
                field: "store.activity_window.days".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            io_timeout_ms: defaults::DEFAULT_IO_TIMEOUT_MS,
            max_cas_retries: defaults::DEFAULT_MAX_CAS_RETRIES,
            activity_window: ActivityWindow::default(),
        }
    }
}
