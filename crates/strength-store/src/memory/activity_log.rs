use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use strength_core::activity::Activity;
use strength_core::config::ActivityWindow;
use strength_core::errors::{StoreError, StrengthResult};
use strength_core::traits::IActivityLog;

/// Append-only activity log, one timestamp-ordered list per user.
///
/// Appending an id that is already present is a no-op.
#[derive(Debug)]
pub struct InMemoryActivityLog {
    entries: DashMap<String, Vec<Activity>>,
    available: AtomicBool,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of activities recorded for a user.
    pub fn len(&self, user_id: &str) -> usize {
        self.entries.get(user_id).map_or(0, |e| e.len())
    }

    pub fn is_empty(&self, user_id: &str) -> bool {
        self.len(user_id) == 0
    }

    fn check_available(&self) -> StrengthResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::LogUnavailable {
                reason: "activity log unavailable".to_string(),
            }
            .into())
        }
    }
}

impl Default for InMemoryActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IActivityLog for InMemoryActivityLog {
    async fn append(&self, user_id: &str, activity: Activity) -> StrengthResult<()> {
        self.check_available()?;
        let mut entries = self.entries.entry(user_id.to_string()).or_default();
        if entries.iter().any(|a| a.id() == activity.id()) {
            tracing::debug!(user_id, activity_id = activity.id(), "duplicate activity ignored");
            return Ok(());
        }
        // Insert after every entry with an equal timestamp to keep arrival order.
        let at = entries.partition_point(|a| a.timestamp() <= activity.timestamp());
        entries.insert(at, activity);
        Ok(())
    }

    async fn query(
        &self,
        user_id: &str,
        window: ActivityWindow,
        now: DateTime<Utc>,
    ) -> StrengthResult<Vec<Activity>> {
        self.check_available()?;
        let since = window.since(now);
        let Some(entries) = self.entries.get(user_id) else {
            return Ok(Vec::new());
        };
        Ok(entries
            .iter()
            .filter(|a| since.map_or(true, |s| a.timestamp() >= s))
            .cloned()
            .collect())
    }
}
