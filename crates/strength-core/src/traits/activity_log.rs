use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::activity::Activity;
use crate::config::ActivityWindow;
use crate::errors::StrengthResult;

/// Append-only per-user activity history.
#[async_trait]
pub trait IActivityLog: Send + Sync {
    async fn append(&self, user_id: &str, activity: Activity) -> StrengthResult<()>;

    /// Activities inside `window` relative to `now`, ordered by timestamp ascending.
    async fn query(
        &self,
        user_id: &str,
        window: ActivityWindow,
        now: DateTime<Utc>,
    ) -> StrengthResult<Vec<Activity>>;
}
