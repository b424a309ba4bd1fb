use async_trait::async_trait;

use crate::errors::StrengthResult;
use crate::models::{Strength, StrengthRecord};

/// Canonical per-user strength value held by the remote database.
#[async_trait]
pub trait IRemoteStrengthStore: Send + Sync {
    /// Current record, `None` if the user has never been written.
    async fn get_strength(&self, user_id: &str) -> StrengthResult<Option<StrengthRecord>>;

    /// Write a new value and return the new version.
    ///
    /// With `Some(expected)` the write is a compare-and-swap: it fails with
    /// `StoreError::VersionConflict` unless the stored version equals
    /// `expected` (0 for a user with no record). `None` writes
    /// unconditionally (last-write-wins).
    async fn set_strength(
        &self,
        user_id: &str,
        value: Strength,
        expected_version: Option<u64>,
    ) -> StrengthResult<u64>;
}
