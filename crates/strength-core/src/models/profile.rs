use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::strength::Strength;

/// Canonical remote value plus its compare-and-swap version token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrengthRecord {
    pub value: Strength,
    /// Monotonic per-user sequence number, bumped on every accepted write.
    /// The first write creates version 1.
    pub version: u64,
}

/// Offline mirror of the last strength this device saw or wrote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CachedProfile {
    pub strength: Strength,
    /// `false` while the value still has to be pushed to the remote store.
    pub synced: bool,
    /// Remote version the value corresponds to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    pub updated_at: DateTime<Utc>,
}

impl CachedProfile {
    pub fn synced(strength: Strength, version: u64, updated_at: DateTime<Utc>) -> Self {
        Self {
            strength,
            synced: true,
            version: Some(version),
            updated_at,
        }
    }

    pub fn pending(strength: Strength, version: Option<u64>, updated_at: DateTime<Utc>) -> Self {
        Self {
            strength,
            synced: false,
            version,
            updated_at,
        }
    }
}
