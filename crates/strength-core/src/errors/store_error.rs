/// Persistence-layer errors raised by the remote store, the local cache,
/// and the activity log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("remote store unavailable: {reason}")]
    RemoteUnavailable { reason: String },

    #[error("local cache unavailable: {reason}")]
    CacheUnavailable { reason: String },

    #[error("activity log unavailable: {reason}")]
    LogUnavailable { reason: String },

    /// Versions start at 1; 0 stands for "no record".
    #[error("version conflict for user {user_id}: expected version {expected}, found {actual}")]
    VersionConflict {
        user_id: String,
        expected: u64,
        actual: u64,
    },

    #[error("{operation} timed out after {millis}ms")]
    Timeout { operation: String, millis: u64 },
}
