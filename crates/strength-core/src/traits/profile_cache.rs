use async_trait::async_trait;

use crate::errors::StrengthResult;
use crate::models::CachedProfile;

/// Device-local mirror of the last known strength.
#[async_trait]
pub trait ILocalProfileCache: Send + Sync {
    async fn get_cached_profile(&self, user_id: &str) -> StrengthResult<Option<CachedProfile>>;
    async fn save_cached_profile(&self, user_id: &str, profile: CachedProfile)
        -> StrengthResult<()>;
}
