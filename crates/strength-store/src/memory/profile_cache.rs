use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use strength_core::errors::{StoreError, StrengthResult};
use strength_core::models::CachedProfile;
use strength_core::traits::ILocalProfileCache;

/// Local profile cache backed by a concurrent map.
#[derive(Debug)]
pub struct InMemoryProfileCache {
    profiles: DashMap<String, CachedProfile>,
    available: AtomicBool,
}

impl InMemoryProfileCache {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate storage failure (`false`) or recovery (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Cached profile, bypassing the availability switch.
    pub fn snapshot(&self, user_id: &str) -> Option<CachedProfile> {
        self.profiles.get(user_id).map(|p| *p)
    }

    fn check_available(&self) -> StrengthResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::CacheUnavailable {
                reason: "local cache unavailable".to_string(),
            }
            .into())
        }
    }
}

impl Default for InMemoryProfileCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ILocalProfileCache for InMemoryProfileCache {
    async fn get_cached_profile(&self, user_id: &str) -> StrengthResult<Option<CachedProfile>> {
        self.check_available()?;
        Ok(self.snapshot(user_id))
    }

    async fn save_cached_profile(
        &self,
        user_id: &str,
        profile: CachedProfile,
    ) -> StrengthResult<()> {
        self.check_available()?;
        self.profiles.insert(user_id.to_string(), profile);
        Ok(())
    }
}
