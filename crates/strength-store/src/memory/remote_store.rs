use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use strength_core::errors::{StoreError, StrengthResult};
use strength_core::models::{Strength, StrengthRecord};
use strength_core::traits::IRemoteStrengthStore;

/// Remote store backed by a concurrent map. Versions start at 1.
#[derive(Debug)]
pub struct InMemoryRemoteStore {
    records: DashMap<String, StrengthRecord>,
    available: AtomicBool,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the network going down (`false`) or coming back (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Current record, bypassing the availability switch.
    pub fn snapshot(&self, user_id: &str) -> Option<StrengthRecord> {
        self.records.get(user_id).map(|r| *r)
    }

    fn check_available(&self) -> StrengthResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(StoreError::RemoteUnavailable {
                reason: "remote store offline".to_string(),
            }
            .into())
        }
    }
}

impl Default for InMemoryRemoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IRemoteStrengthStore for InMemoryRemoteStore {
    async fn get_strength(&self, user_id: &str) -> StrengthResult<Option<StrengthRecord>> {
        self.check_available()?;
        Ok(self.snapshot(user_id))
    }

    async fn set_strength(
        &self,
        user_id: &str,
        value: Strength,
        expected_version: Option<u64>,
    ) -> StrengthResult<u64> {
        self.check_available()?;

        let conflict = |expected: u64, actual: u64| StoreError::VersionConflict {
            user_id: user_id.to_string(),
            expected,
            actual,
        };

        match self.records.entry(user_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let actual = entry.get().version;
                if let Some(expected) = expected_version {
                    if expected != actual {
                        return Err(conflict(expected, actual).into());
                    }
                }
                let version = actual + 1;
                entry.insert(StrengthRecord { value, version });
                Ok(version)
            }
            Entry::Vacant(entry) => {
                if let Some(expected) = expected_version {
                    if expected != 0 {
                        return Err(conflict(expected, 0).into());
                    }
                }
                entry.insert(StrengthRecord { value, version: 1 });
                Ok(1)
            }
        }
    }
}
