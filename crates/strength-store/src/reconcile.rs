//! Offline reconciliation: push a pending cached strength to the remote store.
//!
//! A pending value is the most recent local decision, so it is written
//! last-write-wins over whatever the remote currently holds.

use strength_core::models::Strength;

use crate::engine::StrengthStore;
use crate::timeout::with_timeout;

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No cached profile for the user.
    NothingCached,
    /// The cached value was already confirmed by the remote.
    AlreadySynced(Strength),
    /// The pending value was accepted by the remote.
    Pushed { strength: Strength, version: u64 },
    /// The remote is still unreachable; the value stays pending.
    StillPending(Strength),
}

impl ReconcileOutcome {
    /// Whether the remote holds the cached value after this pass.
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::AlreadySynced(_) | Self::Pushed { .. })
    }
}

impl StrengthStore {
    /// Push the cached value if it is pending.
    pub async fn reconcile(&self, user_id: &str) -> ReconcileOutcome {
        let Some(profile) = self.load_cached(user_id).await else {
            return ReconcileOutcome::NothingCached;
        };

        if profile.synced {
            return ReconcileOutcome::AlreadySynced(profile.strength);
        }

        let pushed = with_timeout(
            "set_strength",
            self.config().io_timeout_ms,
            self.remote().set_strength(user_id, profile.strength, None),
        )
        .await;

        match pushed {
            Ok(version) => {
                self.mirror_synced(user_id, profile.strength, version).await;
                tracing::info!(
                    user_id,
                    strength = profile.strength.value(),
                    version,
                    "pending strength reconciled"
                );
                ReconcileOutcome::Pushed {
                    strength: profile.strength,
                    version,
                }
            }
            Err(e) => {
                tracing::warn!(
                    user_id,
                    error = %e,
                    strength = profile.strength.value(),
                    synced = false,
                    "reconciliation failed, value stays pending"
                );
                ReconcileOutcome::StillPending(profile.strength)
            }
        }
    }

    /// Reconcile every user in `user_ids`, in order.
    pub async fn reconcile_all<'a, I>(&self, user_ids: I) -> Vec<(String, ReconcileOutcome)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut outcomes = Vec::new();
        for user_id in user_ids {
            outcomes.push((user_id.to_string(), self.reconcile(user_id).await));
        }
        outcomes
    }
}
