//! StrengthStore: read/write bridge between the canonical remote value and
//! the offline cache, plus the recalculation entrypoints.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use strength_core::activity::Activity;
use strength_core::config::{StoreConfig, StrengthConfig};
use strength_core::errors::{StoreError, StrengthError, StrengthResult};
use strength_core::models::{CachedProfile, ScoreOutcome, Strength};
use strength_core::traits::{
    IActivityLog, ILocalProfileCache, IRemoteStrengthStore, IStrengthScorer,
};
use strength_scoring::ScoringEngine;

use crate::timeout::with_timeout;

/// Where a strength reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSource {
    /// Canonical remote value.
    Remote,
    /// Local cache, because the remote failed or had no value.
    Cache,
    /// Neither had a value.
    Default,
}

/// A strength value together with the bookkeeping reconciliation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReading {
    pub strength: Strength,
    pub source: ReadSource,
    /// Version to compare-and-swap against. `Some(0)` when the remote
    /// confirmed there is no record, `None` when the remote was not reached
    /// and the cache did not know the version either.
    pub version: Option<u64>,
    /// `false` when the value came from a pending cache entry.
    pub synced: bool,
}

/// Result of a write-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub strength: Strength,
    /// Whether the remote accepted the value.
    pub synced: bool,
    /// New remote version when synced.
    pub version: Option<u64>,
}

/// Full result of one recalculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecalculationReport {
    pub outcome: ScoreOutcome,
    pub synced: bool,
    /// Scoring passes run: 1, plus one per version conflict or unknown
    /// remote version that forced a re-read.
    pub attempts: u32,
}

impl RecalculationReport {
    pub fn new_strength(&self) -> Strength {
        self.outcome.new_strength
    }
}

/// The strength store. Owns the collaborators and the scoring pipeline.
pub struct StrengthStore {
    remote: Arc<dyn IRemoteStrengthStore>,
    cache: Arc<dyn ILocalProfileCache>,
    activity_log: Arc<dyn IActivityLog>,
    scorer: Arc<dyn IStrengthScorer>,
    config: StoreConfig,
}

impl StrengthStore {
    /// Create a store using the scoring engine described by `config`.
    pub fn new(
        remote: Arc<dyn IRemoteStrengthStore>,
        cache: Arc<dyn ILocalProfileCache>,
        activity_log: Arc<dyn IActivityLog>,
        config: &StrengthConfig,
    ) -> Self {
        Self {
            remote,
            cache,
            activity_log,
            scorer: Arc::new(ScoringEngine::from_config(config)),
            config: config.store,
        }
    }

    /// Replace the scoring pipeline.
    pub fn with_scorer(mut self, scorer: Arc<dyn IStrengthScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Reads ---

    /// Current strength: remote first, then the local cache, then 0.
    /// Never fails.
    pub async fn read(&self, user_id: &str) -> Strength {
        self.read_detailed(user_id).await.strength
    }

    /// External name for [`read`](Self::read).
    pub async fn read_strength(&self, user_id: &str) -> Strength {
        self.read(user_id).await
    }

    /// Current strength with its source and version.
    pub async fn read_detailed(&self, user_id: &str) -> StrengthReading {
        let remote = with_timeout(
            "get_strength",
            self.config.io_timeout_ms,
            self.remote.get_strength(user_id),
        )
        .await;

        let remote_version = match remote {
            Ok(Some(record)) => {
                return StrengthReading {
                    strength: record.value,
                    source: ReadSource::Remote,
                    version: Some(record.version),
                    synced: true,
                };
            }
            Ok(None) => Some(0),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "remote read failed, falling back to cache");
                None
            }
        };

        match self.load_cached(user_id).await {
            Some(profile) => StrengthReading {
                strength: profile.strength,
                source: ReadSource::Cache,
                version: remote_version.or(profile.version),
                synced: profile.synced,
            },
            None => StrengthReading {
                strength: Strength::MIN,
                source: ReadSource::Default,
                version: remote_version,
                synced: true,
            },
        }
    }

    // --- Writes ---

    /// Unconditional write-through. The local cache mirrors the value either
    /// way, marked synced or pending. Never fails.
    pub async fn write(&self, user_id: &str, strength: Strength) -> WriteOutcome {
        match self.remote_set(user_id, strength, None).await {
            Ok(version) => self.mirror_synced(user_id, strength, version).await,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "remote write failed, keeping value pending");
                self.mirror_pending(user_id, strength, None).await
            }
        }
    }

    // --- Recalculation ---

    /// Score `activity_window ∪ {new_activity}` on top of the current
    /// strength and persist the result. Returns the new strength.
    pub async fn recalculate(
        &self,
        user_id: &str,
        new_activity: Activity,
        activity_window: &[Activity],
    ) -> Strength {
        self.recalculate_at(user_id, new_activity, activity_window, Utc::now())
            .await
            .new_strength()
    }

    /// External name for [`recalculate`](Self::recalculate).
    pub async fn recalculate_after_activity(
        &self,
        user_id: &str,
        activity: Activity,
        recent_activity_window: &[Activity],
    ) -> Strength {
        self.recalculate(user_id, activity, recent_activity_window)
            .await
    }

    /// [`recalculate`](Self::recalculate) with an explicit clock and a full report.
    pub async fn recalculate_at(
        &self,
        user_id: &str,
        new_activity: Activity,
        activity_window: &[Activity],
        now: DateTime<Utc>,
    ) -> RecalculationReport {
        let activities = union_by_id(activity_window, new_activity);
        self.score_and_persist(user_id, &activities, now).await
    }

    /// Append `activity` to the log, then recalculate from a log query over
    /// the configured window.
    pub async fn record_activity(&self, user_id: &str, activity: Activity) -> Strength {
        self.record_activity_at(user_id, activity, Utc::now())
            .await
            .new_strength()
    }

    /// [`record_activity`](Self::record_activity) with an explicit clock.
    pub async fn record_activity_at(
        &self,
        user_id: &str,
        activity: Activity,
        now: DateTime<Utc>,
    ) -> RecalculationReport {
        let millis = self.config.io_timeout_ms;

        if let Err(e) = with_timeout(
            "append_activity",
            millis,
            self.activity_log.append(user_id, activity.clone()),
        )
        .await
        {
            tracing::warn!(user_id, error = %e, "activity log append failed");
        }

        let window = self.config.activity_window;
        let history = match with_timeout(
            "query_activities",
            millis,
            self.activity_log.query(user_id, window, now),
        )
        .await
        {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "activity log query failed, scoring new activity only");
                Vec::new()
            }
        };

        let activities = union_by_id(&history, activity);
        self.score_and_persist(user_id, &activities, now).await
    }

    async fn score_and_persist(
        &self,
        user_id: &str,
        activities: &[Activity],
        now: DateTime<Utc>,
    ) -> RecalculationReport {
        let max_attempts = self.config.max_cas_retries + 1;
        let mut attempts = 0;

        loop {
            attempts += 1;
            let current = self.read_detailed(user_id).await;
            let outcome = self.scorer.score(current.strength, activities, now);
            let new_strength = outcome.new_strength;

            // Without a version the base value may be a fallback; never
            // write it over the canonical one unconditionally.
            let Some(expected_version) = current.version else {
                if attempts < max_attempts {
                    tracing::debug!(user_id, attempts, "remote version unknown, re-reading");
                    continue;
                }
                tracing::warn!(
                    user_id,
                    strength = new_strength.value(),
                    attempts,
                    synced = false,
                    "remote version unknown, keeping recalculated strength pending"
                );
                self.mirror_pending(user_id, new_strength, None).await;
                return RecalculationReport {
                    outcome,
                    synced: false,
                    attempts,
                };
            };

            match self
                .remote_set(user_id, new_strength, Some(expected_version))
                .await
            {
                Ok(version) => {
                    self.mirror_synced(user_id, new_strength, version).await;
                    tracing::info!(
                        user_id,
                        previous = current.strength.value(),
                        strength = new_strength.value(),
                        base_increase = outcome.base_increase,
                        decay = outcome.decay,
                        activities = activities.len(),
                        attempts,
                        "strength recalculated"
                    );
                    return RecalculationReport {
                        outcome,
                        synced: true,
                        attempts,
                    };
                }
                Err(StrengthError::Store(StoreError::VersionConflict { expected, actual, .. }))
                    if attempts < max_attempts =>
                {
                    tracing::debug!(user_id, expected, actual, attempts, "version conflict, recomputing");
                }
                Err(e) => {
                    tracing::warn!(
                        user_id,
                        error = %e,
                        strength = new_strength.value(),
                        attempts,
                        "remote write failed, keeping recalculated strength pending"
                    );
                    self.mirror_pending(user_id, new_strength, Some(expected_version))
                        .await;
                    return RecalculationReport {
                        outcome,
                        synced: false,
                        attempts,
                    };
                }
            }
        }
    }

    // --- Collaborator plumbing ---

    async fn remote_set(
        &self,
        user_id: &str,
        strength: Strength,
        expected_version: Option<u64>,
    ) -> StrengthResult<u64> {
        with_timeout(
            "set_strength",
            self.config.io_timeout_ms,
            self.remote.set_strength(user_id, strength, expected_version),
        )
        .await
    }

    pub(crate) async fn load_cached(&self, user_id: &str) -> Option<CachedProfile> {
        match with_timeout(
            "get_cached_profile",
            self.config.io_timeout_ms,
            self.cache.get_cached_profile(user_id),
        )
        .await
        {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "local cache read failed");
                None
            }
        }
    }

    async fn save_cached(&self, user_id: &str, profile: CachedProfile) {
        if let Err(e) = with_timeout(
            "save_cached_profile",
            self.config.io_timeout_ms,
            self.cache.save_cached_profile(user_id, profile),
        )
        .await
        {
            tracing::warn!(user_id, error = %e, synced = profile.synced, "local cache write failed");
        }
    }

    pub(crate) async fn mirror_synced(
        &self,
        user_id: &str,
        strength: Strength,
        version: u64,
    ) -> WriteOutcome {
        self.save_cached(user_id, CachedProfile::synced(strength, version, Utc::now()))
            .await;
        tracing::debug!(user_id, strength = strength.value(), version, "strength synced");
        WriteOutcome {
            strength,
            synced: true,
            version: Some(version),
        }
    }

    async fn mirror_pending(
        &self,
        user_id: &str,
        strength: Strength,
        version: Option<u64>,
    ) -> WriteOutcome {
        self.save_cached(user_id, CachedProfile::pending(strength, version, Utc::now()))
            .await;
        WriteOutcome {
            strength,
            synced: false,
            version: None,
        }
    }

    pub(crate) fn remote(&self) -> &Arc<dyn IRemoteStrengthStore> {
        &self.remote
    }
}

/// `window ∪ {activity}`, keyed by activity id.
fn union_by_id(window: &[Activity], activity: Activity) -> Vec<Activity> {
    let mut activities = window.to_vec();
    if !activities.iter().any(|a| a.id() == activity.id()) {
        activities.push(activity);
    }
    activities
}
