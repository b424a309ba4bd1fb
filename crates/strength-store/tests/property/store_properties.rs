use std::sync::Arc;

use proptest::prelude::*;
use strength_core::config::StrengthConfig;
use strength_core::models::Strength;
use strength_store::{
    InMemoryActivityLog, InMemoryProfileCache, InMemoryRemoteStore, ReconcileOutcome,
    StrengthStore,
};

const USER: &str = "user-1";

#[derive(Debug, Clone)]
enum Step {
    Write(u8),
    RemoteOnline(bool),
    CacheOnline(bool),
    Reconcile,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u8..=100).prop_map(Step::Write),
        any::<bool>().prop_map(Step::RemoteOnline),
        any::<bool>().prop_map(Step::CacheOnline),
        Just(Step::Reconcile),
    ]
}

/// Steps with the cache always reachable, so every write is mirrored.
fn arb_cached_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u8..=100).prop_map(Step::Write),
        any::<bool>().prop_map(Step::RemoteOnline),
        Just(Step::Reconcile),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn reads_never_leave_bounds(steps in prop::collection::vec(arb_step(), 0..30)) {
        let rt = runtime();
        rt.block_on(async {
            let remote = Arc::new(InMemoryRemoteStore::new());
            let cache = Arc::new(InMemoryProfileCache::new());
            let log = Arc::new(InMemoryActivityLog::new());
            let store = StrengthStore::new(
                remote.clone(),
                cache.clone(),
                log,
                &StrengthConfig::default(),
            );

            for step in steps {
                match step {
                    Step::Write(v) => {
                        store.write(USER, Strength::new(v)).await;
                    }
                    Step::RemoteOnline(on) => remote.set_available(on),
                    Step::CacheOnline(on) => cache.set_available(on),
                    Step::Reconcile => {
                        store.reconcile(USER).await;
                    }
                }
                let read = store.read(USER).await;
                prop_assert!(read.value() <= 100);
            }
            Ok::<(), TestCaseError>(())
        })?;
    }

    #[test]
    fn reconcile_converges_remote_and_cache(steps in prop::collection::vec(arb_cached_step(), 1..30)) {
        let rt = runtime();
        rt.block_on(async {
            let remote = Arc::new(InMemoryRemoteStore::new());
            let cache = Arc::new(InMemoryProfileCache::new());
            let log = Arc::new(InMemoryActivityLog::new());
            let store = StrengthStore::new(
                remote.clone(),
                cache.clone(),
                log,
                &StrengthConfig::default(),
            );

            for step in steps {
                match step {
                    Step::Write(v) => {
                        store.write(USER, Strength::new(v)).await;
                    }
                    Step::RemoteOnline(on) => remote.set_available(on),
                    Step::CacheOnline(on) => cache.set_available(on),
                    Step::Reconcile => {
                        store.reconcile(USER).await;
                    }
                }
            }

            remote.set_available(true);
            let outcome = store.reconcile(USER).await;

            match cache.snapshot(USER) {
                None => prop_assert_eq!(outcome, ReconcileOutcome::NothingCached),
                Some(cached) => {
                    prop_assert!(outcome.is_synced());
                    prop_assert!(cached.synced);
                    let record = remote.snapshot(USER);
                    prop_assert!(record.is_some());
                    if let Some(record) = record {
                        prop_assert_eq!(record.value, cached.strength);
                        prop_assert_eq!(Some(record.version), cached.version);
                    }
                }
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
