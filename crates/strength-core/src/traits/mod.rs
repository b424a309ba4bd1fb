pub mod activity_log;
pub mod profile_cache;
pub mod remote_store;
pub mod scorer;

pub use activity_log::IActivityLog;
pub use profile_cache::ILocalProfileCache;
pub use remote_store::IRemoteStrengthStore;
pub use scorer::IStrengthScorer;
