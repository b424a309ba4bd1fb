//! In-memory collaborators for tests, demos, and single-process hosts.
//! Each one carries an availability switch to simulate network or disk loss.

mod activity_log;
mod profile_cache;
mod remote_store;

pub use activity_log::InMemoryActivityLog;
pub use profile_cache::InMemoryProfileCache;
pub use remote_store::InMemoryRemoteStore;
