//! # strength-store
//!
//! Persistence bridge for the memory strength engine. The remote store holds
//! the canonical value; a local profile cache mirrors every write and marks it
//! synced or pending so a later reconciliation pass can retry. Remote and
//! cache failures are logged and degrade to the cached value or 0, never to
//! an error for the caller.
//!
//! Writes carry a version token and use compare-and-swap, so two concurrent
//! recalculations for the same user re-read and recompute instead of silently
//! losing an update.

pub mod engine;
pub mod memory;
pub mod reconcile;
pub mod timeout;
pub mod tracing_setup;

pub use engine::{ReadSource, RecalculationReport, StrengthReading, StrengthStore, WriteOutcome};
pub use memory::{InMemoryActivityLog, InMemoryProfileCache, InMemoryRemoteStore};
pub use reconcile::ReconcileOutcome;
pub use strength_scoring::points_for;
