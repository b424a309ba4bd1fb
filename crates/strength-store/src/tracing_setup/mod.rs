//! Structured JSON logging for hosts embedding the store.

use tracing_subscriber::EnvFilter;

use strength_core::config::defaults::DEFAULT_LOG_LEVEL;

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "STRENGTH_LOG";

/// Install the global JSON subscriber, filtered by `STRENGTH_LOG`
/// (falling back to `info`).
///
/// Returns `false` without touching anything when a global subscriber is
/// already installed, so hosts and tests may call it more than once.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    install(filter, true)
}

/// Like [`init_tracing`], with explicit filter directives instead of the
/// environment.
pub fn init_tracing_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives), false)
}

fn install(filter: EnvFilter, with_source_location: bool) -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .with_current_span(true)
        .with_file(with_source_location)
        .with_line_number(with_source_location)
        .try_init()
        .is_ok()
}
