mod config_error;
mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error for the strength engine.
///
/// Scoring is total and has no error variant: only persistence and
/// configuration can fail.
#[derive(Debug, thiserror::Error)]
pub enum StrengthError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type StrengthResult<T> = Result<T, StrengthError>;
