/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("factor weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
