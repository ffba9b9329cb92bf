/// Configuration errors. Raised once at load/setup time, never per call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("weights for {table} sum to {actual}, expected {expected}")]
    WeightSumMismatch {
        table: String,
        actual: u64,
        expected: u64,
    },

    #[error("thresholds for {field} must be strictly {expected_order}")]
    NonMonotonicThresholds {
        field: String,
        expected_order: String,
    },
}
