use super::{ConfigError, MatrixError};

/// Top-level error for the Foresight engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ForesightError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

/// Convenience alias used across every crate in the workspace.
pub type ForesightResult<T> = Result<T, ForesightError>;
