/// Structural analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix is not square: row {row} has {len} cells, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("matrix has {actual} rows but {expected} variable ids were supplied")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("influence value {value} is outside the 0-3 scale")]
    InvalidInfluenceValue { value: u8 },

    #[error("indirect power must be between 1 and {max}, got {power}")]
    InvalidPower { power: u32, max: u32 },
}
