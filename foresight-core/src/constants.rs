/// Foresight engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest value on the ordinal influence scale (0 = none … 3 = strong).
pub const INFLUENCE_SCALE_MAX: u8 = 3;

/// Valid range for an expert's self-reported confidence rating.
pub const CONFIDENCE_MIN: u8 = 1;
pub const CONFIDENCE_MAX: u8 = 5;

/// Largest matrix power accepted for indirect (MICMAC) influence.
/// Classifications stabilize well before this in studies of a few dozen variables.
pub const MAX_INDIRECT_POWER: u32 = 16;

/// Every score in the reliability pipeline lives on [0, SCORE_CEILING].
pub const SCORE_CEILING: f64 = 100.0;

/// Weight tables (reliability, participation) must sum to this.
/// Sums are taken in `u64` so that no `u32` weight combination can wrap.
pub const WEIGHT_TABLE_TOTAL: u64 = 100;
