//! Configuration system for Foresight.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.
//!
//! Every policy constant of the scoring formulas is a named field here so
//! calibration never touches the algorithms.

pub mod badge_config;
pub mod consistency_config;
pub mod defaults;
pub mod foresight_config;
pub mod participation_config;
pub mod reliability_config;
pub mod threshold;
pub mod timeliness_config;
pub mod trend_config;

pub use badge_config::BadgeConfig;
pub use consistency_config::ConsistencyConfig;
pub use foresight_config::ForesightConfig;
pub use participation_config::ParticipationConfig;
pub use reliability_config::{ReliabilityConfig, ReliabilityWeights};
pub use threshold::{ThresholdDirection, ThresholdEntry, ThresholdTable};
pub use timeliness_config::TimelinessConfig;
pub use trend_config::TrendConfig;

use crate::errors::ConfigError;

/// Reject negative or non-finite policy constants.
pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be a finite, non-negative number (got {value})"),
        });
    }
    Ok(())
}
