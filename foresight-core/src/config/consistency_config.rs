use serde::{Deserialize, Serialize};

use super::{defaults, require_non_negative};
use crate::errors::ConfigError;

/// Consistency scorer policy constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyConfig {
    /// Points lost per unit of average deviation on the 0–3 scale. Default: 25.
    pub points_per_deviation: f64,
    /// Score given when there is nothing to compare against. Default: 50.
    pub neutral_score: f64,
    /// Deviation from the peer mean at which a relation counts as an outlier. Default: 1.5.
    pub outlier_deviation: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            points_per_deviation: defaults::DEFAULT_POINTS_PER_DEVIATION,
            neutral_score: defaults::DEFAULT_NEUTRAL_CONSISTENCY,
            outlier_deviation: defaults::DEFAULT_OUTLIER_DEVIATION,
        }
    }
}

impl ConsistencyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("consistency.points_per_deviation", self.points_per_deviation)?;
        require_non_negative("consistency.outlier_deviation", self.outlier_deviation)?;
        if !(0.0..=100.0).contains(&self.neutral_score) {
            return Err(ConfigError::ValidationFailed {
                field: "consistency.neutral_score".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }
}
