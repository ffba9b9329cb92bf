use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_TABLE_TOTAL;
use crate::errors::ConfigError;

/// Weights of the four engagement rates in the participation sub-score.
/// Must sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipationConfig {
    pub acceptance_weight: u32,
    pub completion_weight: u32,
    pub on_time_weight: u32,
    pub responsiveness_weight: u32,
}

impl Default for ParticipationConfig {
    fn default() -> Self {
        Self {
            acceptance_weight: defaults::DEFAULT_ACCEPTANCE_WEIGHT,
            completion_weight: defaults::DEFAULT_COMPLETION_WEIGHT,
            on_time_weight: defaults::DEFAULT_ON_TIME_WEIGHT,
            responsiveness_weight: defaults::DEFAULT_RESPONSIVENESS_WEIGHT,
        }
    }
}

impl ParticipationConfig {
    pub fn total(&self) -> u64 {
        [
            self.acceptance_weight,
            self.completion_weight,
            self.on_time_weight,
            self.responsiveness_weight,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let actual = self.total();
        if actual != WEIGHT_TABLE_TOTAL {
            return Err(ConfigError::WeightSumMismatch {
                table: "participation".to_string(),
                actual,
                expected: WEIGHT_TABLE_TOTAL,
            });
        }
        Ok(())
    }
}
