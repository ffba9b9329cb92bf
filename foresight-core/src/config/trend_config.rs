use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Trend cohort configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Records per cohort: the `window` most recent vs the next `window`. Default: 5.
    pub window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_TREND_WINDOW,
        }
    }
}

impl TrendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "trends.window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
