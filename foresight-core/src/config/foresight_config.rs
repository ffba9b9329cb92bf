//! Top-level Foresight configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{
    BadgeConfig, ConsistencyConfig, ParticipationConfig, ReliabilityConfig, TimelinessConfig,
    TrendConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FORESIGHT_*`)
/// 2. Project config (`foresight.toml` in the given root)
/// 3. Compiled defaults
///
/// A loaded config has always been validated. Weight tables that do not
/// sum to 100 and non-monotonic threshold tables are rejected here, once,
/// rather than on every scoring call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForesightConfig {
    pub consistency: ConsistencyConfig,
    pub timeliness: TimelinessConfig,
    pub participation: ParticipationConfig,
    pub reliability: ReliabilityConfig,
    pub badges: BadgeConfig,
    pub trends: TrendConfig,
}

impl ForesightConfig {
    /// Load configuration with layered resolution from `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.consistency.validate()?;
        self.timeliness.validate()?;
        self.participation.validate()?;
        self.reliability.validate()?;
        self.badges.validate()?;
        self.trends.validate()?;
        Ok(())
    }

    /// Apply `FORESIGHT_*` environment overrides.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_f64("CONSISTENCY_POINTS_PER_DEVIATION") {
            self.consistency.points_per_deviation = v;
        }
        if let Some(v) = env_f64("CONSISTENCY_NEUTRAL_SCORE") {
            self.consistency.neutral_score = v;
        }
        if let Some(v) = env_f64("CONSISTENCY_OUTLIER_DEVIATION") {
            self.consistency.outlier_deviation = v;
        }
        if let Some(v) = env_f64("TIMELINESS_RESPONSE_GRACE_HOURS") {
            self.timeliness.response_grace_hours = v;
        }
        if let Some(v) = env_f64("TIMELINESS_COMPLETION_GRACE_HOURS") {
            self.timeliness.completion_grace_hours = v;
        }
        if let Some(v) = env_var("TRENDS_WINDOW").and_then(|s| s.parse::<usize>().ok()) {
            self.trends.window = v;
        }
        if let Some(weights) = env_var("RELIABILITY_WEIGHTS").and_then(|s| parse_weights(&s)) {
            let [consistency, timeliness, participation, quality, communication] = weights;
            self.reliability.weights.consistency = consistency;
            self.reliability.weights.timeliness = timeliness;
            self.reliability.weights.participation = participation;
            self.reliability.weights.quality = quality;
            self.reliability.weights.communication = communication;
        }
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{}{}", defaults::ENV_PREFIX, suffix)).ok()
}

fn env_f64(suffix: &str) -> Option<f64> {
    env_var(suffix).and_then(|s| s.trim().parse::<f64>().ok())
}

/// Parse `"30,25,20,15,10"` into the five reliability weights.
fn parse_weights(raw: &str) -> Option<[u32; 5]> {
    let parsed: Vec<u32> = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;
    parsed.try_into().ok()
}
