//! Composite reliability weights and the two classification tables.
//!
//! # Examples
//!
//! ```
//! use foresight_core::config::ReliabilityWeights;
//!
//! let weights = ReliabilityWeights::default();
//! assert_eq!(weights.total(), 100);
//! assert!(weights.validate().is_ok());
//!
//! let skewed = ReliabilityWeights { consistency: 31, ..Default::default() };
//! assert!(skewed.validate().is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use super::threshold::ThresholdTable;
use crate::constants::WEIGHT_TABLE_TOTAL;
use crate::errors::ConfigError;
use crate::models::{InvitationPriority, ReliabilityTier};

/// Weight of each sub-score in the overall score. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityWeights {
    pub consistency: u32,
    pub timeliness: u32,
    pub participation: u32,
    pub quality: u32,
    pub communication: u32,
}

impl Default for ReliabilityWeights {
    fn default() -> Self {
        Self {
            consistency: defaults::DEFAULT_CONSISTENCY_WEIGHT,
            timeliness: defaults::DEFAULT_TIMELINESS_WEIGHT,
            participation: defaults::DEFAULT_PARTICIPATION_WEIGHT,
            quality: defaults::DEFAULT_QUALITY_WEIGHT,
            communication: defaults::DEFAULT_COMMUNICATION_WEIGHT,
        }
    }
}

impl ReliabilityWeights {
    pub fn total(&self) -> u64 {
        [
            self.consistency,
            self.timeliness,
            self.participation,
            self.quality,
            self.communication,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let actual = self.total();
        if actual != WEIGHT_TABLE_TOTAL {
            return Err(ConfigError::WeightSumMismatch {
                table: "reliability".to_string(),
                actual,
                expected: WEIGHT_TABLE_TOTAL,
            });
        }
        Ok(())
    }
}

/// Reliability scoring configuration.
///
/// Tier and priority are read off the same overall score but keep their
/// own cut points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityConfig {
    pub weights: ReliabilityWeights,
    pub tiers: ThresholdTable<ReliabilityTier>,
    pub priorities: ThresholdTable<InvitationPriority>,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            weights: ReliabilityWeights::default(),
            tiers: ThresholdTable::at_least(vec![
                (ReliabilityTier::Unreliable, 0.0),
                (ReliabilityTier::Poor, defaults::DEFAULT_TIER_POOR),
                (ReliabilityTier::Average, defaults::DEFAULT_TIER_AVERAGE),
                (ReliabilityTier::Good, defaults::DEFAULT_TIER_GOOD),
                (ReliabilityTier::Excellent, defaults::DEFAULT_TIER_EXCELLENT),
            ]),
            priorities: ThresholdTable::at_least(vec![
                (InvitationPriority::Avoid, 0.0),
                (InvitationPriority::Low, defaults::DEFAULT_PRIORITY_LOW),
                (InvitationPriority::Medium, defaults::DEFAULT_PRIORITY_MEDIUM),
                (InvitationPriority::High, defaults::DEFAULT_PRIORITY_HIGH),
            ]),
        }
    }
}

impl ReliabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.tiers.validate("reliability.tiers")?;
        self.priorities.validate("reliability.priorities")?;
        Ok(())
    }

    /// Tier for an overall score. Scores under the lowest bound get the lowest tier.
    pub fn tier_for(&self, score: f64) -> ReliabilityTier {
        self.tiers.classify(score).unwrap_or(ReliabilityTier::Unreliable)
    }

    /// Invitation priority for an overall score.
    pub fn priority_for(&self, score: f64) -> InvitationPriority {
        self.priorities
            .classify(score)
            .unwrap_or(InvitationPriority::Avoid)
    }
}
