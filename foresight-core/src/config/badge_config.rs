use serde::{Deserialize, Serialize};

use super::defaults;
use super::threshold::ThresholdTable;
use crate::errors::ConfigError;
use crate::models::BadgeTier;

const TIERS: [BadgeTier; 4] = [
    BadgeTier::Bronze,
    BadgeTier::Silver,
    BadgeTier::Gold,
    BadgeTier::Platinum,
];

fn tiered(bounds: [f64; 4]) -> Vec<(BadgeTier, f64)> {
    TIERS.into_iter().zip(bounds).collect()
}

/// Tiered thresholds for the three badge families.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Lifetime average consistency score (higher is better).
    pub consistency: ThresholdTable<BadgeTier>,
    /// Lifetime average response hours (lower is better).
    pub speed: ThresholdTable<BadgeTier>,
    /// Completed study count (higher is better).
    pub participation: ThresholdTable<BadgeTier>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            consistency: ThresholdTable::at_least(tiered(defaults::DEFAULT_CONSISTENCY_BADGES)),
            speed: ThresholdTable::at_most(tiered(defaults::DEFAULT_SPEED_BADGE_HOURS)),
            participation: ThresholdTable::at_least(tiered(defaults::DEFAULT_PARTICIPATION_BADGES)),
        }
    }
}

impl BadgeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.consistency.validate("badges.consistency")?;
        self.speed.validate("badges.speed")?;
        self.participation.validate("badges.participation")?;
        Ok(())
    }
}
