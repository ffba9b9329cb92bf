//! Composite Reliability Scorer.
//!
//! ```text
//! overall = round(clamp(Σ sub_score × weight / 100, 0, 100))
//! ```
//!
//! The overall score is read twice: once against the tier table and once
//! against the invitation-priority table. The two tables have their own
//! cut points.
//!
//! # Examples
//!
//! ```
//! use foresight_core::config::ReliabilityConfig;
//! use foresight_core::models::{InvitationPriority, ReliabilityTier, SubScores};
//! use foresight_reliability::CompositeScorer;
//!
//! let scorer = CompositeScorer::new(ReliabilityConfig::default()).unwrap();
//! let sub = SubScores {
//!     consistency: 90.0,
//!     timeliness: 80.0,
//!     participation: 70.0,
//!     quality: 60.0,
//!     communication: 50.0,
//! };
//! // (2700 + 2000 + 1400 + 900 + 500) / 100 = 75
//! let assessment = scorer.assess(&sub);
//! assert_eq!(assessment.overall, 75);
//! assert_eq!(assessment.tier, ReliabilityTier::Good);
//! assert_eq!(assessment.priority, InvitationPriority::Medium);
//! ```

use tracing::debug;

use foresight_core::config::{ReliabilityConfig, ReliabilityWeights};
use foresight_core::constants::{SCORE_CEILING, WEIGHT_TABLE_TOTAL};
use foresight_core::errors::ConfigError;
use foresight_core::models::{ReliabilityAssessment, SubScores};

/// Scores sub-score sets against a weight table validated at construction.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    config: ReliabilityConfig,
}

impl CompositeScorer {
    /// Validate the weight and threshold tables once, up front.
    pub fn new(config: ReliabilityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReliabilityConfig {
        &self.config
    }

    /// Overall score, tier, and invitation priority.
    pub fn assess(&self, sub_scores: &SubScores) -> ReliabilityAssessment {
        let overall = overall_score(sub_scores, &self.config.weights);
        let assessment = ReliabilityAssessment {
            overall,
            tier: self.config.tier_for(overall as f64),
            priority: self.config.priority_for(overall as f64),
        };
        debug!(
            overall,
            tier = %assessment.tier,
            priority = %assessment.priority,
            "reliability assessed"
        );
        assessment
    }
}

/// One-shot scoring: validates `config` and assesses `sub_scores`.
///
/// Fails only when the weight table does not sum to 100 or a threshold
/// table is not monotonic.
pub fn score_expert_reliability(
    sub_scores: &SubScores,
    config: &ReliabilityConfig,
) -> Result<ReliabilityAssessment, ConfigError> {
    config.validate()?;
    Ok(CompositeScorer {
        config: config.clone(),
    }
    .assess(sub_scores))
}

/// Weighted overall score, clamped and rounded to the nearest integer.
pub fn overall_score(sub_scores: &SubScores, weights: &ReliabilityWeights) -> u32 {
    let weighted = sub_scores.consistency * weights.consistency as f64
        + sub_scores.timeliness * weights.timeliness as f64
        + sub_scores.participation * weights.participation as f64
        + sub_scores.quality * weights.quality as f64
        + sub_scores.communication * weights.communication as f64;

    let score = (weighted / WEIGHT_TABLE_TOTAL as f64).clamp(0.0, SCORE_CEILING);
    if score.is_nan() {
        return 0;
    }
    score.round() as u32
}
