//! Pairwise vote records: one expert's judgment for one ordered variable pair.
//!
//! # Examples
//!
//! ```
//! use foresight_core::models::{InfluenceStrength, VoteRecord};
//!
//! let vote = VoteRecord::new("e1", "a", "b", "round-1", InfluenceStrength::Strong);
//! assert_eq!(vote.value.weight(), 3);
//! assert!(!vote.is_self_influence());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{ExpertId, VariableId};
use crate::constants::{CONFIDENCE_MAX, CONFIDENCE_MIN};
use crate::errors::MatrixError;

/// Ordinal influence strength. Serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InfluenceStrength {
    None = 0,
    Weak = 1,
    Moderate = 2,
    Strong = 3,
}

impl InfluenceStrength {
    /// Integer weight used when summing into the aggregate matrix.
    pub fn weight(self) -> u64 {
        self as u64
    }

    pub fn as_f64(self) -> f64 {
        self as u8 as f64
    }
}

impl TryFrom<u8> for InfluenceStrength {
    type Error = MatrixError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Weak),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Strong),
            _ => Err(MatrixError::InvalidInfluenceValue { value }),
        }
    }
}

impl From<InfluenceStrength> for u8 {
    fn from(value: InfluenceStrength) -> Self {
        value as u8
    }
}

/// An append-only fact: one expert, one ordered pair, one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteRecord {
    pub expert_id: ExpertId,
    /// Influencing variable (matrix row).
    pub variable_a_id: VariableId,
    /// Influenced variable (matrix column).
    pub variable_b_id: VariableId,
    /// Voting round label.
    pub round: String,
    #[ts(type = "number")]
    pub value: InfluenceStrength,
    /// Self-reported confidence, 1–5.
    #[serde(default)]
    pub confidence: Option<u8>,
    /// Seconds the expert spent on this judgment.
    #[serde(default)]
    pub time_spent_secs: Option<f64>,
}

impl VoteRecord {
    pub fn new(
        expert_id: impl Into<ExpertId>,
        variable_a_id: impl Into<VariableId>,
        variable_b_id: impl Into<VariableId>,
        round: impl Into<String>,
        value: InfluenceStrength,
    ) -> Self {
        Self {
            expert_id: expert_id.into(),
            variable_a_id: variable_a_id.into(),
            variable_b_id: variable_b_id.into(),
            round: round.into(),
            value,
            confidence: None,
            time_spent_secs: None,
        }
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_time_spent(mut self, secs: f64) -> Self {
        self.time_spent_secs = Some(secs);
        self
    }

    /// A vote on the diagonal. Never summed into the matrix.
    pub fn is_self_influence(&self) -> bool {
        self.variable_a_id == self.variable_b_id
    }

    /// The relation this vote judges: ordered pair plus round.
    pub fn relation_key(&self) -> RelationKey<'_> {
        RelationKey {
            variable_a: self.variable_a_id.as_str(),
            variable_b: self.variable_b_id.as_str(),
            round: &self.round,
        }
    }

    /// Confidence rating if present and on the 1–5 scale.
    pub fn valid_confidence(&self) -> Option<u8> {
        self.confidence
            .filter(|c| (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(c))
    }
}

/// Borrowed key identifying a relation across experts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationKey<'a> {
    pub variable_a: &'a str,
    pub variable_b: &'a str,
    pub round: &'a str,
}
