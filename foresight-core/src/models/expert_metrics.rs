//! Per-(expert, study) metrics record and the facts it is built from.
//!
//! A record is created after a study's voting closes. Recalculation fully
//! replaces the prior record; nothing here is merged incrementally.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{ExpertId, StudyId};
use super::recommendation::Recommendation;

/// Qualitative reliability bucket, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityTier {
    Unreliable,
    Poor,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for ReliabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unreliable => "unreliable",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        };
        f.write_str(s)
    }
}

/// Whether to invite the expert to future studies, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvitationPriority {
    Avoid,
    Low,
    Medium,
    High,
}

impl fmt::Display for InvitationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Avoid => "AVOID",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Raw activity facts supplied by session/activity tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityFacts {
    pub invited_at: DateTime<Utc>,
    #[serde(default)]
    pub first_response_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Share of invitations accepted, 0.0–1.0.
    pub acceptance_rate: f64,
    /// Share of accepted studies completed, 0.0–1.0.
    pub completion_rate: f64,
    /// Share of completions delivered before the deadline, 0.0–1.0.
    pub on_time_rate: f64,
    /// Share of messages answered, 0.0–1.0.
    pub responsiveness: f64,
    /// Externally tracked quality score, 0–100.
    pub quality_score: f64,
    /// Externally tracked communication score, 0–100.
    pub communication_score: f64,
}

impl ActivityFacts {
    /// Facts for an expert who was invited and has done nothing yet.
    pub fn invited(invited_at: DateTime<Utc>) -> Self {
        Self {
            invited_at,
            first_response_at: None,
            started_at: None,
            completed_at: None,
            acceptance_rate: 0.0,
            completion_rate: 0.0,
            on_time_rate: 0.0,
            responsiveness: 0.0,
            quality_score: 0.0,
            communication_score: 0.0,
        }
    }
}

/// Timestamps plus the delays derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeFacts {
    pub invited_at: DateTime<Utc>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Hours from invitation to first response.
    pub response_delay_hours: Option<f64>,
    /// Hours from start (or invitation) to completion.
    pub completion_hours: Option<f64>,
    /// Mean seconds spent per vote, over votes that report it.
    pub average_vote_secs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityFacts {
    pub consistency_score: f64,
    /// Relations that had at least one peer vote.
    pub compared_relations: usize,
    pub average_deviation: Option<f64>,
    pub average_confidence: Option<f64>,
    /// Relations where this expert deviated from the peer mean by the outlier margin or more.
    pub outlier_count: usize,
    /// Distinct relations voted over relations expected, capped at 1.0.
    pub completeness_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParticipationFacts {
    pub acceptance_rate: f64,
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub responsiveness: f64,
}

/// The five named sub-scores, each on 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubScores {
    pub consistency: f64,
    pub timeliness: f64,
    pub participation: f64,
    pub quality: f64,
    pub communication: f64,
}

/// Composite result: one integer score and its two classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReliabilityAssessment {
    /// Weighted overall score, rounded, 0–100.
    pub overall: u32,
    pub tier: ReliabilityTier,
    pub priority: InvitationPriority,
}

/// Metrics for one expert on one study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpertStudyMetrics {
    pub expert_id: ExpertId,
    pub study_id: StudyId,
    pub time: TimeFacts,
    pub quality: QualityFacts,
    pub participation: ParticipationFacts,
    pub sub_scores: SubScores,
    pub overall_score: u32,
    pub tier: ReliabilityTier,
    pub priority: InvitationPriority,
    pub recommendations: Vec<Recommendation>,
    pub calculated_at: DateTime<Utc>,
}

impl ExpertStudyMetrics {
    /// Whether the expert finished voting on this study.
    pub fn is_completed(&self) -> bool {
        self.time.completed_at.is_some()
    }
}
