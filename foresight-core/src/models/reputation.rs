//! Longitudinal reputation: lifetime aggregates, trends, and badges.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::expert_metrics::{InvitationPriority, ReliabilityTier};
use super::ids::ExpertId;

/// Deltas between the recent and the older cohort of study records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricTrends {
    /// recent − older overall score.
    pub score_delta: f64,
    /// recent − older consistency score.
    pub consistency_delta: f64,
    /// older − recent response hours; positive means getting faster.
    pub speed_delta: f64,
}

impl MetricTrends {
    pub fn is_flat(&self) -> bool {
        self.score_delta == 0.0 && self.consistency_delta == 0.0 && self.speed_delta == 0.0
    }
}

/// Independent badge families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BadgeFamily {
    Consistency,
    Speed,
    Participation,
}

impl fmt::Display for BadgeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Consistency => "consistency",
            Self::Speed => "speed",
            Self::Participation => "participation",
        };
        f.write_str(s)
    }
}

/// Badge tier, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// A freshly minted recognition. Deduplication is a storage concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Badge {
    pub id: String,
    pub expert_id: ExpertId,
    pub family: BadgeFamily,
    pub tier: BadgeTier,
    /// The lifetime value that met the threshold.
    pub earned_value: f64,
    pub awarded_at: DateTime<Utc>,
}

/// Lifetime figures rolled up from many per-study records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifetimeAggregate {
    pub studies_invited: usize,
    pub studies_completed: usize,
    pub average_score: f64,
    pub average_consistency: f64,
    /// Mean invitation-to-response hours over records that have a response.
    pub average_response_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendsAndBadges {
    pub trends: MetricTrends,
    pub badges: Vec<Badge>,
}

/// Long-lived per-expert record, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpertGlobalMetrics {
    pub expert_id: ExpertId,
    pub lifetime: LifetimeAggregate,
    /// Lifetime average score rounded to an integer.
    pub lifetime_score: u32,
    pub tier: ReliabilityTier,
    pub priority: InvitationPriority,
    pub trends: MetricTrends,
    pub badges: Vec<Badge>,
    pub calculated_at: DateTime<Utc>,
}
