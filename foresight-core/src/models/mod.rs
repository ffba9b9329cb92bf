//! Data model shared by the structural and reliability pipelines.

pub mod classification;
pub mod expert_metrics;
pub mod ids;
pub mod recommendation;
pub mod reputation;
pub mod variable;
pub mod vote;

pub use classification::{ClassifiedVariable, IndirectClassification, ResultSet, StructuralRole};
pub use expert_metrics::{
    ActivityFacts, ExpertStudyMetrics, InvitationPriority, ParticipationFacts, QualityFacts,
    ReliabilityAssessment, ReliabilityTier, SubScores, TimeFacts,
};
pub use ids::{ExpertId, StudyId, VariableId};
pub use recommendation::{Recommendation, Severity};
pub use reputation::{
    Badge, BadgeFamily, BadgeTier, ExpertGlobalMetrics, LifetimeAggregate, MetricTrends,
    TrendsAndBadges,
};
pub use variable::Variable;
pub use vote::{InfluenceStrength, RelationKey, VoteRecord};
