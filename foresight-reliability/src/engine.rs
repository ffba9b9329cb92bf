//! ExpertMetricsEngine: every per-study sub-score, the composite, and
//! recommendations for one expert in one pass.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use foresight_core::config::{
    ConsistencyConfig, ForesightConfig, ParticipationConfig, TimelinessConfig,
};
use foresight_core::constants::SCORE_CEILING;
use foresight_core::errors::ConfigError;
use foresight_core::models::{
    ActivityFacts, ExpertId, ExpertStudyMetrics, QualityFacts, StudyId, SubScores, VoteRecord,
};

use crate::composite::CompositeScorer;
use crate::consistency::score_consistency;
use crate::participation::{participation_facts, participation_score};
use crate::recommendations::{self, RecommendationContext};
use crate::timeliness::{derive_time_facts, timeliness_score};

/// Everything known about one expert on one closed study.
#[derive(Debug, Clone)]
pub struct ExpertStudyInput<'a> {
    pub expert_id: &'a ExpertId,
    pub study_id: &'a StudyId,
    /// The expert's own votes on this study.
    pub expert_votes: &'a [VoteRecord],
    /// Every vote on this study; the expert's own votes may be included.
    pub all_votes: &'a [VoteRecord],
    pub activity: &'a ActivityFacts,
    /// Relations the expert was asked to vote on. 0 means "unknown".
    pub expected_relations: usize,
}

/// Computes [`ExpertStudyMetrics`] from validated configuration.
#[derive(Debug, Clone)]
pub struct ExpertMetricsEngine {
    consistency: ConsistencyConfig,
    timeliness: TimelinessConfig,
    participation: ParticipationConfig,
    scorer: CompositeScorer,
}

impl ExpertMetricsEngine {
    pub fn new(config: &ForesightConfig) -> Result<Self, ConfigError> {
        config.consistency.validate()?;
        config.timeliness.validate()?;
        config.participation.validate()?;
        Ok(Self {
            consistency: config.consistency.clone(),
            timeliness: config.timeliness.clone(),
            participation: config.participation.clone(),
            scorer: CompositeScorer::new(config.reliability.clone())?,
        })
    }

    pub fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    /// Evaluate with the current wall clock as `calculated_at`.
    pub fn evaluate(&self, input: ExpertStudyInput<'_>) -> ExpertStudyMetrics {
        self.evaluate_at(input, Utc::now())
    }

    /// Evaluate with an explicit calculation timestamp.
    #[instrument(skip_all, fields(expert = %input.expert_id, study = %input.study_id))]
    pub fn evaluate_at(
        &self,
        input: ExpertStudyInput<'_>,
        now: DateTime<Utc>,
    ) -> ExpertStudyMetrics {
        let consistency = score_consistency(
            input.expert_id,
            input.expert_votes,
            input.all_votes,
            &self.consistency,
        );

        let time = derive_time_facts(input.activity, input.expert_votes);
        let participation = participation_facts(input.activity);

        let quality = QualityFacts {
            consistency_score: consistency.score,
            compared_relations: consistency.compared_relations,
            average_deviation: consistency.average_deviation,
            average_confidence: average_confidence(input.expert_votes),
            outlier_count: consistency.outlier_count,
            completeness_ratio: completeness(input.expert_votes, input.expected_relations),
        };

        let sub_scores = SubScores {
            consistency: consistency.score,
            timeliness: timeliness_score(&time, &self.timeliness),
            participation: participation_score(&participation, &self.participation),
            quality: external(input.activity.quality_score),
            communication: external(input.activity.communication_score),
        };

        let assessment = self.scorer.assess(&sub_scores);
        let recommendations = recommendations::generate(&RecommendationContext {
            sub_scores: &sub_scores,
            quality: &quality,
            time: &time,
            tier: assessment.tier,
        });

        debug!(
            consistency = sub_scores.consistency,
            timeliness = sub_scores.timeliness,
            participation = sub_scores.participation,
            overall = assessment.overall,
            recommendations = recommendations.len(),
            "expert study metrics computed"
        );

        ExpertStudyMetrics {
            expert_id: input.expert_id.clone(),
            study_id: input.study_id.clone(),
            time,
            quality,
            participation,
            sub_scores,
            overall_score: assessment.overall,
            tier: assessment.tier,
            priority: assessment.priority,
            recommendations,
            calculated_at: now,
        }
    }
}

fn external(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, SCORE_CEILING)
}

fn average_confidence(votes: &[VoteRecord]) -> Option<f64> {
    let levels: Vec<f64> = votes
        .iter()
        .filter_map(VoteRecord::valid_confidence)
        .map(f64::from)
        .collect();
    if levels.is_empty() {
        None
    } else {
        Some(levels.iter().sum::<f64>() / levels.len() as f64)
    }
}

fn completeness(votes: &[VoteRecord], expected: usize) -> f64 {
    if expected == 0 {
        return 1.0;
    }
    let distinct: HashSet<_> = votes
        .iter()
        .filter(|v| !v.is_self_influence())
        .map(VoteRecord::relation_key)
        .collect();
    (distinct.len() as f64 / expected as f64).min(1.0)
}
