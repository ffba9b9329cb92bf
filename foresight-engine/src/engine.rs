//! ForesightEngine: facade over the structural, reliability, and
//! reputation engines.

use std::path::Path;

use chrono::{DateTime, Utc};

use foresight_core::config::ReliabilityConfig;
use foresight_core::errors::{ConfigError, ForesightResult, MatrixError};
use foresight_core::models::{
    ExpertGlobalMetrics, ExpertId, ExpertStudyMetrics, IndirectClassification, LifetimeAggregate,
    ReliabilityAssessment, ResultSet, SubScores, TrendsAndBadges, Variable, VoteRecord,
};
use foresight_core::ForesightConfig;
use foresight_matrix::StructuralEngine;
use foresight_observability::tracing_setup::events;
use foresight_observability::{reliability_span, reputation_span, structural_span};
use foresight_reliability::{
    score_consistency, ConsistencyReport, ExpertMetricsEngine, ExpertStudyInput,
};
use foresight_reputation::ReputationEngine;

/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ForesightEngine {
    config: ForesightConfig,
    structural: StructuralEngine,
    metrics: ExpertMetricsEngine,
    reputation: ReputationEngine,
}

impl ForesightEngine {
    /// Validate `config` once and build every sub-engine.
    pub fn new(config: ForesightConfig) -> ForesightResult<Self> {
        config.validate()?;
        let metrics = ExpertMetricsEngine::new(&config)?;
        let reputation = ReputationEngine::new(&config)?;
        Ok(Self {
            config,
            structural: StructuralEngine::new(),
            metrics,
            reputation,
        })
    }

    /// Load `foresight.toml` under `root` (if present) plus env overrides.
    pub fn from_root(root: &Path) -> ForesightResult<Self> {
        Self::new(ForesightConfig::load(root)?)
    }

    pub fn config(&self) -> &ForesightConfig {
        &self.config
    }

    // ── structural ──────────────────────────────────────────────────────

    /// Matrix, indicators, classification, and ranking. Never fails.
    pub fn build_and_classify(&self, variables: &[Variable], votes: &[VoteRecord]) -> ResultSet {
        let span = structural_span!(variables.len(), votes.len());
        let _guard = span.enter();

        let result = self.structural.build_and_classify(variables, votes);
        events::structure_classified(result.variables.len(), result.total_votes, result.skipped_votes);
        result
    }

    /// The study's variables with `category` filled in.
    pub fn categorize_variables(&self, variables: &[Variable], votes: &[VoteRecord]) -> Vec<Variable> {
        self.build_and_classify(variables, votes).categorize(variables)
    }

    /// Classification on indirect influence (`matrix^power`).
    pub fn classify_indirect(
        &self,
        variables: &[Variable],
        votes: &[VoteRecord],
        power: u32,
    ) -> Result<Vec<IndirectClassification>, MatrixError> {
        let span = structural_span!(variables.len(), votes.len());
        let _guard = span.enter();
        self.structural.classify_indirect(variables, votes, power)
    }

    // ── reliability ─────────────────────────────────────────────────────

    /// Consistency score on [0, 100]; 50 when nothing is comparable.
    pub fn score_expert_consistency(
        &self,
        expert_id: &ExpertId,
        expert_votes: &[VoteRecord],
        all_votes: &[VoteRecord],
    ) -> f64 {
        self.consistency_report(expert_id, expert_votes, all_votes).score
    }

    /// Consistency score with comparison counts and outliers.
    pub fn consistency_report(
        &self,
        expert_id: &ExpertId,
        expert_votes: &[VoteRecord],
        all_votes: &[VoteRecord],
    ) -> ConsistencyReport {
        score_consistency(expert_id, expert_votes, all_votes, &self.config.consistency)
    }

    /// Composite score under the configured weights, validated at setup.
    pub fn score_expert_reliability(&self, sub_scores: &SubScores) -> ReliabilityAssessment {
        self.metrics.scorer().assess(sub_scores)
    }

    /// Composite score under an ad-hoc weight table.
    pub fn score_expert_reliability_with(
        &self,
        sub_scores: &SubScores,
        config: &ReliabilityConfig,
    ) -> Result<ReliabilityAssessment, ConfigError> {
        foresight_reliability::score_expert_reliability(sub_scores, config)
    }

    /// Full per-study metrics record, stamped now.
    pub fn evaluate_expert(&self, input: ExpertStudyInput<'_>) -> ExpertStudyMetrics {
        self.evaluate_expert_at(input, Utc::now())
    }

    pub fn evaluate_expert_at(
        &self,
        input: ExpertStudyInput<'_>,
        now: DateTime<Utc>,
    ) -> ExpertStudyMetrics {
        let span = reliability_span!(input.expert_id, input.study_id);
        let _guard = span.enter();

        let metrics = self.metrics.evaluate_at(input, now);
        events::expert_evaluated(
            &metrics.expert_id,
            &metrics.study_id,
            metrics.overall_score,
            metrics.tier,
        );
        metrics
    }

    // ── reputation ──────────────────────────────────────────────────────

    /// Trends over `history` and badges for `lifetime`, stamped now.
    pub fn compute_trends_and_badges(
        &self,
        expert_id: &ExpertId,
        history: &[ExpertStudyMetrics],
        lifetime: &LifetimeAggregate,
    ) -> TrendsAndBadges {
        self.compute_trends_and_badges_at(expert_id, history, lifetime, Utc::now())
    }

    pub fn compute_trends_and_badges_at(
        &self,
        expert_id: &ExpertId,
        history: &[ExpertStudyMetrics],
        lifetime: &LifetimeAggregate,
        now: DateTime<Utc>,
    ) -> TrendsAndBadges {
        let span = reputation_span!(expert_id, history.len());
        let _guard = span.enter();
        self.reputation
            .compute_trends_and_badges(expert_id, history, lifetime, now)
    }

    /// Recompute the expert's global record from their full history.
    pub fn global_metrics(
        &self,
        expert_id: &ExpertId,
        history: &[ExpertStudyMetrics],
        now: DateTime<Utc>,
    ) -> ExpertGlobalMetrics {
        let span = reputation_span!(expert_id, history.len());
        let _guard = span.enter();

        let global = self.reputation.global_metrics(expert_id, history, now);
        events::reputation_recomputed(expert_id, global.lifetime_score, global.badges.len());
        global
    }
}
