//! ReputationEngine: trends, badges, and the global record.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use foresight_core::config::{BadgeConfig, ForesightConfig, ReliabilityConfig, TrendConfig};
use foresight_core::constants::SCORE_CEILING;
use foresight_core::errors::ConfigError;
use foresight_core::models::{
    ExpertGlobalMetrics, ExpertId, ExpertStudyMetrics, LifetimeAggregate, TrendsAndBadges,
};

use crate::aggregate::lifetime_aggregate;
use crate::badges::award_badges;
use crate::trends::compute_trends;

#[derive(Debug, Clone)]
pub struct ReputationEngine {
    badges: BadgeConfig,
    trends: TrendConfig,
    reliability: ReliabilityConfig,
}

impl ReputationEngine {
    pub fn new(config: &ForesightConfig) -> Result<Self, ConfigError> {
        config.badges.validate()?;
        config.trends.validate()?;
        config.reliability.validate()?;
        Ok(Self {
            badges: config.badges.clone(),
            trends: config.trends.clone(),
            reliability: config.reliability.clone(),
        })
    }

    /// Trend deltas over `history` and badges for `lifetime`.
    #[instrument(skip(self, history, lifetime), fields(records = history.len()))]
    pub fn compute_trends_and_badges(
        &self,
        expert_id: &ExpertId,
        history: &[ExpertStudyMetrics],
        lifetime: &LifetimeAggregate,
        now: DateTime<Utc>,
    ) -> TrendsAndBadges {
        let trends = compute_trends(history, self.trends.window);
        let badges = award_badges(expert_id, lifetime, &self.badges, now);
        debug!(
            score_delta = trends.score_delta,
            speed_delta = trends.speed_delta,
            badges = badges.len(),
            "trends and badges computed"
        );
        TrendsAndBadges { trends, badges }
    }

    /// Recompute the whole global record from `history`.
    ///
    /// Tier and priority are read off the rounded lifetime average score
    /// with the same tables used per study.
    pub fn global_metrics(
        &self,
        expert_id: &ExpertId,
        history: &[ExpertStudyMetrics],
        now: DateTime<Utc>,
    ) -> ExpertGlobalMetrics {
        let foreign = history.iter().filter(|m| &m.expert_id != expert_id).count();
        if foreign > 0 {
            debug!(expert = %expert_id, foreign, "history contains records of other experts");
        }

        let lifetime = lifetime_aggregate(history);
        let TrendsAndBadges { trends, badges } =
            self.compute_trends_and_badges(expert_id, history, &lifetime, now);

        let lifetime_score = lifetime.average_score.clamp(0.0, SCORE_CEILING).round() as u32;
        ExpertGlobalMetrics {
            expert_id: expert_id.clone(),
            tier: self.reliability.tier_for(lifetime_score as f64),
            priority: self.reliability.priority_for(lifetime_score as f64),
            lifetime,
            lifetime_score,
            trends,
            badges,
            calculated_at: now,
        }
    }
}
