//! Consistency Scorer: how closely one expert tracks the panel.
//!
//! For every relation (ordered pair + round) the expert voted on, the
//! peer mean is the mean value given by *other* experts on that relation.
//!
//! ```text
//! deviation = |own − peer_mean|
//! score     = clamp(100 − points_per_deviation × mean(deviation), 0, 100)
//! ```
//!
//! Relations without a peer vote are excluded, not penalized. With no
//! comparable relation at all the score is the neutral midpoint.

use std::collections::HashMap;

use foresight_core::config::ConsistencyConfig;
use foresight_core::constants::SCORE_CEILING;
use foresight_core::models::{ExpertId, RelationKey, VoteRecord};

/// Outcome of comparing one expert against the peer panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    pub score: f64,
    /// Expert votes that had at least one peer vote on the same relation.
    pub compared_relations: usize,
    /// `None` when nothing was compared.
    pub average_deviation: Option<f64>,
    /// Compared votes whose deviation reached the outlier margin.
    pub outlier_count: usize,
}

impl ConsistencyReport {
    fn neutral(config: &ConsistencyConfig) -> Self {
        Self {
            score: config.neutral_score,
            compared_relations: 0,
            average_deviation: None,
            outlier_count: 0,
        }
    }
}

/// Score `expert_id`'s votes against every other expert in `all_votes`.
///
/// `all_votes` may include the expert's own votes; they are never counted
/// as peer opinions. Self-influence votes are ignored on both sides.
pub fn score_consistency(
    expert_id: &ExpertId,
    expert_votes: &[VoteRecord],
    all_votes: &[VoteRecord],
    config: &ConsistencyConfig,
) -> ConsistencyReport {
    if expert_votes.is_empty() {
        return ConsistencyReport::neutral(config);
    }

    let mut peers: HashMap<RelationKey<'_>, (f64, usize)> = HashMap::new();
    for vote in all_votes {
        if &vote.expert_id == expert_id || vote.is_self_influence() {
            continue;
        }
        let entry = peers.entry(vote.relation_key()).or_insert((0.0, 0));
        entry.0 += vote.value.as_f64();
        entry.1 += 1;
    }

    let mut total_deviation = 0.0;
    let mut compared = 0usize;
    let mut outliers = 0usize;
    for vote in expert_votes.iter().filter(|v| !v.is_self_influence()) {
        let Some(&(sum, count)) = peers.get(&vote.relation_key()) else {
            continue;
        };
        let peer_mean = sum / count as f64;
        let deviation = (vote.value.as_f64() - peer_mean).abs();
        total_deviation += deviation;
        compared += 1;
        if deviation >= config.outlier_deviation {
            outliers += 1;
        }
    }

    if compared == 0 {
        return ConsistencyReport::neutral(config);
    }

    let average_deviation = total_deviation / compared as f64;
    let score = (SCORE_CEILING - config.points_per_deviation * average_deviation)
        .clamp(0.0, SCORE_CEILING);

    ConsistencyReport {
        score,
        compared_relations: compared,
        average_deviation: Some(average_deviation),
        outlier_count: outliers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::models::InfluenceStrength;

    fn v(expert: &str, a: &str, b: &str, value: InfluenceStrength) -> VoteRecord {
        VoteRecord::new(expert, a, b, "r1", value)
    }

    #[test]
    fn deviation_against_peer_mean() {
        let all = vec![
            v("me", "a", "b", InfluenceStrength::Strong),
            v("p1", "a", "b", InfluenceStrength::Weak),
            v("p2", "a", "b", InfluenceStrength::Moderate),
        ];
        let mine: Vec<_> = all.iter().filter(|x| x.expert_id.as_str() == "me").cloned().collect();
        let report = score_consistency(&"me".into(), &mine, &all, &ConsistencyConfig::default());
        // peer mean 1.5, deviation 1.5 → 100 − 37.5
        assert_eq!(report.compared_relations, 1);
        assert_eq!(report.average_deviation, Some(1.5));
        assert_eq!(report.score, 62.5);
        assert_eq!(report.outlier_count, 1);
    }

    #[test]
    fn max_deviation_floors_at_twenty_five() {
        let all = vec![v("me", "a", "b", InfluenceStrength::Strong), v("p1", "a", "b", InfluenceStrength::None)];
        let report = score_consistency(&"me".into(), &all[..1], &all, &ConsistencyConfig::default());
        assert_eq!(report.score, 25.0);
    }

    #[test]
    fn steeper_policy_clamps_at_zero() {
        let config = ConsistencyConfig {
            points_per_deviation: 50.0,
            ..Default::default()
        };
        let all = vec![v("me", "a", "b", InfluenceStrength::Strong), v("p1", "a", "b", InfluenceStrength::None)];
        let report = score_consistency(&"me".into(), &all[..1], &all, &config);
        assert_eq!(report.score, 0.0);
    }
}
