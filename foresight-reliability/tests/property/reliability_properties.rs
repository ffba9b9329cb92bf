use foresight_core::config::{ConsistencyConfig, ReliabilityConfig, ReliabilityWeights};
use foresight_core::models::{InfluenceStrength, SubScores, VoteRecord};
use foresight_reliability::composite::overall_score;
use foresight_reliability::{score_consistency, score_expert_reliability};
use proptest::prelude::*;

const IDS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_vote() -> impl Strategy<Value = VoteRecord> {
    (0usize..3, 0usize..4, 0usize..4, 0u8..=3).prop_map(|(e, a, b, v)| {
        let strength = match v {
            0 => InfluenceStrength::None,
            1 => InfluenceStrength::Weak,
            2 => InfluenceStrength::Moderate,
            _ => InfluenceStrength::Strong,
        };
        VoteRecord::new(format!("e{e}"), IDS[a], IDS[b], "r1", strength)
    })
}

fn arb_weights() -> impl Strategy<Value = ReliabilityWeights> {
    // Four cut points on 0..=100 give five weights summing to 100.
    proptest::collection::vec(0u32..=100, 4).prop_map(|mut cuts| {
        cuts.sort_unstable();
        ReliabilityWeights {
            consistency: cuts[0],
            timeliness: cuts[1] - cuts[0],
            participation: cuts[2] - cuts[1],
            quality: cuts[3] - cuts[2],
            communication: 100 - cuts[3],
        }
    })
}

fn arb_sub_scores() -> impl Strategy<Value = SubScores> {
    (
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
    )
        .prop_map(|(c, t, p, q, m)| SubScores {
            consistency: c,
            timeliness: t,
            participation: p,
            quality: q,
            communication: m,
        })
}

proptest! {
    #[test]
    fn consistency_stays_in_range(votes in proptest::collection::vec(arb_vote(), 0..40)) {
        let mine: Vec<_> = votes.iter().filter(|v| v.expert_id.as_str() == "e0").cloned().collect();
        let report = score_consistency(&"e0".into(), &mine, &votes, &ConsistencyConfig::default());
        prop_assert!((0.0..=100.0).contains(&report.score));
        prop_assert!(report.outlier_count <= report.compared_relations);
    }

    #[test]
    fn reliability_stays_in_range(weights in arb_weights(), sub in arb_sub_scores()) {
        let config = ReliabilityConfig { weights, ..Default::default() };
        let assessment = score_expert_reliability(&sub, &config).unwrap();
        prop_assert!(assessment.overall <= 100);
    }

    #[test]
    fn overall_is_monotonic_in_each_sub_score(sub in arb_sub_scores(), bump in 0.0f64..50.0) {
        let weights = ReliabilityWeights::default();
        let better = SubScores { consistency: (sub.consistency + bump).min(100.0), ..sub };
        prop_assert!(overall_score(&better, &weights) >= overall_score(&sub, &weights));
    }
}
