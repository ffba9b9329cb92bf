use foresight_core::models::{InfluenceStrength, StructuralRole, Variable, VoteRecord};
use foresight_matrix::StructuralEngine;
use proptest::prelude::*;

const IDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn study_variables(n: usize) -> Vec<Variable> {
    IDS[..n]
        .iter()
        .enumerate()
        .map(|(i, id)| Variable::new(*id, *id, i as u32))
        .collect()
}

fn arb_strength() -> impl Strategy<Value = InfluenceStrength> {
    prop_oneof![
        Just(InfluenceStrength::None),
        Just(InfluenceStrength::Weak),
        Just(InfluenceStrength::Moderate),
        Just(InfluenceStrength::Strong),
    ]
}

/// Votes over the full id pool, including the diagonal and ids outside
/// the study, so malformed input is exercised too.
fn arb_votes() -> impl Strategy<Value = Vec<VoteRecord>> {
    prop::collection::vec(
        (0usize..3, 0usize..IDS.len(), 0usize..IDS.len(), 0usize..2, arb_strength()),
        0..60,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(expert, a, b, round, value)| {
                VoteRecord::new(
                    format!("e{expert}").as_str(),
                    IDS[a],
                    IDS[b],
                    format!("r{round}"),
                    value,
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn order_independent(n in 0usize..=5, votes in arb_votes(), seed in any::<u64>()) {
        let vars = study_variables(n);
        let engine = StructuralEngine::new();
        let forward = engine.build_and_classify(&vars, &votes);

        let mut shuffled = votes.clone();
        shuffled.reverse();
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
        }
        let permuted = engine.build_and_classify(&vars, &shuffled);
        prop_assert_eq!(forward, permuted);
    }

    #[test]
    fn diagonal_always_zero(n in 0usize..=6, votes in arb_votes()) {
        let vars = study_variables(n);
        let analysis = StructuralEngine::new().analyze(&vars, &votes);
        for i in 0..n {
            prop_assert_eq!(analysis.matrix.get(i, i), Some(0));
        }
    }

    #[test]
    fn every_variable_gets_one_role(n in 0usize..=6, votes in arb_votes()) {
        let vars = study_variables(n);
        let result = StructuralEngine::new().build_and_classify(&vars, &votes);
        prop_assert_eq!(result.variables.len(), n);
        if n == 1 {
            prop_assert_eq!(result.variables[0].role, StructuralRole::Autonomous);
        }
        prop_assert_eq!(result.total_votes + result.skipped_votes, votes.len());
    }

    #[test]
    fn ranks_are_a_permutation(n in 0usize..=6, votes in arb_votes()) {
        let vars = study_variables(n);
        let result = StructuralEngine::new().build_and_classify(&vars, &votes);

        let mut ranks: Vec<u32> = result.variables.iter().map(|v| v.rank).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=n as u32).collect();
        prop_assert_eq!(ranks, expected);

        if let Some(top) = result.variables.iter().find(|v| v.rank == 1) {
            let max = result.variables.iter().map(|v| v.motricity).max().unwrap_or(0);
            prop_assert_eq!(top.motricity, max);
        }
    }
}
