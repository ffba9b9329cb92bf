use foresight_core::config::BadgeConfig;
use foresight_core::models::{BadgeFamily, ExpertStudyMetrics, LifetimeAggregate};
use foresight_reputation::{award_badges, compute_trends};
use proptest::prelude::*;
use test_fixtures::{study_record, t0};

fn arb_history() -> impl Strategy<Value = Vec<ExpertStudyMetrics>> {
    proptest::collection::vec(
        (0u32..=100, 0.0f64..=100.0, proptest::option::of(0.0f64..200.0)),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (score, consistency, response))| {
                study_record("e", &format!("s{i}"), score, consistency, response, i as i64)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn score_delta_is_bounded(history in arb_history(), window in 1usize..8) {
        let trends = compute_trends(&history, window);
        prop_assert!(trends.score_delta.abs() <= 100.0);
        prop_assert!(trends.consistency_delta.abs() <= 100.0);
    }

    #[test]
    fn trends_ignore_input_order(history in arb_history()) {
        let mut reversed = history.clone();
        reversed.reverse();
        prop_assert_eq!(compute_trends(&history, 5), compute_trends(&reversed, 5));
    }

    #[test]
    fn at_most_one_badge_per_family(
        consistency in 0.0f64..=100.0,
        response in proptest::option::of(0.0f64..100.0),
        completed in 0usize..80,
    ) {
        let lifetime = LifetimeAggregate {
            studies_invited: completed + 1,
            studies_completed: completed,
            average_score: 50.0,
            average_consistency: consistency,
            average_response_hours: response,
        };
        let badges = award_badges(&"e".into(), &lifetime, &BadgeConfig::default(), t0());
        for family in [BadgeFamily::Consistency, BadgeFamily::Speed, BadgeFamily::Participation] {
            prop_assert!(badges.iter().filter(|b| b.family == family).count() <= 1);
        }
    }
}
