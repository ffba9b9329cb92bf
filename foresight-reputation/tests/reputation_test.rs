use foresight_core::config::{ForesightConfig, TrendConfig};
use foresight_core::models::{
    BadgeFamily, BadgeTier, ExpertId, InvitationPriority, LifetimeAggregate, ReliabilityTier,
};
use foresight_reputation::{compute_trends, lifetime_aggregate, ReputationEngine};
use test_fixtures::{study_record, t0};

fn engine() -> ReputationEngine {
    ReputationEngine::new(&ForesightConfig::default()).unwrap()
}

// ── trends ──────────────────────────────────────────────────────────────────

#[test]
fn single_record_has_flat_trends() {
    let history = vec![study_record("e", "s1", 90, 90.0, Some(2.0), 0)];
    assert!(compute_trends(&history, 5).is_flat());
    assert!(compute_trends(&[], 5).is_flat());
}

#[test]
fn two_records_compare_newest_against_previous() {
    // Supplied oldest first; ordering is by calculated_at, not position.
    let history = vec![
        study_record("e", "s1", 60, 70.0, Some(30.0), 0),
        study_record("e", "s2", 80, 85.0, Some(6.0), 30),
    ];
    let trends = compute_trends(&history, 5);
    assert_eq!(trends.score_delta, 20.0);
    assert_eq!(trends.consistency_delta, 15.0);
    assert_eq!(trends.speed_delta, 24.0);
}

#[test]
fn cohorts_are_capped_at_the_window() {
    // Newest five score 80, next five score 60, the oldest two score 0.
    let mut history = Vec::new();
    for day in 0..12 {
        let score = match day {
            0..=1 => 0,
            2..=6 => 60,
            _ => 80,
        };
        history.push(study_record("e", &format!("s{day}"), score, 50.0, Some(10.0), day));
    }
    let trends = compute_trends(&history, 5);
    assert_eq!(trends.score_delta, 20.0);
    assert_eq!(trends.consistency_delta, 0.0);
    assert_eq!(trends.speed_delta, 0.0);
}

#[test]
fn speed_delta_needs_responses_in_both_cohorts() {
    let history = vec![
        study_record("e", "s1", 40, 50.0, None, 0),
        study_record("e", "s2", 70, 50.0, Some(5.0), 30),
    ];
    let trends = compute_trends(&history, 1);
    assert_eq!(trends.score_delta, 30.0);
    assert_eq!(trends.speed_delta, 0.0);
}

#[test]
fn declining_expert_has_negative_deltas() {
    let history = vec![
        study_record("e", "s1", 90, 95.0, Some(2.0), 0),
        study_record("e", "s2", 50, 60.0, Some(40.0), 30),
    ];
    let trends = compute_trends(&history, TrendConfig::default().window);
    assert_eq!(trends.score_delta, -40.0);
    assert_eq!(trends.consistency_delta, -35.0);
    assert_eq!(trends.speed_delta, -38.0);
}

// ── engine ──────────────────────────────────────────────────────────────────

#[test]
fn trends_and_badges_together() {
    let history = vec![
        study_record("e", "s1", 70, 80.0, Some(20.0), 0),
        study_record("e", "s2", 90, 96.0, Some(2.0), 30),
    ];
    let lifetime = LifetimeAggregate {
        studies_invited: 10,
        studies_completed: 10,
        average_score: 80.0,
        average_consistency: 88.0,
        average_response_hours: Some(11.0),
    };
    let expert: ExpertId = "e".into();
    let out = engine().compute_trends_and_badges(&expert, &history, &lifetime, t0());

    assert_eq!(out.trends.score_delta, 20.0);
    assert_eq!(out.trends.speed_delta, 18.0);
    let tier = |family| out.badges.iter().find(|b| b.family == family).map(|b| b.tier);
    assert_eq!(tier(BadgeFamily::Consistency), Some(BadgeTier::Silver));
    assert_eq!(tier(BadgeFamily::Speed), Some(BadgeTier::Gold));
    assert_eq!(tier(BadgeFamily::Participation), Some(BadgeTier::Silver));
    assert!(out.badges.iter().all(|b| b.expert_id == expert));
}

#[test]
fn global_record_uses_lifetime_score() {
    let history = vec![
        study_record("e", "s1", 80, 90.0, Some(4.0), 0),
        study_record("e", "s2", 85, 90.0, Some(6.0), 30),
    ];
    let expert: ExpertId = "e".into();
    let global = engine().global_metrics(&expert, &history, t0());

    assert_eq!(global.lifetime, lifetime_aggregate(&history));
    // (80 + 85) / 2 = 82.5 → 83
    assert_eq!(global.lifetime_score, 83);
    assert_eq!(global.tier, ReliabilityTier::Good);
    assert_eq!(global.priority, InvitationPriority::High);
    assert_eq!(global.trends.score_delta, 5.0);
    assert_eq!(global.calculated_at, t0());
    // consistency 90 → gold, response 5h → gold, 2 completed → none
    assert_eq!(global.badges.len(), 2);
}

#[test]
fn expert_without_history_is_avoided() {
    let global = engine().global_metrics(&"new".into(), &[], t0());
    assert_eq!(global.lifetime_score, 0);
    assert_eq!(global.priority, InvitationPriority::Avoid);
    assert!(global.badges.is_empty());
    assert!(global.trends.is_flat());
}

#[test]
fn zero_trend_window_is_rejected() {
    let mut config = ForesightConfig::default();
    config.trends.window = 0;
    assert!(ReputationEngine::new(&config).is_err());
}
