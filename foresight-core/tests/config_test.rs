//! Tests for the Foresight configuration system.

use std::sync::Mutex;

use foresight_core::config::{
    ForesightConfig, ParticipationConfig, ReliabilityWeights, ThresholdTable,
};
use foresight_core::errors::ConfigError;
use foresight_core::models::{BadgeTier, InvitationPriority, ReliabilityTier};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_foresight_env_vars() {
    for key in [
        "FORESIGHT_CONSISTENCY_POINTS_PER_DEVIATION",
        "FORESIGHT_CONSISTENCY_NEUTRAL_SCORE",
        "FORESIGHT_CONSISTENCY_OUTLIER_DEVIATION",
        "FORESIGHT_TIMELINESS_RESPONSE_GRACE_HOURS",
        "FORESIGHT_TIMELINESS_COMPLETION_GRACE_HOURS",
        "FORESIGHT_TRENDS_WINDOW",
        "FORESIGHT_RELIABILITY_WEIGHTS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_are_valid() {
    let config = ForesightConfig::default();
    config.validate().unwrap();
    assert_eq!(config.reliability.weights.total(), 100);
    assert_eq!(config.participation.total(), 100);
    assert_eq!(config.consistency.points_per_deviation, 25.0);
    assert_eq!(config.trends.window, 5);
}

#[test]
fn default_tier_cut_points() {
    let config = ForesightConfig::default();
    let r = &config.reliability;
    assert_eq!(r.tier_for(0.0), ReliabilityTier::Unreliable);
    assert_eq!(r.tier_for(39.0), ReliabilityTier::Unreliable);
    assert_eq!(r.tier_for(40.0), ReliabilityTier::Poor);
    assert_eq!(r.tier_for(59.0), ReliabilityTier::Poor);
    assert_eq!(r.tier_for(60.0), ReliabilityTier::Average);
    assert_eq!(r.tier_for(74.0), ReliabilityTier::Average);
    assert_eq!(r.tier_for(75.0), ReliabilityTier::Good);
    assert_eq!(r.tier_for(89.0), ReliabilityTier::Good);
    assert_eq!(r.tier_for(90.0), ReliabilityTier::Excellent);
    assert_eq!(r.tier_for(100.0), ReliabilityTier::Excellent);
}

#[test]
fn priority_and_tier_diverge_on_same_score() {
    let r = ForesightConfig::default().reliability;
    // 77 is a "good" tier but only a medium invitation priority.
    assert_eq!(r.tier_for(77.0), ReliabilityTier::Good);
    assert_eq!(r.priority_for(77.0), InvitationPriority::Medium);
    assert_eq!(r.priority_for(80.0), InvitationPriority::High);
    assert_eq!(r.priority_for(39.9), InvitationPriority::Avoid);
}

#[test]
fn weight_sum_of_99_or_101_is_rejected() {
    for consistency in [29, 31] {
        let weights = ReliabilityWeights {
            consistency,
            ..Default::default()
        };
        match weights.validate() {
            Err(ConfigError::WeightSumMismatch { actual, expected, .. }) => {
                assert_eq!(expected, 100);
                assert_eq!(actual, u64::from(consistency) + 70);
            }
            other => panic!("expected WeightSumMismatch, got {other:?}"),
        }
    }
}

#[test]
fn from_toml_overrides_only_given_keys() {
    let config = ForesightConfig::from_toml(
        r#"
[consistency]
points_per_deviation = 20.0

[reliability.weights]
consistency = 40
timeliness = 20
participation = 20
quality = 10
communication = 10
"#,
    )
    .unwrap();

    assert_eq!(config.consistency.points_per_deviation, 20.0);
    assert_eq!(config.consistency.neutral_score, 50.0);
    assert_eq!(config.reliability.weights.consistency, 40);
    assert_eq!(config.timeliness.response_grace_hours, 24.0);
}

#[test]
fn from_toml_rejects_bad_weight_sum() {
    let err = ForesightConfig::from_toml(
        r#"
[reliability.weights]
consistency = 50
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::WeightSumMismatch { actual: 120, .. }));
}

#[test]
fn reliability_weights_that_wrap_u32_are_rejected() {
    // u32::MAX + 101 wraps to exactly 100 in u32 arithmetic.
    let weights = ReliabilityWeights {
        consistency: u32::MAX,
        timeliness: 101,
        participation: 0,
        quality: 0,
        communication: 0,
    };
    assert_eq!(weights.total(), u64::from(u32::MAX) + 101);
    match weights.validate() {
        Err(ConfigError::WeightSumMismatch { actual, expected, .. }) => {
            assert_eq!(actual, 4_294_967_396);
            assert_eq!(expected, 100);
        }
        other => panic!("expected WeightSumMismatch, got {other:?}"),
    }
}

#[test]
fn participation_weights_that_wrap_u32_are_rejected() {
    let config = ParticipationConfig {
        acceptance_weight: u32::MAX,
        completion_weight: u32::MAX,
        on_time_weight: 51,
        responsiveness_weight: 51,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::WeightSumMismatch { ref table, .. }) if table == "participation"
    ));
}

#[test]
fn from_toml_rejects_overflowing_weights() {
    let err = ForesightConfig::from_toml(
        r#"
[reliability.weights]
consistency = 4294967295
timeliness = 101
participation = 0
quality = 0
communication = 0
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::WeightSumMismatch { actual: 4_294_967_396, .. }
    ));
}

#[test]
fn from_toml_rejects_non_monotonic_tiers() {
    let err = ForesightConfig::from_toml(
        r#"
[reliability.tiers]
direction = "at_least"
entries = [
    { level = "unreliable", bound = 0.0 },
    { level = "poor", bound = 60.0 },
    { level = "average", bound = 50.0 },
]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::NonMonotonicThresholds { .. }));
}

#[test]
fn from_toml_reports_parse_errors() {
    let err = ForesightConfig::from_toml("[consistency\npoints = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn negative_policy_constant_is_rejected() {
    let err = ForesightConfig::from_toml(
        r#"
[timeliness]
late_response_points_per_hour = -1.0
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "timeliness.late_response_points_per_hour")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = ForesightConfig::load(dir.path()).unwrap();
    assert_eq!(config.reliability.weights, ReliabilityWeights::default());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("foresight.toml"),
        r#"
[consistency]
points_per_deviation = 20.0
outlier_deviation = 1.0

[trends]
window = 3
"#,
    )
    .unwrap();

    std::env::set_var("FORESIGHT_CONSISTENCY_POINTS_PER_DEVIATION", "30");
    std::env::set_var("FORESIGHT_RELIABILITY_WEIGHTS", "20,20,20,20,20");

    let config = ForesightConfig::load(dir.path()).unwrap();
    assert_eq!(config.consistency.points_per_deviation, 30.0);
    assert_eq!(config.consistency.outlier_deviation, 1.0);
    assert_eq!(config.trends.window, 3);
    assert_eq!(config.reliability.weights.quality, 20);

    clear_foresight_env_vars();
}

#[test]
fn env_weights_are_still_validated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("FORESIGHT_RELIABILITY_WEIGHTS", "30,25,20,15,11");
    let result = ForesightConfig::load(dir.path());
    clear_foresight_env_vars();

    assert!(matches!(
        result,
        Err(ConfigError::WeightSumMismatch { actual: 101, .. })
    ));
}

#[test]
fn speed_badges_use_at_most_ordering() {
    let table = ThresholdTable::at_most(vec![
        (BadgeTier::Bronze, 48.0),
        (BadgeTier::Silver, 24.0),
        (BadgeTier::Gold, 12.0),
        (BadgeTier::Platinum, 4.0),
    ]);
    table.validate("badges.speed").unwrap();
    assert_eq!(table.highest_met(3.0), Some(BadgeTier::Platinum));
    assert_eq!(table.highest_met(12.0), Some(BadgeTier::Gold));
    assert_eq!(table.highest_met(30.0), Some(BadgeTier::Bronze));
    assert_eq!(table.highest_met(49.0), None);

    let inverted = ThresholdTable::at_most(vec![(BadgeTier::Bronze, 4.0), (BadgeTier::Silver, 48.0)]);
    assert!(matches!(
        inverted.validate("badges.speed"),
        Err(ConfigError::NonMonotonicThresholds { .. })
    ));
}

#[test]
fn empty_threshold_table_is_rejected() {
    let table: ThresholdTable<BadgeTier> = ThresholdTable::at_least(vec![]);
    assert!(matches!(
        table.validate("badges.consistency"),
        Err(ConfigError::ValidationFailed { .. })
    ));
}
