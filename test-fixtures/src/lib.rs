//! Test fixture loader for Foresight scenarios.
//!
//! Provides typed deserialization of the JSON scenarios under `scenarios/`
//! and small builders for votes and variables used across crates.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use foresight_core::models::{
    ActivityFacts, ExpertStudyMetrics, InfluenceStrength, InvitationPriority, ParticipationFacts,
    QualityFacts, ReliabilityTier, StructuralRole, SubScores, TimeFacts, Variable, VoteRecord,
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Expected indicators for one variable in a structural scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedVariable {
    pub id: String,
    pub motricity: u64,
    pub dependence: u64,
    pub role: StructuralRole,
    pub rank: u32,
}

/// A structural scenario: inputs plus the expected classification.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuralScenario {
    pub description: String,
    pub variables: Vec<Variable>,
    pub votes: Vec<VoteRecord>,
    pub expected: Vec<ExpectedVariable>,
    pub expected_total_votes: usize,
}

/// Load a structural scenario from `scenarios/<name>.json`.
pub fn structural_scenario(name: &str) -> StructuralScenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Variables `ids[i]` with order index `i`.
pub fn variables(ids: &[&str]) -> Vec<Variable> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Variable::new(*id, id.to_uppercase(), i as u32))
        .collect()
}

/// A round-1 vote. Panics on values outside 0–3.
pub fn vote(expert: &str, a: &str, b: &str, value: u8) -> VoteRecord {
    vote_in_round(expert, a, b, "round-1", value)
}

pub fn vote_in_round(expert: &str, a: &str, b: &str, round: &str, value: u8) -> VoteRecord {
    let strength = InfluenceStrength::try_from(value)
        .unwrap_or_else(|e| panic!("invalid fixture vote value: {e}"));
    VoteRecord::new(expert, a, b, round, strength)
}

/// A fixed reference instant so time-based tests are reproducible.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed reference instant is unambiguous"))
}

/// Activity for an expert who answered and finished within the given hours,
/// with perfect engagement rates and external scores.
pub fn prompt_activity(response_hours: i64, completion_hours: i64) -> ActivityFacts {
    let invited = t0();
    let responded = invited + Duration::hours(response_hours);
    ActivityFacts {
        invited_at: invited,
        first_response_at: Some(responded),
        started_at: Some(responded),
        completed_at: Some(responded + Duration::hours(completion_hours)),
        acceptance_rate: 1.0,
        completion_rate: 1.0,
        on_time_rate: 1.0,
        responsiveness: 1.0,
        quality_score: 100.0,
        communication_score: 100.0,
    }
}

/// A per-study record for reputation tests, calculated `days_after` t0.
///
/// `response_hours: None` models an expert who never answered; such a
/// record is also left uncompleted. Tier and priority are placeholders.
pub fn study_record(
    expert: &str,
    study: &str,
    overall_score: u32,
    consistency: f64,
    response_hours: Option<f64>,
    days_after: i64,
) -> ExpertStudyMetrics {
    let invited = t0() + Duration::days(days_after);
    let responded = response_hours.map(|h| invited + Duration::minutes((h * 60.0) as i64));
    ExpertStudyMetrics {
        expert_id: expert.into(),
        study_id: study.into(),
        time: TimeFacts {
            invited_at: invited,
            first_response_at: responded,
            started_at: responded,
            completed_at: responded.map(|at| at + Duration::hours(24)),
            response_delay_hours: response_hours,
            completion_hours: response_hours.map(|_| 24.0),
            average_vote_secs: None,
        },
        quality: QualityFacts {
            consistency_score: consistency,
            compared_relations: 1,
            average_deviation: None,
            average_confidence: None,
            outlier_count: 0,
            completeness_ratio: 1.0,
        },
        participation: ParticipationFacts {
            acceptance_rate: 1.0,
            completion_rate: 1.0,
            on_time_rate: 1.0,
            responsiveness: 1.0,
        },
        sub_scores: SubScores {
            consistency,
            ..SubScores::default()
        },
        overall_score,
        tier: ReliabilityTier::Average,
        priority: InvitationPriority::Medium,
        recommendations: Vec::new(),
        calculated_at: invited + Duration::days(7),
    }
}
