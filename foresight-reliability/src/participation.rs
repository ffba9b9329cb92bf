//! Participation sub-score: weighted engagement rates.
//!
//! `score = Σ clamp(rate, 0, 1) × weight`, weights summing to 100.

use foresight_core::config::ParticipationConfig;
use foresight_core::constants::SCORE_CEILING;
use foresight_core::models::{ActivityFacts, ParticipationFacts};

pub fn participation_facts(activity: &ActivityFacts) -> ParticipationFacts {
    ParticipationFacts {
        acceptance_rate: unit(activity.acceptance_rate),
        completion_rate: unit(activity.completion_rate),
        on_time_rate: unit(activity.on_time_rate),
        responsiveness: unit(activity.responsiveness),
    }
}

/// Participation sub-score on [0, 100].
pub fn participation_score(facts: &ParticipationFacts, config: &ParticipationConfig) -> f64 {
    let weighted = unit(facts.acceptance_rate) * config.acceptance_weight as f64
        + unit(facts.completion_rate) * config.completion_weight as f64
        + unit(facts.on_time_rate) * config.on_time_weight as f64
        + unit(facts.responsiveness) * config.responsiveness_weight as f64;
    weighted.clamp(0.0, SCORE_CEILING)
}

fn unit(rate: f64) -> f64 {
    if rate.is_nan() {
        return 0.0;
    }
    rate.clamp(0.0, 1.0)
}
