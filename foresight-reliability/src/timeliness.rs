//! Timeliness sub-score: a pure function of time facts.
//!
//! ```text
//! score = 100
//!   − min(max_late,  late_pts × max(0, response_h − response_grace))
//!   − min(max_slow,  slow_pts × max(0, completion_h − completion_grace))
//!   + fast_response_bonus  if response_h < fast_response_hours
//!   + fast_vote_bonus      if avg_vote_secs < fast_vote_secs
//! ```
//!
//! Clamped to [0, 100] only at the end, so several bonuses can each be
//! credited up to the ceiling. A missing response or completion takes
//! the full penalty for that term.

use chrono::{DateTime, Utc};

use foresight_core::config::TimelinessConfig;
use foresight_core::constants::SCORE_CEILING;
use foresight_core::models::{ActivityFacts, TimeFacts, VoteRecord};

/// Derive delays and per-vote pace from raw activity and the expert's votes.
pub fn derive_time_facts(activity: &ActivityFacts, expert_votes: &[VoteRecord]) -> TimeFacts {
    let response_delay_hours = activity
        .first_response_at
        .map(|at| hours_between(activity.invited_at, at));

    let completion_hours = activity.completed_at.map(|done| {
        let start = activity.started_at.unwrap_or(activity.invited_at);
        hours_between(start, done)
    });

    let paces: Vec<f64> = expert_votes
        .iter()
        .filter_map(|v| v.time_spent_secs)
        .filter(|s| s.is_finite() && *s >= 0.0)
        .collect();
    let average_vote_secs = if paces.is_empty() {
        None
    } else {
        Some(paces.iter().sum::<f64>() / paces.len() as f64)
    };

    TimeFacts {
        invited_at: activity.invited_at,
        first_response_at: activity.first_response_at,
        started_at: activity.started_at,
        completed_at: activity.completed_at,
        response_delay_hours,
        completion_hours,
        average_vote_secs,
    }
}

/// Timeliness sub-score on [0, 100].
pub fn timeliness_score(time: &TimeFacts, config: &TimelinessConfig) -> f64 {
    let mut score = SCORE_CEILING;

    match time.response_delay_hours {
        Some(hours) => {
            let over = (hours - config.response_grace_hours).max(0.0);
            score -= (over * config.late_response_points_per_hour).min(config.max_late_response_penalty);
            if hours < config.fast_response_hours {
                score += config.fast_response_bonus;
            }
        }
        None => score -= config.max_late_response_penalty,
    }

    match time.completion_hours {
        Some(hours) => {
            let over = (hours - config.completion_grace_hours).max(0.0);
            score -= (over * config.slow_completion_points_per_hour)
                .min(config.max_slow_completion_penalty);
        }
        None => score -= config.max_slow_completion_penalty,
    }

    if let Some(secs) = time.average_vote_secs {
        if secs < config.fast_vote_secs {
            score += config.fast_vote_bonus;
        }
    }

    score.clamp(0.0, SCORE_CEILING)
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}
