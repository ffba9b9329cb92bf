use serde::{Deserialize, Serialize};

use super::{defaults, require_non_negative};
use crate::errors::ConfigError;

/// Timeliness sub-score policy constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinessConfig {
    /// Response delay tolerated before penalties start. Default: 24h.
    pub response_grace_hours: f64,
    /// Default: 2 points per hour past the grace period.
    pub late_response_points_per_hour: f64,
    /// Default: 30.
    pub max_late_response_penalty: f64,
    /// Completion time tolerated before penalties start. Default: 72h.
    pub completion_grace_hours: f64,
    /// Default: 0.5 points per hour past the grace period.
    pub slow_completion_points_per_hour: f64,
    /// Default: 25.
    pub max_slow_completion_penalty: f64,
    /// Responses faster than this earn the bonus. Default: 2h.
    pub fast_response_hours: f64,
    /// Default: +10.
    pub fast_response_bonus: f64,
    /// Average seconds per vote below which the bonus applies. Default: 30s.
    pub fast_vote_secs: f64,
    /// Default: +5.
    pub fast_vote_bonus: f64,
}

impl Default for TimelinessConfig {
    fn default() -> Self {
        Self {
            response_grace_hours: defaults::DEFAULT_RESPONSE_GRACE_HOURS,
            late_response_points_per_hour: defaults::DEFAULT_LATE_RESPONSE_POINTS_PER_HOUR,
            max_late_response_penalty: defaults::DEFAULT_MAX_LATE_RESPONSE_PENALTY,
            completion_grace_hours: defaults::DEFAULT_COMPLETION_GRACE_HOURS,
            slow_completion_points_per_hour: defaults::DEFAULT_SLOW_COMPLETION_POINTS_PER_HOUR,
            max_slow_completion_penalty: defaults::DEFAULT_MAX_SLOW_COMPLETION_PENALTY,
            fast_response_hours: defaults::DEFAULT_FAST_RESPONSE_HOURS,
            fast_response_bonus: defaults::DEFAULT_FAST_RESPONSE_BONUS,
            fast_vote_secs: defaults::DEFAULT_FAST_VOTE_SECS,
            fast_vote_bonus: defaults::DEFAULT_FAST_VOTE_BONUS,
        }
    }
}

impl TimelinessConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("timeliness.response_grace_hours", self.response_grace_hours),
            ("timeliness.late_response_points_per_hour", self.late_response_points_per_hour),
            ("timeliness.max_late_response_penalty", self.max_late_response_penalty),
            ("timeliness.completion_grace_hours", self.completion_grace_hours),
            ("timeliness.slow_completion_points_per_hour", self.slow_completion_points_per_hour),
            ("timeliness.max_slow_completion_penalty", self.max_slow_completion_penalty),
            ("timeliness.fast_response_hours", self.fast_response_hours),
            ("timeliness.fast_response_bonus", self.fast_response_bonus),
            ("timeliness.fast_vote_secs", self.fast_vote_secs),
            ("timeliness.fast_vote_bonus", self.fast_vote_bonus),
        ] {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}
