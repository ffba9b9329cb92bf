//! Span definitions per pipeline: structural analysis, reliability, reputation.

/// Create a structural analysis span.
#[macro_export]
macro_rules! structural_span {
    ($variables:expr, $votes:expr) => {
        tracing::info_span!("foresight.structural", variables = $variables, votes = $votes)
    };
}

/// Create a per-study reliability span.
#[macro_export]
macro_rules! reliability_span {
    ($expert_id:expr, $study_id:expr) => {
        tracing::info_span!("foresight.reliability", expert_id = %$expert_id, study_id = %$study_id)
    };
}

/// Create a reputation span.
#[macro_export]
macro_rules! reputation_span {
    ($expert_id:expr, $records:expr) => {
        tracing::info_span!("foresight.reputation", expert_id = %$expert_id, records = $records)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STRUCTURAL: &str = "foresight.structural";
    pub const RELIABILITY: &str = "foresight.reliability";
    pub const REPUTATION: &str = "foresight.reputation";
}
