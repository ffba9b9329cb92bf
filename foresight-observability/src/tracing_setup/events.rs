//! Structured log events for completed calculations.

use foresight_core::models::{ExpertId, ReliabilityTier, StudyId};

/// Log a finished structural classification.
pub fn structure_classified(variables: usize, consumed: usize, skipped: usize) {
    tracing::info!(
        event = "structure_classified",
        variables,
        consumed,
        skipped,
        "structure classified"
    );
    if skipped > 0 {
        tracing::warn!(
            event = "votes_skipped",
            skipped,
            "votes naming unknown variables or self-influence were skipped"
        );
    }
}

/// Log a per-study reliability evaluation.
pub fn expert_evaluated(expert_id: &ExpertId, study_id: &StudyId, overall: u32, tier: ReliabilityTier) {
    tracing::info!(
        event = "expert_evaluated",
        expert_id = %expert_id,
        study_id = %study_id,
        overall,
        tier = %tier,
        "expert evaluated"
    );
}

/// Log a reputation recomputation.
pub fn reputation_recomputed(expert_id: &ExpertId, lifetime_score: u32, badges: usize) {
    tracing::info!(
        event = "reputation_recomputed",
        expert_id = %expert_id,
        lifetime_score,
        badges,
        "reputation recomputed"
    );
}
