//! Lifetime aggregate over an expert's per-study records.

use foresight_core::models::{ExpertStudyMetrics, LifetimeAggregate};

/// Roll `history` into lifetime figures. Order does not matter.
///
/// Averages run over every record, including studies the expert never
/// finished. The response average only counts records with a response.
pub fn lifetime_aggregate(history: &[ExpertStudyMetrics]) -> LifetimeAggregate {
    if history.is_empty() {
        return LifetimeAggregate::default();
    }

    let n = history.len() as f64;
    let responses: Vec<f64> = history
        .iter()
        .filter_map(|m| m.time.response_delay_hours)
        .collect();

    LifetimeAggregate {
        studies_invited: history.len(),
        studies_completed: history.iter().filter(|m| m.is_completed()).count(),
        average_score: history.iter().map(|m| m.overall_score as f64).sum::<f64>() / n,
        average_consistency: history
            .iter()
            .map(|m| m.quality.consistency_score)
            .sum::<f64>()
            / n,
        average_response_hours: mean(&responses),
    }
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
