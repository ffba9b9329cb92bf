//! Recent-vs-older trend deltas.
//!
//! History is ordered newest first by `calculated_at`. The first `window`
//! records are the recent cohort and the next `window` are the older one.
//! Records beyond `2 × window` do not take part.
//!
//! ```text
//! score_delta       = mean(recent.overall)     − mean(older.overall)
//! consistency_delta = mean(recent.consistency) − mean(older.consistency)
//! speed_delta       = mean(older.response_h)   − mean(recent.response_h)
//! ```

use foresight_core::models::{ExpertStudyMetrics, MetricTrends};

use crate::aggregate::mean;

/// Trend deltas for `history`, in any order.
///
/// All-zero when there are fewer than two records or no older cohort.
/// `speed_delta` stays zero unless both cohorts have response times.
pub fn compute_trends(history: &[ExpertStudyMetrics], window: usize) -> MetricTrends {
    if history.len() < 2 || window == 0 {
        return MetricTrends::default();
    }

    let mut ordered: Vec<&ExpertStudyMetrics> = history.iter().collect();
    ordered.sort_by(|a, b| b.calculated_at.cmp(&a.calculated_at));

    let split = window.min(ordered.len());
    let (recent, rest) = ordered.split_at(split);
    let older = &rest[..window.min(rest.len())];
    if older.is_empty() {
        return MetricTrends::default();
    }

    let score = |cohort: &[&ExpertStudyMetrics]| {
        cohort.iter().map(|m| m.overall_score as f64).sum::<f64>() / cohort.len() as f64
    };
    let consistency = |cohort: &[&ExpertStudyMetrics]| {
        cohort.iter().map(|m| m.quality.consistency_score).sum::<f64>() / cohort.len() as f64
    };
    let response = |cohort: &[&ExpertStudyMetrics]| {
        let hours: Vec<f64> = cohort
            .iter()
            .filter_map(|m| m.time.response_delay_hours)
            .collect();
        mean(&hours)
    };

    let speed_delta = match (response(older), response(recent)) {
        (Some(old), Some(new)) => old - new,
        _ => 0.0,
    };

    MetricTrends {
        score_delta: score(recent) - score(older),
        consistency_delta: consistency(recent) - consistency(older),
        speed_delta,
    }
}
