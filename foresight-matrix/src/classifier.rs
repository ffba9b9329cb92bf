//! Variable Classifier & Ranker.
//!
//! A value is "high" when it is at or above the panel average (ties go
//! high) and strictly positive. A variable that exerts or receives no
//! influence at all is never high, so a single-variable study and an
//! all-zero panel classify as autonomous.
//!
//! Ranks are 1..N by descending motricity; ties keep input order.

use foresight_core::models::StructuralRole;

/// Role and rank assigned to one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub role: StructuralRole,
    pub rank: u32,
}

/// Whether `value` counts as high against `average`.
pub fn is_high(value: f64, average: f64) -> bool {
    value > 0.0 && value >= average
}

/// Classify and rank. Total over any input, including empty.
///
/// `motricity` and `dependence` must have the same length; extra entries
/// in the longer slice are ignored.
pub fn classify(motricity: &[f64], dependence: &[f64]) -> Vec<Placement> {
    let n = motricity.len().min(dependence.len());
    let motricity = &motricity[..n];
    let dependence = &dependence[..n];

    let motricity_average = mean(motricity);
    let dependence_average = mean(dependence);
    let ranks = rank_by_motricity(motricity);

    (0..n)
        .map(|i| Placement {
            role: StructuralRole::from_levels(
                is_high(motricity[i], motricity_average),
                is_high(dependence[i], dependence_average),
            ),
            rank: ranks[i],
        })
        .collect()
}

/// Rank positions (1-based) by descending motricity, stable on ties.
pub fn rank_by_motricity(motricity: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..motricity.len()).collect();
    order.sort_by(|&a, &b| motricity[b].total_cmp(&motricity[a]));

    let mut ranks = vec![0u32; motricity.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position as u32 + 1;
    }
    ranks
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
