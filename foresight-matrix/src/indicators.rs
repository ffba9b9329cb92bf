//! Structural Indicator Calculator.
//!
//! ```text
//! motricity[i]  = Σ_j matrix[i][j]  for j ≠ i
//! dependence[j] = Σ_i matrix[i][j]  for i ≠ j
//! ```

use foresight_core::errors::MatrixError;

use crate::builder::{check_square, InfluenceMatrix};

/// Motricity and dependence vectors, in matrix order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuralIndicators {
    pub motricity: Vec<u64>,
    pub dependence: Vec<u64>,
}

impl StructuralIndicators {
    pub fn len(&self) -> usize {
        self.motricity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motricity.is_empty()
    }

    /// Arithmetic mean of the motricity vector; 0.0 when empty.
    pub fn motricity_average(&self) -> f64 {
        mean(&self.motricity)
    }

    /// Arithmetic mean of the dependence vector; 0.0 when empty.
    pub fn dependence_average(&self) -> f64 {
        mean(&self.dependence)
    }
}

/// Indicators of a matrix built by the Matrix Builder. Square by construction.
pub fn compute(matrix: &InfluenceMatrix) -> StructuralIndicators {
    reduce(matrix.rows())
}

/// Indicators of raw rows supplied by a caller that bypassed the builder.
pub fn compute_rows(rows: &[Vec<u64>]) -> Result<StructuralIndicators, MatrixError> {
    check_square(rows)?;
    Ok(reduce(rows))
}

fn reduce(rows: &[Vec<u64>]) -> StructuralIndicators {
    let n = rows.len();
    let mut motricity = vec![0u64; n];
    let mut dependence = vec![0u64; n];

    for (i, row) in rows.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if i == j {
                continue;
            }
            motricity[i] += cell;
            dependence[j] += cell;
        }
    }

    StructuralIndicators {
        motricity,
        dependence,
    }
}

fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}
