//! Indirect influence (MICMAC): raise the aggregate matrix to a power so
//! that paths through intermediate variables contribute.
//!
//! At power 1 the indirect indicators equal the direct ones. Higher powers
//! let a variable that drives a strong driver rank higher than its direct
//! row suggests.

use foresight_core::constants::MAX_INDIRECT_POWER;
use foresight_core::errors::MatrixError;

use crate::builder::InfluenceMatrix;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndirectIndicators {
    pub power: u32,
    pub motricity: Vec<f64>,
    pub dependence: Vec<f64>,
}

/// Row and column sums of `matrix^power`, diagonal excluded.
pub fn indirect_indicators(
    matrix: &InfluenceMatrix,
    power: u32,
) -> Result<IndirectIndicators, MatrixError> {
    if power == 0 || power > MAX_INDIRECT_POWER {
        return Err(MatrixError::InvalidPower {
            power,
            max: MAX_INDIRECT_POWER,
        });
    }

    let base: Vec<Vec<f64>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|&c| c as f64).collect())
        .collect();
    let powered = matrix_power(base, power);

    let n = powered.len();
    let mut motricity = vec![0.0; n];
    let mut dependence = vec![0.0; n];
    for (i, row) in powered.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if i != j {
                motricity[i] += cell;
                dependence[j] += cell;
            }
        }
    }

    Ok(IndirectIndicators {
        power,
        motricity,
        dependence,
    })
}

/// `base^power` by repeated squaring: O(n³ log power). `power` must be >= 1.
fn matrix_power(base: Vec<Vec<f64>>, power: u32) -> Vec<Vec<f64>> {
    let mut result: Option<Vec<Vec<f64>>> = None;
    let mut square = base;
    let mut remaining = power;
    loop {
        if remaining & 1 == 1 {
            result = Some(match result {
                Some(acc) => multiply(&acc, &square),
                None => square.clone(),
            });
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        square = multiply(&square, &square);
    }
    result.unwrap_or_default()
}

fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = a.len();
    let mut out = vec![vec![0.0; n]; n];
    for i in 0..n {
        for k in 0..n {
            let aik = a[i][k];
            if aik == 0.0 {
                continue;
            }
            for j in 0..n {
                out[i][j] += aik * b[k][j];
            }
        }
    }
    out
}
