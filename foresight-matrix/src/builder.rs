//! Matrix Builder: folds vote records into the aggregate influence matrix.
//!
//! Cell (i, j) is the plain sum of every vote where `variable_a = i` and
//! `variable_b = j`, across all experts and rounds. The builder does not
//! average per relation: aggregate strength scales with panel size.
//!
//! Votes referencing an unknown variable and votes on the diagonal are
//! dropped and counted, never raised.

use std::collections::HashMap;

use tracing::{debug, warn};

use foresight_core::errors::MatrixError;
use foresight_core::models::{Variable, VariableId, VoteRecord};

/// Square aggregate matrix indexed by the study's variable order.
/// The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceMatrix {
    variable_ids: Vec<VariableId>,
    cells: Vec<Vec<u64>>,
}

impl InfluenceMatrix {
    /// An all-zero matrix over the given ids.
    pub fn zeros(variable_ids: Vec<VariableId>) -> Self {
        let n = variable_ids.len();
        Self {
            variable_ids,
            cells: vec![vec![0; n]; n],
        }
    }

    /// Checked construction from raw rows. The diagonal is forced to zero.
    pub fn from_rows(
        variable_ids: Vec<VariableId>,
        mut rows: Vec<Vec<u64>>,
    ) -> Result<Self, MatrixError> {
        check_square(&rows)?;
        if rows.len() != variable_ids.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: variable_ids.len(),
                actual: rows.len(),
            });
        }
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 0;
        }
        Ok(Self {
            variable_ids,
            cells: rows,
        })
    }

    pub fn dimension(&self) -> usize {
        self.variable_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_ids.is_empty()
    }

    /// Cell value, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.cells
    }

    pub fn variable_ids(&self) -> &[VariableId] {
        &self.variable_ids
    }

    pub fn index_of(&self, id: &VariableId) -> Option<usize> {
        self.variable_ids.iter().position(|v| v == id)
    }

    /// Sum of every cell.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    fn add(&mut self, row: usize, col: usize, amount: u64) {
        self.cells[row][col] += amount;
    }
}

/// Outcome of a build: the matrix plus vote accounting.
#[derive(Debug, Clone)]
pub struct MatrixBuild {
    pub matrix: InfluenceMatrix,
    /// Votes summed into a cell.
    pub consumed: usize,
    /// Votes naming a variable id outside the study.
    pub skipped_unknown: usize,
    /// Votes with `variable_a == variable_b`.
    pub skipped_self: usize,
    /// Variable entries whose id repeats an earlier entry. Such rows stay
    /// zero because every vote lands on the first entry with that id.
    pub duplicate_variables: usize,
}

impl MatrixBuild {
    pub fn skipped(&self) -> usize {
        self.skipped_unknown + self.skipped_self
    }
}

/// Fold `votes` into an aggregate matrix over `variables`.
///
/// Only addition is used, so the result is independent of vote order.
pub fn build(variables: &[Variable], votes: &[VoteRecord]) -> MatrixBuild {
    let mut index: HashMap<&VariableId, usize> = HashMap::with_capacity(variables.len());
    let mut duplicate_variables = 0;
    for (i, v) in variables.iter().enumerate() {
        let first = *index.entry(&v.id).or_insert(i);
        if first != i {
            debug!(variable = %v.id, first, duplicate = i, "variable id listed more than once");
            duplicate_variables += 1;
        }
    }
    if duplicate_variables > 0 {
        warn!(
            duplicate_variables,
            "duplicate variable ids; repeated entries classify as empty rows"
        );
    }

    let mut matrix = InfluenceMatrix::zeros(variables.iter().map(|v| v.id.clone()).collect());
    let mut consumed = 0;
    let mut skipped_unknown = 0;
    let mut skipped_self = 0;

    for vote in votes {
        if vote.is_self_influence() {
            debug!(expert = %vote.expert_id, variable = %vote.variable_a_id, "skipping self-influence vote");
            skipped_self += 1;
            continue;
        }
        match (index.get(&vote.variable_a_id), index.get(&vote.variable_b_id)) {
            (Some(&row), Some(&col)) => {
                matrix.add(row, col, vote.value.weight());
                consumed += 1;
            }
            _ => {
                debug!(
                    expert = %vote.expert_id,
                    variable_a = %vote.variable_a_id,
                    variable_b = %vote.variable_b_id,
                    "skipping vote with unknown variable"
                );
                skipped_unknown += 1;
            }
        }
    }

    if skipped_unknown + skipped_self > 0 {
        warn!(
            skipped_unknown,
            skipped_self,
            consumed,
            "votes dropped while building influence matrix"
        );
    }

    MatrixBuild {
        matrix,
        consumed,
        skipped_unknown,
        skipped_self,
        duplicate_variables,
    }
}

/// Fail unless every row has exactly as many cells as there are rows.
pub(crate) fn check_square<T>(rows: &[Vec<T>]) -> Result<(), MatrixError> {
    let dimension = rows.len();
    match rows.iter().position(|r| r.len() != dimension) {
        Some(row) => Err(MatrixError::NotSquare {
            row,
            len: rows[row].len(),
            dimension,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::models::InfluenceStrength;

    fn vars(ids: &[&str]) -> Vec<Variable> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Variable::new(*id, id.to_uppercase(), i as u32))
            .collect()
    }

    #[test]
    fn sums_across_experts_and_rounds() {
        let variables = vars(&["a", "b"]);
        let votes = vec![
            VoteRecord::new("e1", "a", "b", "r1", InfluenceStrength::Strong),
            VoteRecord::new("e2", "a", "b", "r1", InfluenceStrength::Moderate),
            VoteRecord::new("e1", "a", "b", "r2", InfluenceStrength::Weak),
        ];
        let built = build(&variables, &votes);
        assert_eq!(built.matrix.get(0, 1), Some(6));
        assert_eq!(built.matrix.get(1, 0), Some(0));
        assert_eq!(built.consumed, 3);
    }

    #[test]
    fn duplicate_variable_ids_keep_first_index() {
        let mut variables = vars(&["a", "b"]);
        variables.push(Variable::new("a", "A again", 2));
        let votes = vec![VoteRecord::new("e1", "b", "a", "r1", InfluenceStrength::Weak)];
        let built = build(&variables, &votes);
        assert_eq!(built.matrix.dimension(), 3);
        assert_eq!(built.matrix.get(1, 0), Some(1));
        assert_eq!(built.matrix.get(1, 2), Some(0));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let ids: Vec<VariableId> = vec!["a".into(), "b".into()];
        let err = InfluenceMatrix::from_rows(ids, vec![vec![0, 1], vec![2]]).unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { row: 1, len: 1, dimension: 2 }));
    }

    #[test]
    fn from_rows_zeroes_diagonal() {
        let ids: Vec<VariableId> = vec!["a".into(), "b".into()];
        let m = InfluenceMatrix::from_rows(ids, vec![vec![9, 1], vec![2, 9]]).unwrap();
        assert_eq!(m.get(0, 0), Some(0));
        assert_eq!(m.get(1, 1), Some(0));
        assert_eq!(m.total(), 3);
    }

    #[test]
    fn repeated_variable_ids_are_counted() {
        let variables = vars(&["a", "b", "a"]);
        let votes = vec![VoteRecord::new("e1", "b", "a", "r1", InfluenceStrength::Strong)];
        let built = build(&variables, &votes);
        assert_eq!(built.duplicate_variables, 1);
        assert_eq!(built.matrix.get(1, 0), Some(3));
        assert_eq!(built.matrix.get(1, 2), Some(0));
        assert_eq!(built.consumed, 1);
        assert_eq!(build(&vars(&["a", "b"]), &votes).duplicate_variables, 0);
    }
}
