//! Structural classification output.
//!
//! # Examples
//!
//! ```
//! use foresight_core::models::StructuralRole;
//!
//! assert_eq!(StructuralRole::from_levels(true, false), StructuralRole::Driver);
//! assert_eq!(StructuralRole::from_levels(false, false), StructuralRole::Autonomous);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::VariableId;
use super::variable::Variable;

/// One of the four mutually exclusive structural roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StructuralRole {
    /// High motricity, low dependence. Changes propagate with little feedback.
    Driver,
    /// Low motricity, high dependence. Reacts to the rest of the system.
    Dependent,
    /// High motricity, high dependence. Unstable; amplifies and is amplified.
    Linkage,
    /// Low motricity, low dependence. Structurally disconnected.
    Autonomous,
}

impl StructuralRole {
    /// Map the two high/low judgments onto a quadrant.
    pub fn from_levels(high_motricity: bool, high_dependence: bool) -> Self {
        match (high_motricity, high_dependence) {
            (true, true) => Self::Linkage,
            (true, false) => Self::Driver,
            (false, true) => Self::Dependent,
            (false, false) => Self::Autonomous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Dependent => "dependent",
            Self::Linkage => "linkage",
            Self::Autonomous => "autonomous",
        }
    }
}

impl fmt::Display for StructuralRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified and ranked variable from the direct matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifiedVariable {
    pub variable_id: VariableId,
    pub name: String,
    pub role: StructuralRole,
    /// 1 = highest motricity.
    pub rank: u32,
    /// Row sum excluding the diagonal.
    #[ts(type = "number")]
    pub motricity: u64,
    /// Column sum excluding the diagonal.
    #[ts(type = "number")]
    pub dependence: u64,
}

/// A variable classified from indirect (matrix-power) indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndirectClassification {
    pub variable_id: VariableId,
    pub role: StructuralRole,
    pub rank: u32,
    pub motricity: f64,
    pub dependence: f64,
}

/// Everything a consumer needs to display or reproduce a classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultSet {
    /// Classified variables in their original order.
    pub variables: Vec<ClassifiedVariable>,
    /// Votes summed into the matrix.
    pub total_votes: usize,
    /// Votes dropped for unknown ids or self-influence.
    pub skipped_votes: usize,
    pub motricity_average: f64,
    pub dependence_average: f64,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Look up a classified variable by id.
    pub fn get(&self, id: &VariableId) -> Option<&ClassifiedVariable> {
        self.variables.iter().find(|v| &v.variable_id == id)
    }

    /// Variables ordered by rank (1 first).
    pub fn ranked(&self) -> Vec<&ClassifiedVariable> {
        let mut ranked: Vec<&ClassifiedVariable> = self.variables.iter().collect();
        ranked.sort_by_key(|v| v.rank);
        ranked
    }

    /// All variables holding the given role.
    pub fn with_role(&self, role: StructuralRole) -> impl Iterator<Item = &ClassifiedVariable> {
        self.variables.iter().filter(move |v| v.role == role)
    }

    /// Copies of `variables` with `category` set to the role computed here.
    ///
    /// Entries are matched by position first, so a repeated id keeps the
    /// role of its own row. Variables absent from this result get `None`.
    pub fn categorize(&self, variables: &[Variable]) -> Vec<Variable> {
        variables
            .iter()
            .enumerate()
            .map(|(i, variable)| {
                let role = match self.variables.get(i) {
                    Some(c) if c.variable_id == variable.id => Some(c.role),
                    _ => self.get(&variable.id).map(|c| c.role),
                };
                Variable {
                    category: role,
                    ..variable.clone()
                }
            })
            .collect()
    }
}
