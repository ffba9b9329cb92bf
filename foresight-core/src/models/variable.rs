use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::classification::StructuralRole;
use super::ids::VariableId;

/// A study variable. Identity is fixed once voting starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variable {
    pub id: VariableId,
    /// Display name.
    pub name: String,
    /// Structural role. Ignored on input; filled by `ResultSet::categorize`.
    #[serde(default)]
    pub category: Option<StructuralRole>,
    /// Position in the study's ordered variable list.
    pub order_index: u32,
}

impl Variable {
    pub fn new(id: impl Into<VariableId>, name: impl Into<String>, order_index: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            order_index,
        }
    }
}
