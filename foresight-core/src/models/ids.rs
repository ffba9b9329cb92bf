//! String identifiers handed to the engine by the surrounding application.
//!
//! # Examples
//!
//! ```
//! use foresight_core::models::{ExpertId, VariableId};
//!
//! let expert = ExpertId::from("expert-1");
//! let variable = VariableId::from("v-energy");
//! assert_eq!(expert.to_string(), "expert-1");
//! assert_eq!(variable.as_str(), "v-energy");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a study variable.
    VariableId
);

string_id!(
    /// Identifier of a panel expert.
    ExpertId
);

string_id!(
    /// Identifier of a study.
    StudyId
);
