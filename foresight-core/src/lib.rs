//! # foresight-core
//!
//! Foundation crate for the Foresight cross-impact engine.
//! Defines all models, errors, config, threshold tables, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ForesightConfig;
pub use errors::{ForesightError, ForesightResult};
pub use models::{ExpertId, InfluenceStrength, Variable, VariableId, VoteRecord};
