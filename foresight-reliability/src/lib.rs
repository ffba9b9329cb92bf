//! # foresight-reliability
//!
//! Scores how reliable an expert was on one study.
//!
//! ## Sub-scores
//! 1. **Consistency**: deviation from the peer mean on shared relations
//! 2. **Timeliness**: response delay, completion time, pace per vote
//! 3. **Participation**: weighted engagement rates
//! 4. **Quality** / **Communication**: externally tracked, passed through
//!
//! The composite combines them with a weight table that must sum to 100
//! and maps the result to a reliability tier and an invitation priority.

pub mod composite;
pub mod consistency;
pub mod engine;
pub mod participation;
pub mod recommendations;
pub mod timeliness;

pub use composite::{score_expert_reliability, CompositeScorer};
pub use consistency::{score_consistency, ConsistencyReport};
pub use engine::{ExpertMetricsEngine, ExpertStudyInput};
