//! # foresight-reputation
//!
//! Rolls many per-study metrics records into a longitudinal picture of an
//! expert: lifetime averages, recent-vs-older trend deltas, tiered badges,
//! and a recommended invitation priority.
//!
//! Everything is recomputed from the supplied history on each call.

pub mod aggregate;
pub mod badges;
pub mod engine;
pub mod trends;

pub use aggregate::lifetime_aggregate;
pub use badges::award_badges;
pub use engine::ReputationEngine;
pub use trends::compute_trends;
