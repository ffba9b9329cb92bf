//! # foresight-observability
//!
//! JSON tracing setup driven by `FORESIGHT_LOG`, one span macro per
//! pipeline, and structured events for completed calculations.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
