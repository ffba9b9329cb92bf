//! # foresight-engine
//!
//! One entry point for the surrounding application. It owns a validated
//! [`ForesightConfig`](foresight_core::ForesightConfig) and exposes:
//!
//! - `build_and_classify`: structural analysis of a study
//! - `score_expert_consistency`: agreement with the peer panel
//! - `score_expert_reliability`: composite score, tier, priority
//! - `compute_trends_and_badges`: longitudinal reputation signals
//!
//! The structural and reliability pipelines share input shapes only. A
//! failure in one never blocks the other.

pub mod engine;

pub use engine::ForesightEngine;
