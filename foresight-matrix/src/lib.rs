//! # foresight-matrix
//!
//! Cross-impact structural analysis.
//!
//! ## Pipeline
//! 1. **Matrix Builder**: sums every vote into an N×N aggregate matrix
//! 2. **Indicators**: motricity (row sums) and dependence (column sums), diagonal excluded
//! 3. **Classifier**: driver / dependent / linkage / autonomous against the panel averages
//! 4. **Ranker**: stable rank by descending motricity
//!
//! Indirect (matrix-power) indicators are available for MICMAC-style
//! analysis of influence that travels through intermediate variables.

pub mod builder;
pub mod classifier;
pub mod engine;
pub mod indicators;
pub mod indirect;

pub use builder::{InfluenceMatrix, MatrixBuild};
pub use engine::{StructuralAnalysis, StructuralEngine};
pub use indicators::StructuralIndicators;
pub use indirect::IndirectIndicators;
