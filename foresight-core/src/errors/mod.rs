//! Error handling for Foresight.
//! One error enum per subsystem, `thiserror` only.
//!
//! Only contract violations raise. Data-quality problems (unknown variable
//! ids, experts without peer overlap, empty inputs) degrade silently.

pub mod config_error;
pub mod foresight_error;
pub mod matrix_error;

pub use config_error::ConfigError;
pub use foresight_error::{ForesightError, ForesightResult};
pub use matrix_error::MatrixError;
