//! Ordered `{level: bound}` tables used for tiers, priorities, and badges.
//!
//! Entries are listed lowest level first. An `AtLeast` table needs strictly
//! ascending bounds; an `AtMost` table (lower is better, e.g. response
//! hours) needs strictly descending bounds.
//!
//! # Examples
//!
//! ```
//! use foresight_core::config::ThresholdTable;
//!
//! let table = ThresholdTable::at_least(vec![("bronze", 70.0), ("silver", 80.0)]);
//! assert!(table.validate("badges").is_ok());
//! assert_eq!(table.highest_met(85.0), Some("silver"));
//! assert_eq!(table.highest_met(10.0), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdDirection {
    /// A level is met when `value >= bound`.
    AtLeast,
    /// A level is met when `value <= bound`.
    AtMost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEntry<L> {
    pub level: L,
    pub bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable<L> {
    pub direction: ThresholdDirection,
    pub entries: Vec<ThresholdEntry<L>>,
}

impl<L: Copy> ThresholdTable<L> {
    pub fn at_least(entries: Vec<(L, f64)>) -> Self {
        Self::new(ThresholdDirection::AtLeast, entries)
    }

    pub fn at_most(entries: Vec<(L, f64)>) -> Self {
        Self::new(ThresholdDirection::AtMost, entries)
    }

    fn new(direction: ThresholdDirection, entries: Vec<(L, f64)>) -> Self {
        Self {
            direction,
            entries: entries
                .into_iter()
                .map(|(level, bound)| ThresholdEntry { level, bound })
                .collect(),
        }
    }

    /// Check the table is non-empty, finite, and strictly monotonic.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: "threshold table must not be empty".to_string(),
            });
        }
        if let Some(bad) = self.entries.iter().find(|e| !e.bound.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("bound {} is not finite", bad.bound),
            });
        }

        let monotonic = self.entries.windows(2).all(|w| match self.direction {
            ThresholdDirection::AtLeast => w[0].bound < w[1].bound,
            ThresholdDirection::AtMost => w[0].bound > w[1].bound,
        });
        if !monotonic {
            let expected_order = match self.direction {
                ThresholdDirection::AtLeast => "ascending",
                ThresholdDirection::AtMost => "descending",
            };
            return Err(ConfigError::NonMonotonicThresholds {
                field: field.to_string(),
                expected_order: expected_order.to_string(),
            });
        }
        Ok(())
    }

    /// The highest level whose bound is met, if any.
    pub fn highest_met(&self, value: f64) -> Option<L> {
        self.entries
            .iter()
            .rev()
            .find(|e| self.meets(value, e.bound))
            .map(|e| e.level)
    }

    /// Like [`highest_met`](Self::highest_met) but falls back to the lowest level.
    pub fn classify(&self, value: f64) -> Option<L> {
        self.highest_met(value)
            .or_else(|| self.entries.first().map(|e| e.level))
    }

    fn meets(&self, value: f64, bound: f64) -> bool {
        match self.direction {
            ThresholdDirection::AtLeast => value >= bound,
            ThresholdDirection::AtMost => value <= bound,
        }
    }
}
