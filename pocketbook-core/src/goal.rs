//! Savings goal types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A savings goal with a target and an amount saved so far
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub saved_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    /// Fraction saved, clamped to 0.0-1.0. Zero targets count as complete.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 1.0;
        }
        (self.saved_amount / self.target_amount).clamp(0.0, 1.0)
    }

    pub fn is_reached(&self) -> bool {
        self.saved_amount >= self.target_amount
    }

    /// Amount still missing (never negative)
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.saved_amount).max(0.0)
    }
}
