//! Expense entry model
//!
//! An entry is created once, when a draft is submitted, and never modified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Category this expense was recorded against
    pub category: Category,

    /// Parsed amount; always finite
    pub amount: f64,

    /// Free-text note
    #[serde(default)]
    pub description: String,

    /// When the entry was recorded
    pub date: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new entry
    pub fn new(
        category: Category,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            amount,
            description: description.into(),
            date,
        }
    }

    /// The creation instant as an ISO-8601 string
    pub fn date_iso(&self) -> String {
        self.date.to_rfc3339()
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
