//! Draft entry model
//!
//! The in-progress form state for an expense that has not been submitted.
//! Every field is raw text; nothing is validated until submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::category::Category;

/// Which draft field an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    Category,
    Amount,
    Description,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// Reasons a draft or budget value is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a category")]
    MissingCategory,

    #[error("'{0}' is not a known category")]
    UnknownCategory(String),

    #[error("Please enter an amount")]
    MissingAmount,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Budget must be a positive number, got {0}")]
    InvalidBudget(f64),
}

impl ValidationError {
    /// The draft field this error refers to, if any
    pub fn field(&self) -> Option<DraftField> {
        match self {
            Self::MissingCategory | Self::UnknownCategory(_) => Some(DraftField::Category),
            Self::MissingAmount | Self::InvalidAmount(_) => Some(DraftField::Amount),
            Self::InvalidBudget(_) => None,
        }
    }
}

/// A mutable, not-yet-submitted expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl Draft {
    /// Create an all-empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value of a field
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Category => &self.category,
            DraftField::Amount => &self.amount,
            DraftField::Description => &self.description,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Category => self.category = value,
            DraftField::Amount => self.amount = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.amount.is_empty() && self.description.is_empty()
    }

    /// Check the draft and return its parsed category and amount.
    ///
    /// The category is checked first, so a draft missing both reports the
    /// category.
    pub fn validate(&self) -> Result<(Category, f64), ValidationError> {
        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let category: Category = self
            .category
            .parse()
            .map_err(|_| ValidationError::UnknownCategory(self.category.clone()))?;

        let amount_str = self.amount.trim();
        if amount_str.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = parse_amount(amount_str)?;

        Ok((category, amount))
    }
}

/// Parse amount text into a finite number
///
/// `"inf"` and `"NaN"` are accepted by `f64::from_str` and must be rejected
/// here so they never reach the entry list.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidAmount(text.to_string())),
    }
}
