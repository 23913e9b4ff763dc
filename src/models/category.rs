//! Expense categories
//!
//! The set of categories is fixed at compile time. Entries can only be
//! recorded against one of these values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category from the closed set offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Groceries,
    Shopping,
    Clothes,
    Food,
    Entertainment,
}

impl Category {
    /// All categories, in selector order
    pub const ALL: [Category; 6] = [
        Category::Transportation,
        Category::Groceries,
        Category::Shopping,
        Category::Clothes,
        Category::Food,
        Category::Entertainment,
    ];

    /// Get all categories in selector order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Groceries => "Groceries",
            Self::Shopping => "Shopping",
            Self::Clothes => "Clothes",
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string is not one of the fixed category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse a category from its exact display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
