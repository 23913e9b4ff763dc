//! Spending aggregation
//!
//! Totals and per-category sums over a slice of entries. These are pure and
//! recomputed from scratch on every call.

use crate::models::{Category, ExpenseEntry};

/// Spending total for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpending {
    /// Category
    pub category: Category,
    /// Sum of amounts recorded against it
    pub total: f64,
    /// Number of entries
    pub entry_count: usize,
}

/// Per-category spending, in the order categories were first seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    rows: Vec<CategorySpending>,
}

impl CategoryBreakdown {
    /// Total for a category, or `None` if it has no entries
    pub fn get(&self, category: Category) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.total)
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[CategorySpending] {
        &self.rows
    }

    /// Categories present, in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rows.iter().map(|row| row.category)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(category, total)` pairs in first-seen order
    pub fn to_pairs(&self) -> Vec<(Category, f64)> {
        self.rows.iter().map(|row| (row.category, row.total)).collect()
    }
}

/// Sum of every entry's amount, in insertion order. `0.0` when empty.
pub fn total_spending(entries: &[ExpenseEntry]) -> f64 {
    entries.iter().fold(0.0, |total, entry| total + entry.amount)
}

/// Sum of amounts grouped by category.
///
/// Only categories with at least one entry appear.
pub fn category_spending(entries: &[ExpenseEntry]) -> CategoryBreakdown {
    let mut rows: Vec<CategorySpending> = Vec::new();

    for entry in entries {
        match rows.iter_mut().find(|row| row.category == entry.category) {
            Some(row) => {
                row.total += entry.amount;
                row.entry_count += 1;
            }
            None => rows.push(CategorySpending {
                category: entry.category,
                total: entry.amount,
                entry_count: 1,
            }),
        }
    }

    CategoryBreakdown { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(category: Category, amount: f64) -> ExpenseEntry {
        ExpenseEntry::new(category, amount, "", Utc::now())
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(total_spending(&[]), 0.0);
    }

    #[test]
    fn test_total_sums_amounts() {
        let entries = vec![
            entry(Category::Food, 10.0),
            entry(Category::Shopping, 2.25),
            entry(Category::Food, 0.75),
        ];
        assert_eq!(total_spending(&entries), 13.0);
    }

    #[test]
    fn test_total_is_stable_across_calls() {
        let entries = vec![
            entry(Category::Food, 0.1),
            entry(Category::Food, 0.2),
            entry(Category::Food, 0.3),
        ];
        let first = total_spending(&entries);
        assert_eq!(first, total_spending(&entries));
        assert!((first - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_category_grouping() {
        let entries = vec![
            entry(Category::Food, 10.0),
            entry(Category::Food, 5.0),
            entry(Category::Shopping, 20.0),
        ];
        let breakdown = category_spending(&entries);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.get(Category::Food), Some(15.0));
        assert_eq!(breakdown.get(Category::Shopping), Some(20.0));
        assert_eq!(breakdown.get(Category::Groceries), None);
        assert_eq!(breakdown.rows()[0].entry_count, 2);
    }

    #[test]
    fn test_category_first_seen_order() {
        let entries = vec![
            entry(Category::Shopping, 1.0),
            entry(Category::Food, 1.0),
            entry(Category::Shopping, 1.0),
            entry(Category::Transportation, 1.0),
        ];
        let order: Vec<_> = category_spending(&entries).categories().collect();
        assert_eq!(
            order,
            vec![
                Category::Shopping,
                Category::Food,
                Category::Transportation
            ]
        );
    }

    #[test]
    fn test_category_empty() {
        assert!(category_spending(&[]).is_empty());
    }

    #[test]
    fn test_category_totals_match_overall_total() {
        let entries = vec![
            entry(Category::Clothes, 40.0),
            entry(Category::Entertainment, 15.5),
            entry(Category::Clothes, 4.5),
        ];
        let breakdown = category_spending(&entries);
        let sum: f64 = breakdown.to_pairs().iter().map(|(_, t)| t).sum();
        assert_eq!(sum, total_spending(&entries));
    }
}
