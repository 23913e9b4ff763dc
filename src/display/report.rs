//! End-of-session summary
//!
//! Printed to stdout after the TUI exits, since entries are not kept.

use tabled::{settings::Style, Table, Tabled};

use super::{format_amount, format_date};
use crate::reports::{category_spending, total_spending};
use crate::storage::EntryStore;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Recorded")]
    recorded: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Render the history, the category breakdown and the totals as text tables
pub fn format_session_summary(store: &EntryStore, symbol: &str, date_format: &str) -> String {
    let entries = store.entries();
    if entries.is_empty() {
        return "No expenses recorded this session.".to_string();
    }

    let history: Vec<HistoryRow> = entries
        .iter()
        .map(|e| HistoryRow {
            recorded: format_date(&e.date, date_format),
            category: e.category.to_string(),
            amount: format_amount(e.amount, symbol),
            description: e.description.clone(),
        })
        .collect();

    let breakdown: Vec<BreakdownRow> = category_spending(entries)
        .rows()
        .iter()
        .map(|row| BreakdownRow {
            category: row.category.to_string(),
            entries: row.entry_count,
            total: format_amount(row.total, symbol),
        })
        .collect();

    let mut output = String::new();
    output.push_str("Expense History\n");
    output.push_str(&Table::new(history).with(Style::rounded()).to_string());
    output.push_str("\n\nCategory Spending\n");
    output.push_str(&Table::new(breakdown).with(Style::rounded()).to_string());
    output.push_str(&format!(
        "\n\nTotal Spending: {}  (Monthly Budget: {})\n",
        format_amount(total_spending(entries), symbol),
        super::format_budget(store.budget(), symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftField;

    #[test]
    fn test_empty_summary() {
        let store = EntryStore::new();
        assert_eq!(
            format_session_summary(&store, "$", "%Y-%m-%d"),
            "No expenses recorded this session."
        );
    }

    #[test]
    fn test_summary_contains_rows_and_total() {
        let mut store = EntryStore::new();
        for (category, amount) in [("Food", "10"), ("Food", "5"), ("Shopping", "20")] {
            store.update_draft_field(DraftField::Category, category);
            store.update_draft_field(DraftField::Amount, amount);
            store.record_expense().unwrap();
        }

        let summary = format_session_summary(&store, "$", "%Y-%m-%d");
        assert!(summary.contains("Expense History"));
        assert!(summary.contains("Category Spending"));
        assert!(summary.contains("$15.00"));
        assert!(summary.contains("$20.00"));
        assert!(summary.contains("Total Spending: $35.00  (Monthly Budget: $5000)"));
    }

    #[test]
    fn test_summary_survives_unknown_date_specifier() {
        let mut store = EntryStore::new();
        store.update_draft_field(DraftField::Category, "Food");
        store.update_draft_field(DraftField::Amount, "1");
        store.record_expense().unwrap();

        let summary = format_session_summary(&store, "$", "%Q");
        let expected = format_date(&store.entries()[0].date, crate::display::DEFAULT_DATE_FORMAT);
        assert!(summary.contains(&expected));
        assert!(summary.contains("Total Spending: $1.00"));
    }
}
