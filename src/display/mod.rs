//! Display formatting for terminal output
//!
//! Shared formatting for the TUI views and the end-of-session summary.

pub mod report;

pub use report::format_session_summary;

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::ExpenseEntry;
use crate::reports::CategoryBreakdown;

/// Date format used when none is configured, or the configured one fails
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let digits = format!("{:.2}", amount.abs());
    // Anything that rounds to zero prints unsigned
    if amount < 0.0 && digits != "0.00" {
        format!("-{}{}", symbol, digits)
    } else {
        format!("{}{}", symbol, digits)
    }
}

/// Format a date with a strftime pattern, falling back to [`DEFAULT_DATE_FORMAT`]
pub fn format_date(date: &DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// Format a budget the way the header shows it (no forced decimals)
pub fn format_budget(budget: f64, symbol: &str) -> String {
    format!("{}{}", symbol, budget)
}

/// One history line: category, two spaces, formatted amount
pub fn format_history_row(entry: &ExpenseEntry, symbol: &str) -> String {
    format!("{}  {}", entry.category, format_amount(entry.amount, symbol))
}

/// `(category, amount)` label pairs for the history list, in insertion order
pub fn history_rows(entries: &[ExpenseEntry], symbol: &str) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.category.to_string(), format_amount(e.amount, symbol)))
        .collect()
}

/// `(category, total)` label pairs for the breakdown table
pub fn breakdown_rows(breakdown: &CategoryBreakdown, symbol: &str) -> Vec<(String, String)> {
    breakdown
        .rows()
        .iter()
        .map(|row| (row.category.to_string(), format_amount(row.total, symbol)))
        .collect()
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max_len - 1).collect();
        out.push('…');
        out
    }
}
