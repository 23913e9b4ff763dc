//! Spending trend series
//!
//! One chart point per entry, in insertion order. No bucketing.

use chrono::{DateTime, Utc};

use crate::models::ExpenseEntry;

/// A single point on the spending chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub amount: f64,
}

/// Build the chart series for a slice of entries
pub fn trend_series(entries: &[ExpenseEntry]) -> Vec<TrendPoint> {
    entries
        .iter()
        .map(|entry| TrendPoint {
            date: entry.date,
            amount: entry.amount,
        })
        .collect()
}

/// Convert a series to `(x, y)` chart coordinates, x being the point index
pub fn chart_points(series: &[TrendPoint]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.amount))
        .collect()
}

/// Smallest and largest amount in a series, `(0.0, 0.0)` when empty
pub fn amount_bounds(series: &[TrendPoint]) -> (f64, f64) {
    series.iter().fold(None, |acc: Option<(f64, f64)>, p| match acc {
        None => Some((p.amount, p.amount)),
        Some((lo, hi)) => Some((lo.min(p.amount), hi.max(p.amount))),
    })
    .unwrap_or((0.0, 0.0))
}
