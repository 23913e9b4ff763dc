//! Aggregations over recorded entries
//!
//! Everything in this module is a pure function of an entry slice.

pub mod spending;
pub mod trend;

pub use spending::{category_spending, total_spending, CategoryBreakdown, CategorySpending};
pub use trend::{trend_series, TrendPoint};
