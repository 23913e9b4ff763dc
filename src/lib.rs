//! expense-tracker - Terminal expense-entry widget
//!
//! Record expenses against a fixed set of categories and see a running
//! total, a per-category breakdown and a spending trend chart. Entries live
//! in memory for one session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Categories, entries and the draft
//! - `storage`: The in-memory entry store
//! - `reports`: Pure aggregations (total, per category, trend)
//! - `display`: Text formatting shared by the TUI and the exit summary
//! - `tui`: The ratatui interface
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::DraftField;
//! use expense_tracker::reports::total_spending;
//! use expense_tracker::storage::EntryStore;
//!
//! let mut store = EntryStore::new();
//! store.update_draft_field(DraftField::Category, "Groceries");
//! store.update_draft_field(DraftField::Amount, "42.50");
//! store.record_expense().unwrap();
//!
//! assert_eq!(total_spending(store.entries()), 42.5);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
