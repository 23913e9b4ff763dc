//! Storage layer for expense-tracker
//!
//! Entries live in memory for the lifetime of the session.

pub mod entries;

pub use entries::{EntryStore, DEFAULT_BUDGET};
