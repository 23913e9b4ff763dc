//! Core data models
//!
//! Categories, recorded entries, and the in-progress draft.

pub mod category;
pub mod draft;
pub mod entry;

pub use category::{Category, UnknownCategory};
pub use draft::{parse_amount, Draft, DraftField, ValidationError};
pub use entry::ExpenseEntry;
