//! In-memory entry store
//!
//! Owns the recorded expenses, the in-progress draft and the monthly budget
//! for one session. Nothing here touches disk.

use chrono::{DateTime, Utc};

use crate::models::{Draft, DraftField, ExpenseEntry, ValidationError};

/// Monthly budget used when nothing else is configured
pub const DEFAULT_BUDGET: f64 = 5000.0;

/// Session-scoped store of expenses
///
/// Entries are append-only. The only way to add one is [`EntryStore::record_expense`].
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<ExpenseEntry>,
    draft: Draft,
    budget: f64,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    /// Create an empty store with the default budget
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            draft: Draft::new(),
            budget: DEFAULT_BUDGET,
        }
    }

    /// Create an empty store with a specific budget
    pub fn with_budget(budget: f64) -> Result<Self, ValidationError> {
        let mut store = Self::new();
        store.set_budget(budget)?;
        Ok(store)
    }

    /// All recorded entries in insertion order
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// The current draft
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The monthly budget
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace one draft field. Never fails and never validates.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
        tracing::debug!(%field, value = self.draft.get(field), "draft updated");
    }

    /// Validate the draft and, if valid, append it as a new entry dated now
    pub fn record_expense(&mut self) -> Result<&ExpenseEntry, ValidationError> {
        self.record_expense_at(Utc::now())
    }

    /// Validate the draft and, if valid, append it as a new entry dated `now`.
    ///
    /// If `now` is earlier than the last entry's date (clock moved
    /// backwards) the last date is reused so dates stay non-decreasing.
    /// On error nothing changes.
    pub fn record_expense_at(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<&ExpenseEntry, ValidationError> {
        let (category, amount) = self.draft.validate().map_err(|err| {
            tracing::warn!(error = %err, draft = ?self.draft, "expense rejected");
            err
        })?;

        let date = match self.entries.last() {
            Some(last) if last.date > now => last.date,
            _ => now,
        };

        let description = std::mem::take(&mut self.draft.description);
        self.draft = Draft::new();
        self.entries
            .push(ExpenseEntry::new(category, amount, description, date));

        let index = self.entries.len() - 1;
        let entry = &self.entries[index];
        tracing::info!(
            category = %entry.category,
            amount = entry.amount,
            count = self.entries.len(),
            "expense recorded"
        );
        Ok(entry)
    }

    /// Replace the monthly budget. Must be finite and greater than zero.
    pub fn set_budget(&mut self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            tracing::warn!(value, "budget rejected");
            return Err(ValidationError::InvalidBudget(value));
        }
        self.budget = value;
        tracing::info!(budget = value, "budget updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{Duration, TimeZone};

    fn fill(store: &mut EntryStore, category: &str, amount: &str, description: &str) {
        store.update_draft_field(DraftField::Category, category);
        store.update_draft_field(DraftField::Amount, amount);
        store.update_draft_field(DraftField::Description, description);
    }

    #[test]
    fn test_new_store() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.budget(), DEFAULT_BUDGET);
        assert_eq!(store.draft(), &Draft::new());
    }

    #[test]
    fn test_update_draft_field_leaves_others() {
        let mut store = EntryStore::new();
        store.update_draft_field(DraftField::Amount, "12");
        store.update_draft_field(DraftField::Category, "Food");
        store.update_draft_field(DraftField::Amount, "not a number");

        assert_eq!(store.draft().category, "Food");
        assert_eq!(store.draft().amount, "not a number");
        assert_eq!(store.draft().description, "");
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_expense_appends_and_resets() {
        let mut store = EntryStore::new();
        fill(&mut store, "Groceries", "42.50", "weekly shop");

        let entry = store.record_expense().unwrap().clone();
        assert_eq!(entry.category, Category::Groceries);
        assert_eq!(entry.amount, 42.5);
        assert_eq!(entry.description, "weekly shop");

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries().last(), Some(&entry));
        assert_eq!(store.draft(), &Draft::new());
    }

    #[test]
    fn test_record_expense_each_call_adds_one() {
        let mut store = EntryStore::new();
        for (i, amount) in ["1", "2.5", "-3", "1e3"].iter().enumerate() {
            fill(&mut store, "Food", amount, "");
            store.record_expense().unwrap();
            assert_eq!(store.len(), i + 1);
        }
        assert_eq!(store.entries()[3].amount, 1000.0);
    }

    #[test]
    fn test_record_expense_rejects_missing_category() {
        let mut store = EntryStore::new();
        fill(&mut store, "", "10", "");
        let before = store.draft().clone();

        let err = store.record_expense().unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);
        assert!(store.is_empty());
        assert_eq!(store.draft(), &before);
    }

    #[test]
    fn test_record_expense_rejects_bad_amounts() {
        let mut store = EntryStore::new();
        for bad in ["", "abc", "NaN", "inf"] {
            fill(&mut store, "Food", bad, "note");
            let before = store.draft().clone();
            assert!(store.record_expense().is_err());
            assert!(store.is_empty());
            assert_eq!(store.draft(), &before);
        }
    }

    #[test]
    fn test_dates_non_decreasing_when_clock_goes_back() {
        let mut store = EntryStore::new();
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        fill(&mut store, "Food", "5", "");
        store.record_expense_at(t0).unwrap();
        fill(&mut store, "Food", "6", "");
        store.record_expense_at(t0 - Duration::minutes(5)).unwrap();
        fill(&mut store, "Food", "7", "");
        store.record_expense_at(t0 + Duration::minutes(1)).unwrap();

        let dates: Vec<_> = store.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates[0], t0);
        assert_eq!(dates[1], t0);
        assert_eq!(dates[2], t0 + Duration::minutes(1));
    }

    #[test]
    fn test_set_budget() {
        let mut store = EntryStore::new();
        store.set_budget(1200.0).unwrap();
        assert_eq!(store.budget(), 1200.0);

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(store.set_budget(bad).is_err());
            assert_eq!(store.budget(), 1200.0);
        }
    }

    #[test]
    fn test_with_budget() {
        assert_eq!(EntryStore::with_budget(300.0).unwrap().budget(), 300.0);
        assert!(EntryStore::with_budget(0.0).is_err());
    }
}
