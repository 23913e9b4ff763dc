//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the session's [`EntryStore`]; views read from it and the handler
//! mutates it only through the store's operations.

use crate::config::settings::Settings;
use crate::display::format_history_row;
use crate::models::{DraftField, ValidationError};
use crate::storage::EntryStore;

use super::dialogs::budget::BudgetDialogState;
use super::views::entry_form::{EntryFormState, FormField};
use super::widgets::ErrorInfo;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Budget,
    Error(ErrorInfo),
}

/// Rows moved per PageUp/PageDown in the history list
pub const HISTORY_PAGE: usize = 5;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The session's expenses, draft and budget
    pub store: EntryStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Entry form widget state
    pub form: EntryFormState,

    /// Budget dialog state
    pub budget_dialog: BudgetDialogState,

    /// Status message to display
    pub status_message: Option<String>,

    /// How many rows the history list is scrolled back from the newest entry
    pub history_scroll: usize,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, store: EntryStore) -> Self {
        Self {
            settings,
            store,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            form: EntryFormState::new(),
            budget_dialog: BudgetDialogState::new(),
            status_message: None,
            history_scroll: 0,
        }
    }

    /// Give back the store when the session ends
    pub fn into_store(self) -> EntryStore {
        self.store
    }

    /// Currency symbol from settings
    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Budget {
            self.budget_dialog.init(self.store.budget());
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Forward the focused control's text to the draft
    pub fn sync_draft_from_form(&mut self) {
        let value = match self.form.focused_field {
            FormField::Amount => self.form.amount_input.value().to_string(),
            FormField::Description => self.form.description_input.value().to_string(),
            FormField::Category => self.form.category_value().to_string(),
            FormField::Submit => return,
        };
        if let Some(field) = self.form.focused_field.draft_field() {
            self.store.update_draft_field(field, value);
        }
    }

    /// Set the draft category from the selector
    pub fn select_category(&mut self, forward: bool) {
        let value = if forward {
            self.form.select_next_category()
        } else {
            self.form.select_prev_category()
        };
        self.store.update_draft_field(DraftField::Category, value);
    }

    /// Scroll the history list towards older entries
    pub fn scroll_history_back(&mut self) {
        let max = self.store.len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + HISTORY_PAGE).min(max);
    }

    /// Scroll the history list towards the newest entry
    pub fn scroll_history_forward(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(HISTORY_PAGE);
    }

    /// Submit the draft.
    ///
    /// On success the form is cleared and a status message is shown. On
    /// failure the offending field is focused and a blocking error dialog
    /// opens; the draft is left as it was.
    pub fn submit_expense(&mut self) {
        let symbol = self.settings.currency_symbol.clone();
        let result = self
            .store
            .record_expense()
            .map(|entry| format_history_row(entry, &symbol));

        match result {
            Ok(row) => {
                self.form.reset();
                self.history_scroll = 0;
                self.set_status(format!("Added {}", row));
            }
            Err(err) => self.show_validation_error(&err),
        }
    }

    /// Apply the budget dialog's value
    pub fn submit_budget(&mut self) {
        let result = self
            .budget_dialog
            .parse()
            .and_then(|value| self.store.set_budget(value).map(|()| value));

        match result {
            Ok(value) => {
                self.close_dialog();
                self.set_status(format!(
                    "Budget set to {}",
                    crate::display::format_budget(value, &self.settings.currency_symbol)
                ));
            }
            Err(err) => self.budget_dialog.set_error(err.to_string()),
        }
    }

    fn show_validation_error(&mut self, err: &ValidationError) {
        if let Some(field) = err.field() {
            self.form.set_focus(FormField::from(field));
        }
        self.clear_status();
        self.open_dialog(ActiveDialog::Error(ErrorInfo::from_validation(err)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draft;

    #[test]
    fn test_submit_valid_expense() {
        let settings = Settings::default();
        let mut app = App::new(&settings, EntryStore::new());

        app.select_category(true);
        app.select_category(true);
        app.store.update_draft_field(DraftField::Amount, "42.50");
        app.submit_expense();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Added Groceries  $42.50"));
        assert_eq!(app.form.category_index, None);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_submit_invalid_opens_error_and_focuses_field() {
        let settings = Settings::default();
        let mut app = App::new(&settings, EntryStore::new());
        app.store.update_draft_field(DraftField::Category, "Food");
        app.store.update_draft_field(DraftField::Amount, "ten");
        app.form.set_focus(FormField::Submit);

        app.submit_expense();

        assert!(app.store.is_empty());
        assert_eq!(app.form.focused_field, FormField::Amount);
        assert!(matches!(app.active_dialog, ActiveDialog::Error(_)));
        assert_eq!(app.store.draft().amount, "ten");
    }

    #[test]
    fn test_submit_budget() {
        let settings = Settings::default();
        let mut app = App::new(&settings, EntryStore::new());
        app.open_dialog(ActiveDialog::Budget);
        app.budget_dialog.input.clear();
        for c in "1200".chars() {
            app.budget_dialog.input.insert(c);
        }
        app.submit_budget();

        assert_eq!(app.store.budget(), 1200.0);
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Budget set to $1200"));
    }

    #[test]
    fn test_submit_budget_rejects_zero() {
        let settings = Settings::default();
        let mut app = App::new(&settings, EntryStore::new());
        app.open_dialog(ActiveDialog::Budget);
        app.budget_dialog.input.clear();
        app.budget_dialog.input.insert('0');
        app.submit_budget();

        assert_eq!(app.store.budget(), 5000.0);
        assert_eq!(app.active_dialog, ActiveDialog::Budget);
        assert!(app.budget_dialog.error_message.is_some());
        assert_eq!(app.store.draft(), &Draft::new());
    }

    #[test]
    fn test_history_scroll_clamps_and_resets_on_add() {
        let settings = Settings::default();
        let mut app = App::new(&settings, EntryStore::new());
        for _ in 0..8 {
            app.store.update_draft_field(DraftField::Category, "Food");
            app.store.update_draft_field(DraftField::Amount, "3");
            app.submit_expense();
        }

        app.scroll_history_back();
        assert_eq!(app.history_scroll, HISTORY_PAGE);
        app.scroll_history_back();
        assert_eq!(app.history_scroll, 7);
        app.scroll_history_forward();
        assert_eq!(app.history_scroll, 2);

        app.store.update_draft_field(DraftField::Category, "Food");
        app.store.update_draft_field(DraftField::Amount, "4");
        app.submit_expense();
        assert_eq!(app.history_scroll, 0);
    }
}
