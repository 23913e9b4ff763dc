//! Expense entry form
//!
//! Category selector, amount and description inputs, and the add button.
//! The form only holds widget state (focus, cursors); every edit is
//! forwarded to the store's draft, which is the value that gets submitted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, DraftField};
use crate::tui::app::App;
use crate::tui::widgets::input::TextInput;

/// Which form control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Category,
    Amount,
    Description,
    Submit,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Submit,
            Self::Submit => Self::Category,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Submit,
            Self::Amount => Self::Category,
            Self::Description => Self::Amount,
            Self::Submit => Self::Description,
        }
    }

    /// The draft field this control edits, if any
    pub fn draft_field(self) -> Option<DraftField> {
        match self {
            Self::Category => Some(DraftField::Category),
            Self::Amount => Some(DraftField::Amount),
            Self::Description => Some(DraftField::Description),
            Self::Submit => None,
        }
    }
}

impl From<DraftField> for FormField {
    fn from(field: DraftField) -> Self {
        match field {
            DraftField::Category => Self::Category,
            DraftField::Amount => Self::Amount,
            DraftField::Description => Self::Description,
        }
    }
}

/// Widget state for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused control
    pub focused_field: FormField,

    /// Index into [`Category::ALL`]; `None` shows the placeholder
    pub category_index: Option<usize>,

    /// Amount input
    pub amount_input: TextInput,

    /// Description input
    pub description_input: TextInput,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create an empty form with the category selector focused
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: FormField::Category,
            category_index: None,
            amount_input: TextInput::new().label("Amount").placeholder("Amount"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Description (Optional)"),
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.description_input.focused = self.focused_field == FormField::Description;
    }

    /// The focused text input, if the focused control is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Description => Some(&mut self.description_input),
            FormField::Category | FormField::Submit => None,
        }
    }

    /// Currently selected category
    pub fn selected_category(&self) -> Option<Category> {
        self.category_index.and_then(|i| Category::ALL.get(i).copied())
    }

    /// Step the selector forward and return the new draft value.
    ///
    /// From the placeholder this selects the first category; past the last
    /// it wraps back to the placeholder.
    pub fn select_next_category(&mut self) -> &'static str {
        self.category_index = match self.category_index {
            None => Some(0),
            Some(i) if i + 1 < Category::ALL.len() => Some(i + 1),
            Some(_) => None,
        };
        self.category_value()
    }

    /// Step the selector backward and return the new draft value
    pub fn select_prev_category(&mut self) -> &'static str {
        self.category_index = match self.category_index {
            None => Some(Category::ALL.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.category_value()
    }

    /// Draft text for the current selection (empty for the placeholder)
    pub fn category_value(&self) -> &'static str {
        self.selected_category().map(|c| c.name()).unwrap_or("")
    }

    /// Clear every control back to its initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    render_category_selector(frame, form, chunks[0]);
    frame.render_widget(form.amount_input.clone(), chunks[1]);
    frame.render_widget(form.description_input.clone(), chunks[2]);
    render_submit_button(frame, form.focused_field == FormField::Submit, chunks[4]);
}

fn render_category_selector(frame: &mut Frame, form: &EntryFormState, area: Rect) {
    let focused = form.focused_field == FormField::Category;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let (value, value_style) = match form.selected_category() {
        Some(category) => (category.name(), Style::default().fg(Color::Yellow)),
        None => ("Select Category", Style::default().fg(Color::DarkGray)),
    };
    let arrow_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("Category", label_style),
        Span::raw(": "),
        Span::styled("◀ ", arrow_style),
        Span::styled(value, value_style),
        Span::styled(" ▶", arrow_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_submit_button(frame: &mut Frame, focused: bool, area: Rect) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Add Expense ]", style)))
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
