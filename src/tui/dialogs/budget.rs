//! Monthly budget dialog
//!
//! Small modal to replace the session's budget

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{parse_amount, ValidationError};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetDialogState {
    /// Budget text being edited
    pub input: TextInput,
    /// Error message
    pub error_message: Option<String>,
}

impl BudgetDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill with the current budget
    pub fn init(&mut self, current: f64) {
        self.input = TextInput::new()
            .label("Budget")
            .content(current.to_string())
            .focused(true);
        self.error_message = None;
    }

    /// Parse the input as a budget value
    pub fn parse(&self) -> Result<f64, ValidationError> {
        let value = parse_amount(self.input.value())?;
        if value <= 0.0 {
            return Err(ValidationError::InvalidBudget(value));
        }
        Ok(value)
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let state = &app.budget_dialog;
    frame.render_widget(state.input.clone(), chunks[0]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[1],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}
