//! Error dialog widget
//!
//! A blocking notice with details and recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;
use crate::models::{DraftField, ValidationError};

/// What the error dialog shows
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Describe a rejected draft or budget value
    pub fn from_validation(error: &ValidationError) -> Self {
        let suggestions = match error.field() {
            Some(DraftField::Category) => vec![format!(
                "Use Left/Right on the category field to pick one of: {}",
                crate::models::Category::all()
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
            Some(DraftField::Amount) => {
                vec!["Enter a number such as 12 or 42.50".to_string()]
            }
            Some(DraftField::Description) => vec![],
            None => vec!["Enter a number greater than zero".to_string()],
        };

        Self {
            title: "Validation Error".to_string(),
            details: error.to_string(),
            suggestions,
        }
    }

    /// Describe any application error
    pub fn from_error(error: &ExpenseError) -> Self {
        match error {
            ExpenseError::Validation(inner) => Self::from_validation(inner),
            ExpenseError::Config(msg) => Self {
                title: "Configuration Error".to_string(),
                details: msg.clone(),
                suggestions: vec!["Check config.json for syntax errors".to_string()],
            },
            ExpenseError::Io(msg) | ExpenseError::Json(msg) => Self::simple("I/O Error", msg),
            ExpenseError::Tui(msg) => Self {
                title: "Interface Error".to_string(),
                details: msg.clone(),
                suggestions: vec!["Try resizing your terminal window".to_string()],
            },
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let lines: Vec<Line> = self
                .error
                .suggestions
                .iter()
                .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())]))
                .collect();

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 60 / 100).clamp(40, 72).min(parent.width);
    let height = 10.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_info() {
        let info = ErrorInfo::from_validation(&ValidationError::MissingCategory);
        assert_eq!(info.title, "Validation Error");
        assert_eq!(info.details, "Please select a category");
        assert!(info.suggestions[0].contains("Groceries"));
    }

    #[test]
    fn test_from_error_unwraps_validation() {
        let err = ExpenseError::Validation(ValidationError::InvalidAmount("x".into()));
        let info = ErrorInfo::from_error(&err);
        assert_eq!(info.details, "'x' is not a valid amount");
    }

    #[test]
    fn test_dialog_area_fits_small_parent() {
        let area = error_dialog_area(Rect::new(0, 0, 30, 6));
        assert!(area.width <= 30);
        assert!(area.height <= 6);
    }
}
