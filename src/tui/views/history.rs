//! Expense history list
//!
//! One row per entry in insertion order. The newest rows are visible until
//! the list is scrolled back with PageUp.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{history_rows, truncate};
use crate::tui::app::App;

/// First row to draw so that `scroll` rows stay hidden below the window
pub fn history_offset(len: usize, visible: usize, scroll: usize) -> usize {
    let newest = len.saturating_sub(visible);
    newest - scroll.min(newest)
}

/// Render the history list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;
    let len = app.store.len();
    let offset = history_offset(len, visible, app.history_scroll);
    let hidden_below = len.saturating_sub(offset + visible);

    let title = if hidden_below > 0 {
        format!(" Expense History (+{} newer) ", hidden_below)
    } else {
        " Expense History ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows = history_rows(app.store.entries(), app.currency());
    if rows.is_empty() {
        let text = Paragraph::new("No expenses yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(category, amount)| {
            let amount_width = amount.chars().count();
            let label = truncate(category, inner_width.saturating_sub(amount_width + 1));
            let padding = inner_width.saturating_sub(label.chars().count() + amount_width);
            ListItem::new(Line::from(vec![
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(padding)),
                Span::styled(amount.clone(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::DraftField;
    use crate::storage::EntryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn history_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn store_with_amounts(count: usize) -> EntryStore {
        let mut store = EntryStore::new();
        for amount in 1..=count {
            store.update_draft_field(DraftField::Category, "Food");
            store.update_draft_field(DraftField::Amount, amount.to_string());
            store.record_expense().unwrap();
        }
        store
    }

    #[test]
    fn test_history_offset() {
        assert_eq!(history_offset(3, 10, 0), 0);
        assert_eq!(history_offset(20, 8, 0), 12);
        assert_eq!(history_offset(20, 8, 5), 7);
        assert_eq!(history_offset(20, 8, 50), 0);
    }

    #[test]
    fn test_overflow_shows_newest_rows() {
        let settings = Settings::default();
        let app = App::new(&settings, store_with_amounts(20));
        let text = history_text(&app, 40, 10);

        assert!(text.contains("$20.00"));
        assert!(text.contains("$13.00"));
        assert!(!text.contains("$12.00"));
        assert!(!text.contains("$1.00"));
    }

    #[test]
    fn test_scrolled_back_shows_oldest_rows() {
        let settings = Settings::default();
        let mut app = App::new(&settings, store_with_amounts(20));
        for _ in 0..4 {
            app.scroll_history_back();
        }
        let text = history_text(&app, 40, 10);

        assert!(text.contains("$1.00"));
        assert!(text.contains("$8.00"));
        assert!(!text.contains("$20.00"));
        assert!(text.contains("+12 newer"));
    }
}
