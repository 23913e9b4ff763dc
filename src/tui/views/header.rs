//! Budget and total spending header

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_amount, format_budget};
use crate::reports::total_spending;
use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Comprehensive Expense Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let symbol = app.currency();
    let budget = format_budget(app.store.budget(), symbol);
    let total = format_amount(total_spending(app.store.entries()), symbol);

    let lines = vec![
        Line::from(vec![
            Span::styled("Monthly Budget: ", Style::default().fg(Color::White)),
            Span::styled(budget, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Total Spending: ", Style::default().fg(Color::White)),
            Span::styled(
                total,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
