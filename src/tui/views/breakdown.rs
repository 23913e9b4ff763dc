//! Category spending table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::breakdown_rows;
use crate::reports::category_spending;
use crate::tui::app::App;

/// Render the per-category totals
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Category Spending ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let breakdown = category_spending(app.store.entries());
    if breakdown.is_empty() {
        let text = Paragraph::new("Nothing spent yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = breakdown_rows(&breakdown, app.currency())
        .into_iter()
        .map(|(category, total)| {
            Row::new(vec![
                Cell::from(category),
                Cell::from(total).style(Style::default().fg(Color::Blue)),
            ])
        })
        .collect();

    let widths = [Constraint::Min(14), Constraint::Length(14)];
    frame.render_widget(Table::new(rows, widths).block(block), area);
}
