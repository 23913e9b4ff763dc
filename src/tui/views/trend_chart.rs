//! Spending trend chart
//!
//! Plots one point per entry, evenly spaced in insertion order, with the
//! first and last entry dates as x-axis labels.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::{format_amount, format_date};
use crate::reports::trend::{amount_bounds, chart_points};
use crate::reports::{trend_series, TrendPoint};
use crate::tui::app::App;

/// Y-axis bounds with a little headroom; always includes zero
pub fn y_bounds(series: &[TrendPoint]) -> [f64; 2] {
    let (lo, hi) = amount_bounds(series);
    let lo = lo.min(0.0);
    let hi = if hi <= 0.0 { 1.0 } else { hi + hi / 10.0 };
    [lo, hi]
}

/// X-axis bounds for `len` evenly spaced points
pub fn x_bounds(len: usize) -> [f64; 2] {
    [0.0, len.saturating_sub(1).max(1) as f64]
}

/// Render the chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending Trend ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let series = trend_series(app.store.entries());
    if series.is_empty() {
        let text = Paragraph::new("Add an expense to see the trend.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let points = chart_points(&series);
    let graph_type = if points.len() > 1 {
        GraphType::Line
    } else {
        GraphType::Scatter
    };

    let dataset = Dataset::default()
        .name("amount")
        .marker(symbols::Marker::Braille)
        .graph_type(graph_type)
        .style(Style::default().fg(Color::Magenta))
        .data(&points);

    let date_format = app.settings.date_format.as_str();
    let mut x_labels = vec![Span::raw(format_date(&series[0].date, date_format))];
    if let Some(last) = series.last().filter(|_| series.len() > 1) {
        x_labels.push(Span::raw(format_date(&last.date, date_format)));
    }

    let [y_lo, y_hi] = y_bounds(&series);
    let symbol = app.currency();
    let y_labels = vec![
        Span::raw(format_amount(y_lo, symbol)),
        Span::raw(format_amount((y_lo + y_hi) / 2.0, symbol)),
        Span::raw(format_amount(y_hi, symbol)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds(points.len()))
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
