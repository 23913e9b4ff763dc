//! Layout definitions for the TUI
//!
//! Left column: history and category breakdown. Right column: totals
//! header, entry form and trend chart. Status bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Expense history list
    pub history: Rect,
    /// Category spending table
    pub breakdown: Rect,
    /// Budget and total header
    pub header: Rect,
    /// Entry form
    pub form: Rect,
    /// Spending trend chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(7), // Form
                Constraint::Min(6),    // Chart
            ])
            .split(columns[1]);

        Self {
            history: left[0],
            breakdown: left[1],
            header: right[0],
            form: right[1],
            chart: right[2],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_fit_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.height, 7);
        assert!(layout.history.x < layout.header.x);
        assert_eq!(layout.chart.y + layout.chart.height, 39);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let rect = centered_rect_fixed(40, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(rect, Rect::new(30, 20, 40, 10));

        let clipped = centered_rect_fixed(40, 10, Rect::new(0, 0, 20, 5));
        assert_eq!(clipped.width, 20);
        assert_eq!(clipped.height, 5);
    }
}
