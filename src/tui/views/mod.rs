//! TUI Views module
//!
//! Every view recomputes what it shows from the store on each frame.

pub mod breakdown;
pub mod entry_form;
pub mod header;
pub mod history;
pub mod status_bar;
pub mod trend_chart;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, ErrorDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    history::render(frame, app, layout.history);
    breakdown::render(frame, app, layout.breakdown);
    header::render(frame, app, layout.header);
    entry_form::render(frame, app, layout.form);
    trend_chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}
