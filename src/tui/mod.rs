//! Terminal User Interface module
//!
//! A single-screen ratatui interface: expense history, category breakdown,
//! entry form and spending chart, plus a budget dialog and error notices.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
