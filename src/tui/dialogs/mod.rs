//! Dialog modules for the TUI
//!
//! Contains modal dialogs

pub mod budget;
