//! Tracing setup
//!
//! The TUI owns stdout, so log output goes to a file in the base directory.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Environment variable holding a log filter directive
pub const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter from `EXPENSE_TRACKER_LOG`, falling back to the settings level
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to the log file.
///
/// Only the first call has any effect.
pub fn init_logging(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let filter = build_filter(settings);
    TRACING_INIT.call_once(move || {
        let _ = fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    });

    Ok(())
}
