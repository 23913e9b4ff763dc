//! Configuration module for expense-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Startup settings (default budget, currency, log level)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
