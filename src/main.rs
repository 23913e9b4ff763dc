use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::display::format_session_summary;
use expense_tracker::logging::init_logging;
use expense_tracker::models::Category;
use expense_tracker::storage::EntryStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "Record expenses against a fixed set of categories and watch the \
                  running total, the per-category breakdown and the spending trend. \
                  Entries are kept for the current session only."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Starting monthly budget (overrides the settings file)
    #[arg(short, long, global = true)]
    budget: Option<f64>,

    /// Don't print the session summary after leaving the TUI
    #[arg(long, global = true)]
    no_summary: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// List the expense categories
    Categories,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(budget) = cli.budget {
        settings.monthly_budget = budget;
        settings.validate()?;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_logging(&paths, &settings)?;
            let store = EntryStore::with_budget(settings.monthly_budget)?;
            let store = expense_tracker::tui::run_tui(&settings, store)?;
            if !cli.no_summary && !store.is_empty() {
                println!(
                    "{}",
                    format_session_summary(&store, &settings.currency_symbol, &settings.date_format)
                );
            }
        }
        Commands::Categories => {
            for category in Category::all() {
                println!("{}", category);
            }
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!(
                "Wrote settings to: {}",
                paths.settings_file().display()
            );
        }
        Commands::Config => {
            println!("expense-tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Monthly budget:  {}", settings.monthly_budget);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
