//! Mealboard — terminal meal planner.
//!
//! Plans meals across a calendar month: pick menu items per category for
//! each day, persist everything in one JSON file next to the executable,
//! and export a month to an XLSX spreadsheet.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mealboard::config::Config;
use mealboard::constants::{APP_BINARY_NAME, APP_NAME};
use mealboard::models::MonthKey;
use mealboard::storage::Storage;
use mealboard::{export, tui};

/// Mealboard - terminal meal planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory override (defaults to the executable's directory)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Export one month (YYYY-MM) to the export directory and exit
    #[arg(long, value_name = "YYYY-MM")]
    export: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = cli
        .data_dir
        .map_or_else(Storage::beside_executable, Storage::new);
    let planner = storage.load();

    if let Some(month) = cli.export {
        let month: MonthKey = match month.parse() {
            Ok(month) => month,
            Err(e) => {
                eprintln!("Error: {e:#}");
                eprintln!();
                eprintln!("Example:");
                eprintln!("  {APP_BINARY_NAME} --export 2026-02");
                std::process::exit(1);
            }
        };
        let path = export::export_month(&planner, month, &storage.export_dir())?;
        println!("Exported {}", path.display());
        return Ok(());
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // Preferences are optional: a missing or unreadable config means defaults
    let config = Config::load().unwrap_or_default();

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(planner, storage, config);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
