//! History commands.

use chrono::{Local, TimeZone};
use clap::Subcommand;

use crate::domain::AppError;

use super::open_controller;
use super::render::print_output;

const PREVIEW_CHARS: usize = 60;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent results, newest first
    #[clap(visible_alias = "ls")]
    List,
    /// Print a prior result and make it the current output
    Show {
        /// History entry id
        id: String,
    },
    /// Remove all history entries
    Clear,
}

pub fn run_history(command: HistoryCommands) -> Result<(), AppError> {
    let mut controller = open_controller()?;

    match command {
        HistoryCommands::List => {
            if controller.history().is_empty() {
                println!("No history yet.");
                return Ok(());
            }
            for entry in controller.history() {
                println!(
                    "{}  {}  [{}]  {}",
                    entry.id,
                    format_timestamp(entry.timestamp),
                    entry.style,
                    entry.preview(PREVIEW_CHARS)
                );
            }
        }
        HistoryCommands::Show { id } => {
            let output = controller.select_history(&id)?;
            print_output(&output);
        }
        HistoryCommands::Clear => {
            controller.clear_history()?;
            println!("✅ Cleared history");
        }
    }

    Ok(())
}

pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}
