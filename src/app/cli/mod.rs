//! CLI Adapter.

mod generate;
mod history;
mod key;
mod render;
mod session;
mod style;

use std::io::{ErrorKind, IsTerminal};

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Password};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DefaultController};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "reelprompt")]
#[command(version)]
#[command(
    about = "Turn short video ideas into structured prompts for video generation models",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a structured prompt from an idea
    #[clap(visible_alias = "g")]
    Generate {
        /// The video idea (reuses the last idea when omitted)
        #[arg(trailing_var_arg = true)]
        idea: Vec<String>,
        /// Style to apply (CINEMATIC, PRODUCT, SOCIAL or a custom style id)
        #[arg(short, long, conflicts_with = "no_style")]
        style: Option<String>,
        /// Clear the selected style before generating
        #[arg(long)]
        no_style: bool,
        /// Print the composed request payload without calling the model
        #[arg(long)]
        dry_run: bool,
    },
    /// Regenerate the last idea with an extra instruction (e.g. Darker, "More Cinematic")
    #[clap(visible_alias = "rx")]
    Remix {
        /// Instruction folded into the idea as "(Make it ...)"
        #[arg(required = true, num_args = 1..)]
        instruction: Vec<String>,
    },
    /// Show the current idea, style and last output
    Show,
    /// Copy the last output to the clipboard
    #[clap(visible_alias = "cp")]
    Copy,
    /// Manage built-in and custom styles
    #[clap(visible_alias = "s")]
    Style {
        #[command(subcommand)]
        command: style::StyleCommands,
    },
    /// Browse or clear generation history
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
    /// Manage the Gemini API key
    Key {
        #[command(subcommand)]
        command: key::KeyCommands,
    },
    /// Start an interactive session
    #[clap(visible_alias = "i")]
    Session,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { idea, style, no_style, dry_run } => {
            generate::run_generate(&idea, style.as_deref(), no_style, dry_run)
        }
        Commands::Remix { instruction } => generate::run_remix(&instruction.join(" ")),
        Commands::Show => generate::run_show().map(|_| 0),
        Commands::Copy => generate::run_copy().map(|_| 0),
        Commands::Style { command } => style::run_style(command).map(|_| 0),
        Commands::History { command } => history::run_history(command).map(|_| 0),
        Commands::Key { command } => key::run_key(command).map(|_| 0),
        Commands::Session => session::run_session().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays clean for prompts. `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn open_controller() -> Result<DefaultController, AppError> {
    api::open_controller()
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask for an API key and save it. Returns `false` when the user backs out.
fn prompt_credential(controller: &mut DefaultController) -> Result<bool, AppError> {
    let key = match Password::new().with_prompt("Gemini API key").allow_empty_password(true).interact()
    {
        Ok(value) => value,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            controller.dismiss_credential_prompt();
            return Ok(false);
        }
        Err(err) => {
            return Err(AppError::config_error(format!("Failed to read API key: {}", err)));
        }
    };

    if key.trim().is_empty() {
        controller.dismiss_credential_prompt();
        return Ok(false);
    }

    controller.save_credential(&key)?;
    println!("✅ API key saved");
    Ok(true)
}

/// Reject style ids that name neither a built-in nor a saved custom style.
fn ensure_known_style(controller: &DefaultController, id: &str) -> Result<(), AppError> {
    if controller.is_known_style(id) {
        Ok(())
    } else {
        Err(AppError::StyleNotFound(id.to_string()))
    }
}
