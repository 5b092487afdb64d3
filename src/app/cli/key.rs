//! API key commands.

use clap::Subcommand;

use crate::domain::AppError;

use super::{is_interactive, open_controller, prompt_credential};

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Save the Gemini API key (prompts when omitted)
    Set {
        /// API key value
        key: Option<String>,
    },
    /// Remove the saved API key
    Clear,
    /// Report whether an API key is saved
    Status,
}

pub fn run_key(command: KeyCommands) -> Result<(), AppError> {
    let mut controller = open_controller()?;

    match command {
        KeyCommands::Set { key: Some(key) } => {
            if key.trim().is_empty() {
                return Err(AppError::config_error("API key must not be empty"));
            }
            controller.save_credential(&key)?;
            println!("✅ API key saved");
        }
        KeyCommands::Set { key: None } => {
            if !is_interactive() {
                return Err(AppError::config_error(
                    "No API key given. Run: reelprompt key set <KEY>",
                ));
            }
            prompt_credential(&mut controller)?;
        }
        KeyCommands::Clear => {
            controller.save_credential("")?;
            println!("✅ API key removed");
        }
        KeyCommands::Status => {
            if controller.state().has_credential() {
                println!("API key: configured");
            } else {
                println!("API key: not configured");
            }
        }
    }

    Ok(())
}
