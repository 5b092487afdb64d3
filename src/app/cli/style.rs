//! Style commands.

use clap::Subcommand;

use crate::app::api::DefaultController;
use crate::domain::{AppError, BuiltinStyle};

use super::{ensure_known_style, is_interactive, open_controller, prompt_credential};

#[derive(Subcommand)]
pub enum StyleCommands {
    /// List built-in and custom styles
    #[clap(visible_alias = "ls")]
    List,
    /// Select a style for subsequent generations
    Use {
        /// Style id (CINEMATIC, PRODUCT, SOCIAL or a custom style id)
        id: String,
    },
    /// Clear the selected style
    Clear,
    /// Save a custom style and select it
    Add {
        /// Display name
        name: String,
        /// Style instructions appended to every request
        description: String,
        /// Expand the description with the model before saving
        #[arg(long)]
        optimize: bool,
    },
    /// Delete a custom style
    #[clap(visible_alias = "rm")]
    Delete {
        /// Custom style id
        id: String,
    },
    /// Expand a rough style description without saving it
    Optimize {
        /// Display name
        name: String,
        /// Rough description to expand
        description: String,
    },
}

pub fn run_style(command: StyleCommands) -> Result<(), AppError> {
    let mut controller = open_controller()?;

    match command {
        StyleCommands::List => list_styles(&controller),
        StyleCommands::Use { id } => {
            ensure_known_style(&controller, &id)?;
            controller.select_style(Some(&id))?;
            println!("✅ Selected style {}", id);
        }
        StyleCommands::Clear => {
            controller.select_style(None)?;
            println!("✅ Cleared style selection");
        }
        StyleCommands::Add { name, description, optimize } => {
            let description = if optimize {
                optimize_with_prompt(&mut controller, &name, &description)?
            } else {
                description
            };
            let id = controller.add_custom_style(&name, &description)?;
            println!("✅ Saved style '{}' as {}", name.trim(), id);
        }
        StyleCommands::Delete { id } => {
            if BuiltinStyle::from_id(&id).is_some() {
                return Err(AppError::InvalidStyle(format!(
                    "'{}' is a built-in style and cannot be deleted",
                    id
                )));
            }
            if !controller.delete_custom_style(&id)? {
                return Err(AppError::StyleNotFound(id));
            }
            println!("✅ Deleted style {}", id);
        }
        StyleCommands::Optimize { name, description } => {
            let optimized = optimize_with_prompt(&mut controller, &name, &description)?;
            println!("{}", optimized);
        }
    }

    Ok(())
}

fn list_styles(controller: &DefaultController) {
    let selected = controller.state().selected_style.as_deref();
    let marker = |id: &str| if selected == Some(id) { "*" } else { " " };

    println!("Built-in styles:");
    for builtin in BuiltinStyle::ALL {
        println!(
            "{} {:<10} {:<10} {}",
            marker(builtin.id()),
            builtin.id(),
            builtin.label(),
            builtin.flavor().focus
        );
    }

    println!();
    if controller.custom_styles().is_empty() {
        println!("No custom styles saved.");
        return;
    }

    println!("Custom styles:");
    for style in controller.custom_styles() {
        println!("{} {}  {}", marker(&style.id), style.id, style.label);
        println!("    {}", style.description);
    }
}

/// Optimize a description, collecting a missing API key on an interactive terminal.
pub fn optimize_with_prompt(
    controller: &mut DefaultController,
    name: &str,
    description: &str,
) -> Result<String, AppError> {
    match controller.optimize_style_description(name, description) {
        Err(AppError::CredentialMissing) if is_interactive() => {
            if prompt_credential(controller)? {
                controller.optimize_style_description(name, description)
            } else {
                Err(AppError::CredentialMissing)
            }
        }
        result => result,
    }
}
