//! Interactive session.

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};
use std::io::ErrorKind;

use crate::app::api::{DefaultController, GenerateOutcome, REMIX_PRESETS};
use crate::domain::{AppError, BuiltinStyle};
use crate::services::ArboardClipboard;

use super::generate::{generate_with_prompt, style_display};
use super::history::format_timestamp;
use super::render::print_output;
use super::style::optimize_with_prompt;
use super::{is_interactive, open_controller, prompt_credential};

const MENU_BACK_OPTION: &str = "[back]";
const CUSTOM_REMIX_OPTION: &str = "Custom instruction...";

#[derive(Clone, Copy)]
enum Action {
    EditIdea,
    ChooseStyle,
    Generate,
    Remix,
    Copy,
    History,
    NewStyle,
    SetKey,
    Quit,
}

const ACTIONS: [(Action, &str); 9] = [
    (Action::EditIdea, "Edit idea"),
    (Action::ChooseStyle, "Choose style"),
    (Action::Generate, "Generate"),
    (Action::Remix, "Remix last result"),
    (Action::Copy, "Copy result"),
    (Action::History, "Browse history"),
    (Action::NewStyle, "Create custom style"),
    (Action::SetKey, "Set API key"),
    (Action::Quit, "Quit"),
];

pub fn run_session() -> Result<(), AppError> {
    if !is_interactive() {
        return Err(AppError::config_error("The interactive session needs a terminal"));
    }

    let mut controller = open_controller()?;
    if !controller.state().has_credential() {
        println!("No Gemini API key saved yet.");
        prompt_credential(&mut controller)?;
    }

    loop {
        print_status(&controller);

        let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
        let Some(index) =
            prompt(Select::new().with_prompt("Action").items(&labels).default(0).interact_opt())?
                .flatten()
        else {
            return Ok(());
        };

        let action = ACTIONS[index].0;
        if matches!(action, Action::Quit) {
            return Ok(());
        }

        if let Err(err) = perform(&mut controller, action) {
            eprintln!("Error: {}", err);
        }
    }
}

fn perform(controller: &mut DefaultController, action: Action) -> Result<(), AppError> {
    match action {
        Action::EditIdea => edit_idea(controller),
        Action::ChooseStyle => choose_style(controller),
        Action::Generate => {
            let outcome = generate_with_prompt(controller, None)?;
            show_outcome(outcome);
            Ok(())
        }
        Action::Remix => remix(controller),
        Action::Copy => {
            let mut clipboard = ArboardClipboard::new()?;
            controller.copy_output(&mut clipboard)?;
            println!("✅ Copied prompt to clipboard");
            Ok(())
        }
        Action::History => browse_history(controller),
        Action::NewStyle => create_style(controller),
        Action::SetKey => prompt_credential(controller).map(|_| ()),
        Action::Quit => Ok(()),
    }
}

fn print_status(controller: &DefaultController) {
    let state = controller.state();
    println!();
    println!("Idea:  {}", if state.idea.trim().is_empty() { "(none)" } else { state.idea.as_str() });
    println!("Style: {}", style_display(controller));
}

fn edit_idea(controller: &mut DefaultController) -> Result<(), AppError> {
    let current = controller.state().idea.clone();
    let Some(idea) = prompt(
        Input::<String>::new()
            .with_prompt("Video idea")
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text(),
    )?
    else {
        return Ok(());
    };
    controller.set_idea(&idea)
}

fn choose_style(controller: &mut DefaultController) -> Result<(), AppError> {
    let mut ids: Vec<Option<String>> = vec![None];
    let mut items = vec!["Auto (no style)".to_string()];

    for builtin in BuiltinStyle::ALL {
        ids.push(Some(builtin.id().to_string()));
        items.push(format!("{}: {}", builtin.label(), builtin.flavor().focus));
    }
    for style in controller.custom_styles() {
        ids.push(Some(style.id.clone()));
        items.push(format!("{} (custom)", style.label));
    }

    let selected = controller.state().selected_style.clone();
    let default = ids.iter().position(|id| *id == selected).unwrap_or(0);

    let Some(index) = prompt(
        Select::new().with_prompt("Style").items(&items).default(default).interact_opt(),
    )?
    .flatten() else {
        return Ok(());
    };

    match &ids[index] {
        Some(id) => controller.toggle_style(id),
        None => controller.select_style(None),
    }
}

fn remix(controller: &mut DefaultController) -> Result<(), AppError> {
    let mut items: Vec<&str> = REMIX_PRESETS.to_vec();
    items.push(CUSTOM_REMIX_OPTION);
    items.push(MENU_BACK_OPTION);

    let Some(index) =
        prompt(Select::new().with_prompt("Remix").items(&items).default(0).interact_opt())?
            .flatten()
    else {
        return Ok(());
    };

    let instruction = match items[index] {
        MENU_BACK_OPTION => return Ok(()),
        CUSTOM_REMIX_OPTION => {
            match prompt(Input::<String>::new().with_prompt("Make it...").interact_text())? {
                Some(value) => value,
                None => return Ok(()),
            }
        }
        preset => preset.to_string(),
    };

    let outcome = generate_with_prompt(controller, Some(&instruction))?;
    show_outcome(outcome);
    Ok(())
}

fn browse_history(controller: &mut DefaultController) -> Result<(), AppError> {
    if controller.history().is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    let mut items: Vec<String> = controller
        .history()
        .iter()
        .map(|entry| {
            format!("{} [{}] {}", format_timestamp(entry.timestamp), entry.style, entry.preview(50))
        })
        .collect();
    items.push(MENU_BACK_OPTION.to_string());

    let Some(index) =
        prompt(Select::new().with_prompt("History").items(&items).default(0).interact_opt())?
            .flatten()
    else {
        return Ok(());
    };
    if index == items.len() - 1 {
        return Ok(());
    }

    let id = controller.history()[index].id.clone();
    let output = controller.select_history(&id)?;
    print_output(&output);
    Ok(())
}

fn create_style(controller: &mut DefaultController) -> Result<(), AppError> {
    let Some(name) = prompt(Input::<String>::new().with_prompt("Style name").interact_text())?
    else {
        return Ok(());
    };
    let Some(mut description) =
        prompt(Input::<String>::new().with_prompt("Style description").interact_text())?
    else {
        return Ok(());
    };

    let optimize = prompt(
        Confirm::new().with_prompt("Expand the description with Gemini?").default(false).interact(),
    )?
    .unwrap_or(false);

    if optimize {
        description = optimize_with_prompt(controller, &name, &description)?;
        println!("{}", description);
        let keep = prompt(Confirm::new().with_prompt("Save this description?").default(true).interact())?
            .unwrap_or(false);
        if !keep {
            return Ok(());
        }
    }

    let id = controller.add_custom_style(&name, &description)?;
    println!("✅ Saved style '{}' as {}", name.trim(), id);
    Ok(())
}

fn show_outcome(outcome: GenerateOutcome) {
    match outcome {
        GenerateOutcome::Generated(output) => {
            println!();
            print_output(&output);
        }
        GenerateOutcome::CredentialPromptOpened => {
            println!("Set an API key first (Set API key).");
        }
        GenerateOutcome::Disabled => println!("Enter an idea first (Edit idea)."),
        GenerateOutcome::Failed(message) => eprintln!("❌ {}", message),
    }
}

/// Map a dialoguer result, treating Ctrl-C as a cancelled prompt.
fn prompt<T>(result: Result<T, DialoguerError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Prompt failed: {}", err))),
    }
}
