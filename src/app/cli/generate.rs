//! Generate, remix, show and copy commands.

use crate::app::api::{DefaultController, GenerateOutcome};
use crate::domain::{AUTO_STYLE_LABEL, AppError, ResolvedStyle};
use crate::services::ArboardClipboard;

use super::render::print_output;
use super::{ensure_known_style, is_interactive, open_controller, prompt_credential};

const NO_IDEA_MESSAGE: &str = "No idea to work from. Run: reelprompt generate \"<your idea>\"";
const NO_REMIX_INSTRUCTION_MESSAGE: &str =
    "Remix instruction must not be empty (e.g. Darker, \"More Cinematic\")";

pub fn run_generate(
    idea: &[String],
    style: Option<&str>,
    no_style: bool,
    dry_run: bool,
) -> Result<i32, AppError> {
    let mut controller = open_controller()?;

    let idea = idea.join(" ");
    if !idea.trim().is_empty() {
        controller.set_idea(&idea)?;
    }

    if let Some(id) = style {
        ensure_known_style(&controller, id)?;
        controller.select_style(Some(id))?;
    } else if no_style {
        controller.select_style(None)?;
    }

    if dry_run {
        if controller.state().idea.trim().is_empty() {
            return Err(AppError::NothingToDo(NO_IDEA_MESSAGE.to_string()));
        }
        println!("{}", controller.compose_payload(None));
        return Ok(0);
    }

    let outcome = generate_with_prompt(&mut controller, None)?;
    report_outcome(outcome)
}

pub fn run_remix(instruction: &str) -> Result<i32, AppError> {
    if instruction.trim().is_empty() {
        return Err(AppError::NothingToDo(NO_REMIX_INSTRUCTION_MESSAGE.to_string()));
    }
    let mut controller = open_controller()?;
    let outcome = generate_with_prompt(&mut controller, Some(instruction))?;
    report_outcome(outcome)
}

pub fn run_show() -> Result<(), AppError> {
    let controller = open_controller()?;
    let state = controller.state();

    if state.idea.trim().is_empty() {
        println!("Idea:  (none)");
    } else {
        println!("Idea:  {}", state.idea);
    }
    println!("Style: {}", style_display(&controller));

    println!();
    if state.output.is_empty() {
        println!("(no prompt generated yet)");
    } else {
        print_output(&state.output);
    }
    Ok(())
}

pub fn run_copy() -> Result<(), AppError> {
    let controller = open_controller()?;
    if controller.state().output.is_empty() {
        return Err(AppError::NothingToDo("No generated prompt to copy yet".to_string()));
    }

    let mut clipboard = ArboardClipboard::new()?;
    controller.copy_output(&mut clipboard)?;
    println!("✅ Copied prompt to clipboard");
    Ok(())
}

/// Run generate (or remix) and, on an interactive terminal, collect a missing
/// API key and retry once.
pub fn generate_with_prompt(
    controller: &mut DefaultController,
    remix: Option<&str>,
) -> Result<GenerateOutcome, AppError> {
    let run = |controller: &mut DefaultController| match remix {
        Some(instruction) => controller.remix(instruction),
        None => controller.generate(),
    };

    let outcome = run(controller)?;
    if outcome != GenerateOutcome::CredentialPromptOpened || !is_interactive() {
        return Ok(outcome);
    }

    if prompt_credential(controller)? { run(controller) } else { Ok(outcome) }
}

/// Print the outcome and map it to an exit code.
pub fn report_outcome(outcome: GenerateOutcome) -> Result<i32, AppError> {
    match outcome {
        GenerateOutcome::Generated(output) => {
            print_output(&output);
            Ok(0)
        }
        GenerateOutcome::CredentialPromptOpened => Err(AppError::CredentialMissing),
        GenerateOutcome::Disabled => Err(AppError::NothingToDo(NO_IDEA_MESSAGE.to_string())),
        GenerateOutcome::Failed(message) => {
            eprintln!("❌ {}", message);
            Ok(1)
        }
    }
}

pub fn style_display(controller: &DefaultController) -> String {
    match controller.resolved_style() {
        ResolvedStyle::Custom(style) => format!("{} ({})", style.label, style.id),
        ResolvedStyle::Builtin(builtin) => format!("{} ({})", builtin.label(), builtin.id()),
        ResolvedStyle::Unstyled => AUTO_STYLE_LABEL.to_string(),
    }
}
