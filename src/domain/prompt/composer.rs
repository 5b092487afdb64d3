//! User payload composition.

use crate::domain::style::ResolvedStyle;

/// Inputs to a single composition.
#[derive(Debug, Clone, Copy)]
pub struct CompositionInput<'a> {
    pub idea: &'a str,
    pub style: ResolvedStyle<'a>,
    pub remix: Option<&'a str>,
}

/// Remix instructions offered next to a result.
pub const REMIX_PRESETS: [&str; 5] =
    ["Darker", "More Cinematic", "Brighter", "Faster Paced", "More Dreamlike"];

/// Fold a remix instruction into the idea.
pub fn remix_idea(idea: &str, instruction: &str) -> String {
    format!("{} (Make it {})", idea, instruction)
}

/// Build the user content sent to the model.
///
/// A remix is a full recomposition of the mutated idea, never a patch on a prior output.
pub fn compose_payload(input: &CompositionInput<'_>) -> String {
    let idea = match input.remix {
        Some(instruction) => remix_idea(input.idea, instruction),
        None => input.idea.to_string(),
    };

    let mut payload = format!("User Idea: {}", idea);

    match input.style {
        ResolvedStyle::Custom(style) if !style.description.trim().is_empty() => {
            payload.push_str(&format!(
                "\n\nAPPLY CUSTOM STYLE: {}\nStyle Instructions: {}\n\nEnsure the output strictly adheres to these style instructions while maintaining the required format.",
                style.label, style.description
            ));
        }
        ResolvedStyle::Builtin(builtin) => {
            let flavor = builtin.flavor();
            payload.push_str(&format!(
                "\n\nAPPLY STYLE: {}\nFocus on: {}\nKey Elements: {}",
                builtin.id(),
                flavor.focus,
                flavor.keywords.join(", ")
            ));
        }
        // The system instruction's own flavor analysis governs unstyled requests.
        ResolvedStyle::Custom(_) | ResolvedStyle::Unstyled => {}
    }

    payload
}

/// Build the user content for the style optimizer.
pub fn compose_style_optimizer_payload(name: &str, rough_description: &str) -> String {
    format!("Style Name: {}\nDescription: {}", name, rough_description)
}
