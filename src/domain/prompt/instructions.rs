//! System instructions sent alongside every request.

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::style::{BuiltinStyle, NEGATIVE_PROMPT_DEFAULT};

mod templates {
    pub static VIDEO_PROMPT_SYSTEM: &str =
        include_str!("../../assets/prompts/video_prompt_system.j2");
    pub static STYLE_OPTIMIZER_SYSTEM: &str =
        include_str!("../../assets/prompts/style_optimizer_system.j2");
}

/// Aspects the style optimizer is allowed to describe.
pub const STYLE_ASPECTS: [&str; 5] =
    ["Lighting", "Color Palette", "Atmosphere", "Camera/Lens characteristics", "Textures"];

/// Word ceiling for optimized style descriptions.
pub const STYLE_DESCRIPTION_MAX_WORDS: u32 = 100;

#[derive(Serialize)]
struct FlavorView {
    label: &'static str,
    focus: &'static str,
    keywords: &'static [&'static str],
}

/// Render the filmmaker system instruction with the built-in flavors inlined.
pub fn video_prompt_system_instruction() -> Result<String, AppError> {
    let flavors: Vec<FlavorView> = BuiltinStyle::ALL
        .iter()
        .map(|style| {
            let flavor = style.flavor();
            FlavorView { label: style.label(), focus: flavor.focus, keywords: flavor.keywords }
        })
        .collect();

    render(
        "video_prompt_system.j2",
        templates::VIDEO_PROMPT_SYSTEM,
        context! { flavors => flavors, negative_prompt => NEGATIVE_PROMPT_DEFAULT },
    )
}

/// Render the aesthetic-only instruction used to expand custom style descriptions.
pub fn style_optimizer_system_instruction() -> Result<String, AppError> {
    render(
        "style_optimizer_system.j2",
        templates::STYLE_OPTIMIZER_SYSTEM,
        context! { aspects => STYLE_ASPECTS, max_words => STYLE_DESCRIPTION_MAX_WORDS },
    )
}

fn render(name: &str, template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(template, ctx)
        .map_err(|err| AppError::TemplateRender { template: name.to_string(), reason: err.to_string() })
}
