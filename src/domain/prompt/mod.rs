mod composer;
mod instructions;
mod output_fields;

pub use composer::{
    CompositionInput, REMIX_PRESETS, compose_payload, compose_style_optimizer_payload, remix_idea,
};
pub use instructions::{
    STYLE_ASPECTS, STYLE_DESCRIPTION_MAX_WORDS, style_optimizer_system_instruction,
    video_prompt_system_instruction,
};
pub use output_fields::{OutputLine, parse_output_lines};
