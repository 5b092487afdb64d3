//! Terminal rendering for generated prompts.

use std::io::IsTerminal;

use crate::domain::prompt::{OutputLine, parse_output_lines};

const LABEL_STYLE: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

/// Print a generated prompt, highlighting field labels when stdout is a terminal.
pub fn print_output(output: &str) {
    println!("{}", render_output(output, std::io::stdout().is_terminal()));
}

pub fn render_output(output: &str, color: bool) -> String {
    if !color {
        return output.to_string();
    }

    parse_output_lines(output)
        .into_iter()
        .map(|line| match line {
            OutputLine::Field { indent, label, value } if value.is_empty() => {
                format!("{}{}{}:{}", indent, LABEL_STYLE, label, RESET)
            }
            OutputLine::Field { indent, label, value } => {
                format!("{}{}{}:{} {}", indent, LABEL_STYLE, label, RESET, value)
            }
            OutputLine::Text(text) => text.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
