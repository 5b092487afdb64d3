//! Line classification for generated field blocks.
//!
//! The model is asked for `Label: value` lines, with `Style:` children
//! indented beneath it. Nothing here validates that shape; it only lets a
//! renderer tell labels from free text.

/// One line of a generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLine<'a> {
    Field { indent: &'a str, label: &'a str, value: &'a str },
    Text(&'a str),
}

pub fn parse_output_lines(content: &str) -> Vec<OutputLine<'_>> {
    content.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> OutputLine<'_> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    let Some((label, value)) = body.split_once(':') else {
        return OutputLine::Text(line);
    };

    if label.trim().is_empty() || label.len() > 40 {
        return OutputLine::Text(line);
    }

    OutputLine::Field { indent, label: label.trim_end(), value: value.trim() }
}
