mod catalog;
mod custom;

pub use catalog::{BuiltinStyle, Flavor, NEGATIVE_PROMPT_DEFAULT};
pub use custom::{CUSTOM_STYLE_ID_PREFIX, CustomStyle, next_custom_style_id};

/// Label recorded in history when no style resolves.
pub const AUTO_STYLE_LABEL: &str = "Auto";

/// Outcome of resolving a selected style identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedStyle<'a> {
    Custom(&'a CustomStyle),
    Builtin(BuiltinStyle),
    Unstyled,
}

impl<'a> ResolvedStyle<'a> {
    /// Resolve `selected` against the custom styles first, then the built-in catalog.
    ///
    /// Unknown identifiers and an absent selection both yield `Unstyled`.
    pub fn resolve(selected: Option<&str>, custom_styles: &'a [CustomStyle]) -> Self {
        let Some(id) = selected else {
            return ResolvedStyle::Unstyled;
        };

        if let Some(custom) = custom_styles.iter().find(|style| style.id == id) {
            return ResolvedStyle::Custom(custom);
        }

        match BuiltinStyle::from_id(id) {
            Some(builtin) => ResolvedStyle::Builtin(builtin),
            None => ResolvedStyle::Unstyled,
        }
    }

    /// Label stored alongside history entries.
    pub fn history_label(&self) -> String {
        match self {
            ResolvedStyle::Custom(style) => style.label.clone(),
            ResolvedStyle::Builtin(builtin) => builtin.id().to_string(),
            ResolvedStyle::Unstyled => AUTO_STYLE_LABEL.to_string(),
        }
    }
}
