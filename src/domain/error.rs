use std::io;

use thiserror::Error;

/// Library-wide error type for reelprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No API key has been saved.
    #[error("No Gemini API key configured. Run 'reelprompt key set' first.")]
    CredentialMissing,

    /// The remote model call failed for any reason.
    #[error("Remote generation failed: {0}")]
    RemoteGeneration(String),

    /// A custom style was submitted without a name or description.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Style identifier does not match a built-in or custom style.
    #[error("Style '{0}' not found")]
    StyleNotFound(String),

    /// History entry identifier is unknown.
    #[error("History entry '{0}' not found")]
    HistoryEntryNotFound(String),

    /// Nothing to act on (empty idea, no prior result).
    #[error("{0}")]
    NothingToDo(String),

    /// Prompt template failed to render.
    #[error("Prompt template '{template}' failed to render: {reason}")]
    TemplateRender { template: String, reason: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn remote<S: Into<String>>(message: S) -> Self {
        AppError::RemoteGeneration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_missing_points_at_key_command() {
        let message = AppError::CredentialMissing.to_string();
        assert!(message.contains("reelprompt key set"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let err: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "locked").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "locked");
    }
}
