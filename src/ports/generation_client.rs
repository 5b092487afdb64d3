//! Generation client port definition.

use crate::domain::AppError;

/// One text-in/text-out request to the remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model identifier (e.g., "gemini-2.5-pro").
    pub model: String,
    /// System-level instruction.
    pub system_instruction: String,
    /// User content.
    pub user_content: String,
}

/// Port for remote text generation.
pub trait GenerationClient {
    /// Issue exactly one request and return the response text unmodified.
    ///
    /// Implementations fail with `AppError::CredentialMissing` before any
    /// network use when `credential` is blank, and with
    /// `AppError::RemoteGeneration` for every other failure.
    fn generate(&self, request: &GenerationRequest, credential: &str) -> Result<String, AppError>;
}

/// Reject blank credentials before a request is attempted.
pub fn require_credential(credential: &str) -> Result<&str, AppError> {
    let trimmed = credential.trim();
    if trimmed.is_empty() {
        return Err(AppError::CredentialMissing);
    }
    Ok(trimmed)
}
