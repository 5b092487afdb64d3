//! Session state owned by the controller.

use serde::{Deserialize, Serialize};

/// Message shown when a generation call fails.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate prompt. Please check your API key and try again.";

/// The part of the session that survives between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub selected_style: Option<String>,
    #[serde(default)]
    pub output: String,
}

/// Full in-process session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub credential: String,
    pub idea: String,
    pub selected_style: Option<String>,
    pub output: String,
    pub in_flight: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    /// Whether the generate trigger would be enabled.
    pub fn can_generate(&self) -> bool {
        !self.in_flight && !self.idea.trim().is_empty()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            idea: self.idea.clone(),
            selected_style: self.selected_style.clone(),
            output: self.output.clone(),
        }
    }
}
