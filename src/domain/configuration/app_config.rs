//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `config.toml` in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL up to (not including) `/models/...`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional request timeout in seconds. Unset means no local timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: None }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }
}

/// Build `{api_url}/models/{model}:generateContent`.
pub fn generate_content_url(api_url: &Url, model: &str) -> Result<Url, AppError> {
    let base = api_url.as_str().trim_end_matches('/');
    Url::parse(&format!("{}/models/{}:generateContent", base, model)).map_err(|e| {
        AppError::InvalidConfig(format!("Failed to build generateContent URL: {}", e))
    })
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}
