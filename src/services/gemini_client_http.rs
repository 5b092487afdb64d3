//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::configuration::generate_content_url;
use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::{GenerationClient, GenerationRequest, require_credential};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient").field("api_url", &self.api_url).finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client from configuration.
    ///
    /// Without `timeout_secs` the request is bounded only by the remote service.
    pub fn new(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let texts: Vec<String> = parts.into_iter().filter_map(|part| part.text).collect();
        if texts.is_empty() { None } else { Some(texts.concat()) }
    }
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest, credential: &str) -> Result<String, AppError> {
        let api_key = require_credential(credential)?;
        let endpoint = generate_content_url(&self.api_url, &request.model)?;

        let body = ApiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: &request.system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &request.user_content }],
            }],
        };

        tracing::debug!(
            model = %request.model,
            payload_chars = request.user_content.chars().count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(endpoint)
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::remote(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "generateContent request rejected");
            return Err(AppError::remote(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::remote(format!("Failed to parse response: {}", e)))?;

        api_response.into_text().ok_or_else(|| AppError::remote("No text in response"))
    }
}
