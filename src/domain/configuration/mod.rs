pub mod app_config;

pub use app_config::{AppConfig, GeminiApiConfig, generate_content_url};
