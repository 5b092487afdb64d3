mod clipboard_arboard;
mod filesystem_key_value_store;
mod gemini_client_http;

pub use clipboard_arboard::ArboardClipboard;
pub use filesystem_key_value_store::{DATA_DIR_ENV, FilesystemKeyValueStore, resolve_data_dir};
pub use gemini_client_http::HttpGeminiClient;
