//! API Facade for the application.
//!
//! This module wires the filesystem store, the HTTP client and the loaded
//! configuration into a ready-to-use controller.

use std::path::PathBuf;

use crate::app::config::load_config;
use crate::app::{AppContext, Controller};
use crate::services::{FilesystemKeyValueStore, HttpGeminiClient, resolve_data_dir};

pub use crate::app::controller::GenerateOutcome;
pub use crate::domain::prompt::REMIX_PRESETS;
pub use crate::domain::{AppError, BuiltinStyle, CustomStyle, HistoryEntry};

/// Controller backed by the on-disk store and the Gemini HTTP client.
pub type DefaultController = Controller<FilesystemKeyValueStore, HttpGeminiClient>;

/// Open a controller on the data directory resolved from the environment.
pub fn open_controller() -> Result<DefaultController, AppError> {
    open_controller_at(resolve_data_dir()?)
}

/// Open a controller on the specified data directory.
pub fn open_controller_at(data_dir: impl Into<PathBuf>) -> Result<DefaultController, AppError> {
    let data_dir = data_dir.into();
    let config = load_config(&data_dir)?;
    let client = HttpGeminiClient::new(&config.gemini)?;
    let store = FilesystemKeyValueStore::new(data_dir);

    tracing::debug!(root = %store.root().display(), model = %config.gemini.model, "opening controller");
    Controller::load(AppContext::new(store, client, config))
}
