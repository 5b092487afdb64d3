//! Application configuration loading from the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// File name of the optional configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load `config.toml` from `data_dir`.
///
/// A missing file yields the defaults. A present file must parse and validate.
pub fn load_config(data_dir: &Path) -> Result<AppConfig, AppError> {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
