use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "REELPROMPT_HOME";

const DEFAULT_DIR_NAME: &str = ".reelprompt";

/// Filesystem-based key-value store: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FilesystemKeyValueStore {
    root: PathBuf,
}

impl FilesystemKeyValueStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::config_error(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.root.join(key))
    }
}

/// Resolve the data directory from the environment.
pub fn resolve_data_dir() -> Result<PathBuf, AppError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = std::env::var_os("HOME").filter(|value| !value.is_empty()).ok_or_else(|| {
        AppError::config_error(format!("Neither {} nor HOME is set", DATA_DIR_ENV))
    })?;
    Ok(PathBuf::from(home).join(DEFAULT_DIR_NAME))
}

impl KeyValueStore for FilesystemKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.key_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding non-UTF-8 persisted state");
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.root)?;
        let mut file = private_file_options().open(&path)?;
        // Files created by older versions keep their mode until rewritten.
        restrict_permissions(&path)?;
        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn private_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
