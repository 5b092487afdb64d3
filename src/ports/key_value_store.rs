use crate::domain::AppError;

/// Persisted slot names.
pub mod keys {
    pub const CREDENTIAL: &str = "credential";
    pub const HISTORY: &str = "history";
    pub const CUSTOM_STYLES: &str = "custom_styles";
    pub const SESSION: &str = "session";
}

/// Port for string-valued persistent state.
///
/// A missing key is a valid initial state and reads as `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
