use crate::domain::AppError;
use crate::ports::{KeyValueStore, keys};

/// The API key slot.
pub struct CredentialStore;

impl CredentialStore {
    /// Load the saved key; an absent slot is an empty credential.
    pub fn load<S: KeyValueStore>(kv: &S) -> Result<String, AppError> {
        Ok(kv.get(keys::CREDENTIAL)?.map(|raw| raw.trim().to_string()).unwrap_or_default())
    }

    /// Save a key. Saving a blank key clears the slot.
    pub fn save<S: KeyValueStore>(kv: &S, credential: &str) -> Result<String, AppError> {
        let trimmed = credential.trim();
        if trimmed.is_empty() {
            kv.remove(keys::CREDENTIAL)?;
        } else {
            kv.set(keys::CREDENTIAL, trimmed)?;
        }
        Ok(trimmed.to_string())
    }
}
