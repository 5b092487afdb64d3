//! Persisted collections backed by a `KeyValueStore`.
//!
//! Each store is loaded once and written back on every mutation. Stored
//! JSON that no longer parses is logged and treated as empty.

mod credential_store;
mod history_store;
mod session_store;
mod style_store;

pub use credential_store::CredentialStore;
pub use history_store::HistoryStore;
pub use session_store::SessionStore;
pub use style_store::StyleStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

fn load_json_or_default<T, S>(kv: &S, key: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore,
{
    let Some(raw) = kv.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable persisted state");
            Ok(T::default())
        }
    }
}

fn save_json<T, S>(kv: &S, key: &str, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore,
{
    let raw = serde_json::to_string(value).map_err(|e| AppError::ParseError {
        what: key.to_string(),
        details: e.to_string(),
    })?;
    kv.set(key, &raw)
}
