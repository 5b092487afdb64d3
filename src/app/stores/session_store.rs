use crate::domain::{AppError, SessionSnapshot};
use crate::ports::{KeyValueStore, keys};

use super::{load_json_or_default, save_json};

/// Idea, selection and last output carried between invocations.
pub struct SessionStore;

impl SessionStore {
    pub fn load<S: KeyValueStore>(kv: &S) -> Result<SessionSnapshot, AppError> {
        load_json_or_default(kv, keys::SESSION)
    }

    pub fn save<S: KeyValueStore>(kv: &S, snapshot: &SessionSnapshot) -> Result<(), AppError> {
        save_json(kv, keys::SESSION, snapshot)
    }
}
