use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// In-memory key-value store for testing.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
    pub writes: RefCell<Vec<String>>,
    failing_key: Option<String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every write to `key` fail with an I/O error.
    pub fn with_failing_key(mut self, key: &str) -> Self {
        self.failing_key = Some(key.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.failing_key.as_deref() == Some(key) {
            return Err(std::io::Error::other(format!("write to '{}' refused", key)).into());
        }
        self.writes.borrow_mut().push(key.to_string());
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
