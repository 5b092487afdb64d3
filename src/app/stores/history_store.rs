use crate::domain::history::push_entry;
use crate::domain::{AppError, HistoryEntry};
use crate::ports::{KeyValueStore, keys};

use super::{load_json_or_default, save_json};

/// The most recent generated results, newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn load<S: KeyValueStore>(kv: &S) -> Result<Self, AppError> {
        let entries: Vec<HistoryEntry> = load_json_or_default(kv, keys::HISTORY)?;
        Ok(Self { entries: truncate_to_limit(entries) })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Record a generated output under `style_label` and persist.
    pub fn append<S: KeyValueStore>(
        &mut self,
        kv: &S,
        output: &str,
        style_label: &str,
        timestamp: i64,
    ) -> Result<&HistoryEntry, AppError> {
        let entry = HistoryEntry::new(output, style_label, timestamp);
        let updated = push_entry(self.entries.clone(), entry);
        save_json(kv, keys::HISTORY, &updated)?;
        self.entries = updated;
        Ok(&self.entries[0])
    }

    /// Empty the list and drop the persisted slot.
    pub fn clear<S: KeyValueStore>(&mut self, kv: &S) -> Result<(), AppError> {
        self.entries.clear();
        kv.remove(keys::HISTORY)
    }

    /// Output text of a prior entry.
    pub fn select(&self, id: &str) -> Result<&str, AppError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.prompt.as_str())
            .ok_or_else(|| AppError::HistoryEntryNotFound(id.to_string()))
    }
}

// Stored lists longer than the bound (hand edits, older versions) are cut on load.
fn truncate_to_limit(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.truncate(crate::domain::HISTORY_LIMIT);
    entries
}
