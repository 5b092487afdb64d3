//! Generation history model.

use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries.
pub const HISTORY_LIMIT: usize = 10;

/// One generated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Generated output text, not the input idea.
    pub prompt: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub style: String,
}

impl HistoryEntry {
    pub fn new(prompt: impl Into<String>, style: impl Into<String>, timestamp: i64) -> Self {
        Self { id: timestamp.to_string(), prompt: prompt.into(), timestamp, style: style.into() }
    }

    /// First non-empty line of the output, shortened for listings.
    pub fn preview(&self, max_chars: usize) -> String {
        let line = self.prompt.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("");
        if line.chars().count() <= max_chars {
            return line.to_string();
        }
        let mut shortened: String = line.chars().take(max_chars.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}

/// Prepend `entry` and drop anything past `HISTORY_LIMIT`.
///
/// Identifiers are timestamp based; an entry created within the same
/// millisecond as the current head gets a numeric suffix.
pub fn push_entry(entries: Vec<HistoryEntry>, mut entry: HistoryEntry) -> Vec<HistoryEntry> {
    if entries.iter().any(|existing| existing.id == entry.id) {
        let base = entry.id.clone();
        let mut suffix = 2;
        while entries.iter().any(|existing| existing.id == format!("{}-{}", base, suffix)) {
            suffix += 1;
        }
        entry.id = format!("{}-{}", base, suffix);
    }

    let mut updated = Vec::with_capacity(HISTORY_LIMIT);
    updated.push(entry);
    updated.extend(entries);
    updated.truncate(HISTORY_LIMIT);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn push_entry_prepends_newest() {
        let entries = push_entry(Vec::new(), HistoryEntry::new("first", "Auto", 1));
        let entries = push_entry(entries, HistoryEntry::new("second", "CINEMATIC", 2));
        assert_eq!(entries[0].prompt, "second");
        assert_eq!(entries[1].prompt, "first");
    }

    #[test]
    fn eleventh_entry_evicts_exactly_the_oldest() {
        let mut entries = Vec::new();
        for i in 0..HISTORY_LIMIT as i64 {
            entries = push_entry(entries, HistoryEntry::new(format!("p{}", i), "Auto", i));
        }
        assert_eq!(entries.len(), HISTORY_LIMIT);

        entries = push_entry(entries, HistoryEntry::new("p10", "Auto", 10));
        assert_eq!(entries.len(), HISTORY_LIMIT);
        assert_eq!(entries[0].prompt, "p10");
        assert!(entries.iter().all(|entry| entry.prompt != "p0"));
        assert!(entries.iter().any(|entry| entry.prompt == "p1"));
    }

    #[test]
    fn same_millisecond_ids_stay_unique() {
        let entries = push_entry(Vec::new(), HistoryEntry::new("a", "Auto", 7));
        let entries = push_entry(entries, HistoryEntry::new("b", "Auto", 7));
        assert_eq!(entries[0].id, "7-2");
        assert_eq!(entries[1].id, "7");
    }

    #[test]
    fn preview_uses_first_non_empty_line() {
        let entry = HistoryEntry::new("\n  Setting: rooftop at dusk\nScene: cat", "Auto", 1);
        assert_eq!(entry.preview(80), "Setting: rooftop at dusk");
        assert_eq!(entry.preview(8), "Setting…");
    }

    proptest! {
        #[test]
        fn history_never_exceeds_limit(count in 0usize..40) {
            let mut entries = Vec::new();
            for i in 0..count {
                entries = push_entry(entries, HistoryEntry::new("x", "Auto", i as i64));
                prop_assert!(entries.len() <= HISTORY_LIMIT);
            }
            prop_assert_eq!(entries.len(), count.min(HISTORY_LIMIT));
        }
    }
}
