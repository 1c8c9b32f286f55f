//! In-memory record store.
//!
//! Append-only, caller-owned, discarded with the process. The extractor
//! never touches this collection; callers decide which records to keep.

use chrono::Utc;
use tracing::debug;

use crate::error::StoreError;
use crate::models::record::{ExtractionRecord, SavedEntry};

/// Append-only in-memory store of saved records.
#[derive(Debug)]
pub struct RecordStore {
    entries: Vec<SavedEntry>,
    next_id: u64,
    require_name: bool,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store that requires a name on every saved record.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            require_name: true,
        }
    }

    /// Set whether saving requires a non-empty name field.
    pub fn with_require_name(mut self, require: bool) -> Self {
        self.require_name = require;
        self
    }

    /// Save a record, returning its assigned id.
    pub fn save(&mut self, record: ExtractionRecord) -> Result<u64, StoreError> {
        if self.require_name && record.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }

        let id = self.next_id;
        self.next_id += 1;
        debug!("Saving entry {} ({})", id, record.name);

        self.entries.push(SavedEntry {
            id,
            record,
            saved_at: Utc::now(),
        });
        Ok(id)
    }

    /// Case-insensitive substring search across all fields of all entries.
    ///
    /// An empty or whitespace-only term matches nothing.
    pub fn search(&self, term: &str) -> Vec<&SavedEntry> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .record
                    .fields()
                    .iter()
                    .any(|(_, value)| value.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: u64) -> Option<&SavedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Most recently saved entry.
    pub fn latest(&self) -> Option<&SavedEntry> {
        self.entries.last()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, business: &str) -> ExtractionRecord {
        ExtractionRecord {
            name: name.to_string(),
            business: business.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let mut store = RecordStore::new();
        let a = store.save(record("Jane Doe", "Acme Inc")).unwrap();
        let b = store.save(record("John Smith", "Globex")).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.latest().unwrap().record.name, "John Smith");
    }

    #[test]
    fn test_save_rejects_missing_name() {
        let mut store = RecordStore::new();
        let err = store.save(record("", "Acme Inc")).unwrap_err();
        assert!(matches!(err, StoreError::MissingName));
        assert!(store.is_empty());
    }

    #[test]
    fn test_require_name_can_be_disabled() {
        let mut store = RecordStore::new().with_require_name(false);
        store.save(record("", "Acme Inc")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut store = RecordStore::new();
        store.save(record("Jane Doe", "Acme Solutions")).unwrap();
        store.save(record("John Smith", "Globex Corp")).unwrap();

        let hits = store.search("ACME");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name, "Jane Doe");

        assert_eq!(store.search("o").len(), 2);
    }

    #[test]
    fn test_empty_search_term_matches_nothing() {
        let mut store = RecordStore::new();
        store.save(record("Jane Doe", "Acme Inc")).unwrap();
        assert!(store.search("").is_empty());
        assert!(store.search("   ").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let mut store = RecordStore::new();
        let id = store.save(record("Jane Doe", "Acme Inc")).unwrap();
        assert_eq!(store.get(id).unwrap().record.business, "Acme Inc");
        assert!(store.get(99).is_none());
    }
}
