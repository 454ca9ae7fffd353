//! The progress log: an owned, validated, persisted list of entries.

use crate::core::validation::{ValidationError, validate};
use crate::models::entry::now_millis;
use crate::models::{Draft, Entry, Summary};
use crate::storage::{Storage, StorageError};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Default storage slot holding the serialized log.
pub const DEFAULT_STORAGE_KEY: &str = "fitstart_progress_v1";

/// Ordered collection of entries, newest insertion first.
///
/// Every successful mutation writes the whole list back to the storage
/// slot before returning. Write failures are logged and ignored: the
/// in-memory list stays authoritative for the rest of the session.
pub struct ProgressLog<S: Storage> {
    storage: S,
    key: String,
    entries: Vec<Entry>,
}

impl<S: Storage> ProgressLog<S> {
    /// Load the log stored under `key`. A missing, unreadable or corrupt
    /// slot yields an empty log.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = read_entries(&storage, &key);
        debug!(key = %key, count = entries.len(), "progress log loaded");
        Self {
            storage,
            key,
            entries,
        }
    }

    /// Validate `draft` and prepend the resulting entry.
    pub fn add(&mut self, draft: &Draft) -> Result<Entry, ValidationError> {
        let valid = validate(draft)?;
        let created_at = self.next_created_at();

        let mut entry = Entry::new(
            valid.date,
            valid.weight_kg,
            valid.workouts,
            valid.notes,
            created_at,
        );
        while self.get(&entry.id).is_some() {
            entry.id = Entry::generate_id(created_at);
        }

        self.entries.insert(0, entry.clone());
        self.persist();
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether an entry was removed;
    /// an unknown id leaves the log unchanged.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        self.persist();
        removed
    }

    /// Empty the log once `confirm` agrees. Returns whether the log was
    /// cleared.
    pub fn clear_all<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return false;
        }
        self.entries.clear();
        self.persist();
        true
    }

    /// Most recent entry: latest date, then latest creation time. On a full
    /// tie the entry first in storage order wins.
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.iter().min_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        })
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in storage order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            latest: self.latest().cloned(),
            total_entries: self.count(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize the whole log into its storage slot.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.entries)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        self.storage.set(&self.key, &blob)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!(key = %self.key, error = %e, "failed to persist progress log");
        }
    }

    /// Creation timestamps never go backwards within one log.
    fn next_created_at(&self) -> i64 {
        let newest = self.entries.iter().map(|e| e.created_at).max();
        match newest {
            Some(n) => now_millis().max(n.saturating_add(1)),
            None => now_millis(),
        }
    }
}

fn read_entries<S: Storage>(storage: &S, key: &str) -> Vec<Entry> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key = %key, error = %e, "cannot read progress log, starting empty");
            return Vec::new();
        }
    };

    let records: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(key = %key, error = %e, "discarding corrupt progress log");
            return Vec::new();
        }
    };

    // a record that does not deserialize is dropped on its own
    let total = records.len();
    let parsed: Vec<Entry> = records
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    let mut seen = HashSet::new();
    let entries: Vec<Entry> = parsed
        .into_iter()
        .filter(|e| e.is_well_formed() && seen.insert(e.id.clone()))
        .collect();

    if entries.len() != total {
        warn!(
            key = %key,
            dropped = total - entries.len(),
            "dropped malformed or duplicate entries"
        );
    }
    entries
}
