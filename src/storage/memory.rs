use super::{Storage, StorageError};
use std::collections::HashMap;

/// In-memory storage. `fail_reads` / `fail_writes` simulate an unavailable
/// medium and a full quota respectively.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one slot.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut s = Self::new();
        s.slots.insert(key.to_string(), value.to_string());
        s
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::QuotaExceeded);
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
