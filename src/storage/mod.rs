//! Key-value persistence port used by the progress log.
//!
//! Two adapters ship with the crate: [`MemoryStorage`] for tests and
//! [`SqliteStorage`] backed by the application database.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use thiserror::Error;

/// Failure of the persistence medium. Never propagated past the progress log.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

pub trait Storage {
    /// Read the value stored under `key`, `None` when the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
