//! Asynchronous key-value storage contract.
//!
//! # Responsibility
//! - Define the `get`/`set` backend the checklist persists through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `set` overwrites any prior value for the key.
//! - `get` of a never-written key is `Ok(None)`, not an error.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Generic I/O failure raised by a key-value backend.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer schema than this build knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A previous holder of the backend lock panicked.
    Poisoned,
    /// Background blocking task could not complete.
    Task(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Poisoned => write!(f, "storage lock poisoned"),
            Self::Task(message) => write!(f, "storage task failed: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable string key-value backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value).await
    }
}
