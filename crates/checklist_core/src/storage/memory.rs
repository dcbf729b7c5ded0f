//! Process-local key-value backend.

use super::{KeyValueStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value backend kept entirely in memory.
///
/// Values survive only as long as this instance; useful for tests and
/// throwaway sessions that must not touch disk.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with one value.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    /// Reads a value without going through the async contract.
    pub fn peek(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.peek(key)
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
