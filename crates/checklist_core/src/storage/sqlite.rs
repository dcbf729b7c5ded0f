//! SQLite-backed key-value backend.
//!
//! # Invariants
//! - Blocking SQLite calls never run on the async executor thread.
//! - One connection is shared; calls are serialized by its mutex.

use super::{KeyValueStore, StorageError, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use async_trait::async_trait;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Durable key-value backend over the `kv_entries` table.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKeyValueStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already-migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    async fn run<T, F>(&self, op: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StorageError::Poisoned)?;
            op(&guard).map_err(StorageError::from)
        })
        .await
        .map_err(|err| StorageError::Task(err.to_string()))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let key = key.to_string();
        self.run(move |conn| {
            conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })
        .await
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let key = key.to_string();
        let bytes = value.len();
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![key, value],
            )
        })
        .await?;
        debug!("event=kv_set module=storage status=ok bytes={bytes}");
        Ok(())
    }
}
