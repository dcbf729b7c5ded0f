//! Ordered schema steps keyed by `PRAGMA user_version`.

use crate::storage::{StorageError, StorageResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs in ascending version order.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Latest schema version this binary can open.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |&(version, _)| version)
}

/// Brings the schema up to [`latest_version`] in a single transaction.
///
/// # Errors
/// - [`StorageError::UnsupportedSchemaVersion`] when the file was written by a newer build.
pub fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();
    if found > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }

    let pending: Vec<_> = SCHEMA_STEPS
        .iter()
        .filter(|&&(version, _)| version > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &&(version, sql) in &pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={found} to_version={latest} steps={}",
        pending.len()
    );
    Ok(())
}
