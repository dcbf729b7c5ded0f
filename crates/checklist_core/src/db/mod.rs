//! SQLite bootstrap for the durable key-value backend.
//!
//! Connections returned from here have the `kv_entries` schema in place;
//! failures are reported as [`crate::storage::StorageError`].

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
