//! Core state management for the personal checklist app.
//! This crate is the single source of truth for checklist invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LoggingError,
};
pub use model::checklist::{decode_checklist, encode_checklist, Checklist, CodecError};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use repo::checklist_repo::{
    ChecklistRepository, KvChecklistRepository, RepoError, RepoResult, CHECKLIST_STORAGE_KEY,
};
pub use service::checklist_store::{ChecklistStore, LoadOutcome, MutationOutcome, WriterStats};
pub use service::item_form::ItemDraft;
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
