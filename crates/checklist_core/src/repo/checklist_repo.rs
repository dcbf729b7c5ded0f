//! Checklist repository contract and key-value implementation.
//!
//! # Invariants
//! - `save` writes the entire checklist, replacing the previous value.
//! - `load` never repairs malformed values; it reports them as errors.

use crate::model::checklist::{decode_checklist, encode_checklist, Checklist, CodecError};
use crate::model::item::Item;
use crate::storage::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized checklist.
pub const CHECKLIST_STORAGE_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Failures while reading or writing the persisted checklist.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Codec(CodecError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl RepoError {
    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage_failed",
            Self::Codec(_) => "codec_failed",
        }
    }
}

/// Whole-checklist persistence contract.
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Reads the persisted checklist.
    ///
    /// `Ok(None)` when nothing was saved or the stored value is blank.
    async fn load(&self) -> RepoResult<Option<Checklist>>;
    /// Replaces the persisted checklist with `items`.
    async fn save(&self, items: &[Item]) -> RepoResult<()>;
}

/// Repository storing the checklist as one JSON value in a key-value backend.
pub struct KvChecklistRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvChecklistRepository<S> {
    /// Uses [`CHECKLIST_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CHECKLIST_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> ChecklistRepository for KvChecklistRepository<S> {
    async fn load(&self) -> RepoResult<Option<Checklist>> {
        match self.store.get(&self.key).await? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(decode_checklist(&raw)?)),
            _ => Ok(None),
        }
    }

    async fn save(&self, items: &[Item]) -> RepoResult<()> {
        let encoded = encode_checklist(items)?;
        self.store.set(&self.key, encoded).await?;
        Ok(())
    }
}
