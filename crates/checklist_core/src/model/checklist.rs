//! Checklist value and its persisted text encoding.
//!
//! # Responsibility
//! - Define the ordered item sequence that is persisted as one value.
//! - Encode/decode that sequence as a JSON array of item records.
//!
//! # Invariants
//! - Encoding preserves item order exactly.
//! - Decoding rejects blank titles/ids and duplicate ids instead of repairing them.

use crate::model::item::{Item, ItemId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ordered checklist items; index order is display order.
pub type Checklist = Vec<Item>;

/// Encoding/decoding failures for persisted checklist values.
#[derive(Debug)]
pub enum CodecError {
    /// Value is not a well-formed array of item records.
    Json(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(ItemId),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed checklist value: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate item id in checklist: {id}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes items to the persisted JSON array form.
pub fn encode_checklist(items: &[Item]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

/// Parses a persisted JSON array back into an ordered checklist.
///
/// # Errors
/// - [`CodecError::Json`] for malformed JSON or invalid item records.
/// - [`CodecError::DuplicateId`] when ids are not unique.
pub fn decode_checklist(value: &str) -> Result<Checklist, CodecError> {
    let items: Checklist = serde_json::from_str(value)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(CodecError::DuplicateId(item.id.clone()));
        }
    }
    Ok(items)
}
