//! Checklist item domain model.
//!
//! # Responsibility
//! - Define the one record type rendered by the checklist screen.
//! - Guard item construction so no partially valid item exists.
//!
//! # Invariants
//! - `id` is assigned once and never changes.
//! - `title` is never blank (empty or whitespace-only).
//! - `notes` may be empty; `done` starts as `false`.
//!
//! # See also
//! - crate::model::checklist

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier for one checklist item.
///
/// Kept as a plain string alias: persisted lists may carry ids minted by older
/// clients (timestamps, tokens), and the store only compares them for equality.
pub type ItemId = String;

/// Validation failures for item construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Identifier is empty or whitespace-only.
    BlankId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "item title must not be blank"),
            Self::BlankId => write!(f, "item id must not be blank"),
        }
    }
}

impl Error for ItemValidationError {}

/// One checklist entry.
///
/// Serialized field names match the persisted record shape
/// `{id, title, notes, done}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub notes: String,
    pub done: bool,
}

/// Wire shape used for lenient decoding before validation.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    done: bool,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let item = Self {
            id: record.id,
            title: record.title,
            notes: record.notes,
            done: record.done,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Item {
    /// Creates a not-yet-done item with a freshly generated id.
    ///
    /// The title is stored as entered; only its trimmed form is checked.
    ///
    /// # Errors
    /// - [`ItemValidationError::BlankTitle`] when `title` is blank.
    pub fn new(
        title: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        Self::with_id(generate_item_id(), title, notes)
    }

    /// Creates a not-yet-done item with a caller-provided id.
    ///
    /// Used by restore paths and tests where identity already exists.
    pub fn with_id(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id: id.into(),
            title: title.into(),
            notes: notes.into(),
            done: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks the construction invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.trim().is_empty() {
            return Err(ItemValidationError::BlankId);
        }
        if is_blank_title(&self.title) {
            return Err(ItemValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Whether the item carries any notes text.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Returns whether `title` would be rejected by item validation.
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}

/// Generates a new random item id.
pub fn generate_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}
