//! Transient add-item form state.
//!
//! # Responsibility
//! - Hold the title/notes a user is typing before confirming.
//! - Clear itself after a successful add; keep input when the add is ignored.
//!
//! # Invariants
//! - Draft contents are never persisted.
//! - `cancel` never touches the checklist.

use crate::model::item::is_blank_title;
use crate::service::checklist_store::{ChecklistStore, MutationOutcome};

/// Add-item form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub notes: String,
}

impl ItemDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Whether confirming would create an item.
    pub fn is_submittable(&self) -> bool {
        !is_blank_title(&self.title)
    }

    /// Confirms the form by adding the draft to `store`.
    ///
    /// The draft is cleared only when an item was actually added.
    pub fn submit(&mut self, store: &mut ChecklistStore) -> MutationOutcome {
        let outcome = store.add(&self.title, &self.notes);
        if outcome.is_change() {
            self.clear();
        }
        outcome
    }

    /// Discards typed input.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.title.clear();
        self.notes.clear();
    }
}
