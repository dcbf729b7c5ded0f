//! Checklist domain model.
//!
//! # Responsibility
//! - Define the item record and the ordered checklist value.
//! - Own the text encoding used for persistence.
//!
//! # Invariants
//! - Every item is identified by an id unique within its checklist.
//! - Deletion is a hard remove; there are no tombstones.

pub mod checklist;
pub mod item;
