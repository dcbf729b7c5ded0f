//! Repository layer over the key-value backend.
//!
//! # Responsibility
//! - Expose whole-checklist `load`/`save` so the store never sees storage keys
//!   or encodings.
//!
//! # Invariants
//! - The whole checklist lives under exactly one storage key.
//! - Reads distinguish "nothing stored" (`Ok(None)`) from failures.

pub mod checklist_repo;
