//! Checklist use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory checklist and its save pipeline.
//! - Keep presentation layers decoupled from repository/storage details.

pub mod checklist_store;
pub mod item_form;
