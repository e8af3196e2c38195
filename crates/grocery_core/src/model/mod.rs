//! Domain model for the grocery checklist.
//!
//! # Responsibility
//! - Define the single persisted entity (`Item`) and its lifecycle states.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId` that is never reused.
//! - Deletion is a hard delete; there is no tombstone and no resurrection.

pub mod item;
