//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the persistence contract the store writes through.
//! - Keep SQL details out of the store and presentation layers.
//!
//! # Invariants
//! - Write paths call `Item::validate()` before touching SQL.
//! - Mutations of a missing id report `NotFound`, not silent success.

pub mod item_repo;
pub mod ui_state_repo;
