//! Grocery item domain model.
//!
//! # Responsibility
//! - Define the canonical grocery entry record.
//! - Provide completion lifecycle helpers and title validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is non-empty after trimming whitespace.
//! - `is_completed` is the only mutable field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a grocery item.
pub type ItemId = Uuid;

/// Observable lifecycle state of a live item.
///
/// `Deleted` is not represented: deleted items leave the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Active,
    Completed,
}

/// One grocery list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// User-facing label, stored exactly as supplied.
    pub title: String,
    pub is_completed: bool,
}

/// Validation error for item invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "item title must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates an active item with a freshly generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_completion(title, false)
    }

    /// Creates an item with a fresh ID and an explicit completion flag.
    ///
    /// Used by seeding, where some starter items begin completed.
    pub fn with_completion(title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed,
        }
    }

    /// Returns the lifecycle state derived from `is_completed`.
    pub fn state(&self) -> ItemState {
        if self.is_completed {
            ItemState::Completed
        } else {
            ItemState::Active
        }
    }

    /// Flips completion, moving `Active <-> Completed`.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Checks item invariants before persistence.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title has no non-whitespace characters.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if is_blank_title(&self.title) {
            return Err(ItemValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Returns whether a raw title would be ignored by `add`.
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}
