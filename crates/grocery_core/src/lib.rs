//! Core domain logic for the grocery checklist.
//! The store in this crate is the single source of truth for item invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{is_blank_title, Item, ItemId, ItemState, ItemValidationError};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
pub use repo::ui_state_repo::SqliteUiStateRepository;
pub use store::{
    CompletionSource, FixedCompletion, GroceryStore, RandomCompletion, SeedCompletion,
    StoreError, StoreEvent, StoreResult, SubscriptionId, ESSENTIAL_FOODS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
