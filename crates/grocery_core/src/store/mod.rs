//! Grocery item store.
//!
//! # Responsibility
//! - Own the authoritative, ordered in-memory item collection.
//! - Write every mutation through to an `ItemRepository`.
//! - Notify subscribed presentation layers after successful mutations.
//!
//! # Invariants
//! - Display order is insertion order; toggling never reorders.
//! - Blank titles never become items.
//! - The repository is written first; memory changes only after it succeeds,
//!   so a failed write leaves memory and storage in agreement.
//! - A row found missing on write is evicted from memory as well.
//! - Mutators take `&mut self`, which serializes them against each other.

mod observer;
mod seed;

pub use observer::{StoreEvent, SubscriptionId};
pub use seed::{
    CompletionSource, FixedCompletion, RandomCompletion, SeedCompletion, ESSENTIAL_FOODS,
};

use crate::model::item::{is_blank_title, Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoError, SqliteItemRepository};
use log::{debug, info, warn};
use observer::Observers;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
#[derive(Debug)]
pub enum StoreError {
    /// No live item has this id; usually already deleted.
    NotFound(ItemId),
    /// The backing medium rejected the write. Memory was left unchanged.
    Persistence(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::Persistence(err) => write!(f, "persistence failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }
}

/// The grocery list, backed by a repository.
pub struct GroceryStore<R: ItemRepository> {
    repo: R,
    items: Vec<Item>,
    observers: Observers,
}

impl GroceryStore<SqliteItemRepository> {
    /// Binds to (or creates) a database file and loads its items.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::load(SqliteItemRepository::open(path)?)
    }

    /// Starts an empty, non-durable store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::load(SqliteItemRepository::open_in_memory()?)
    }
}

impl<R: ItemRepository> GroceryStore<R> {
    /// Creates a store whose initial contents are the repository's items.
    pub fn load(repo: R) -> StoreResult<Self> {
        let items = repo.list_items()?;
        info!(
            "event=store_load module=store status=ok item_count={}",
            items.len()
        );
        Ok(Self {
            repo,
            items,
            observers: Observers::default(),
        })
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds an active item, or does nothing for a blank title.
    ///
    /// The title is stored as supplied; trimming only decides blankness.
    pub fn add(&mut self, title: &str) -> StoreResult<Option<Item>> {
        if is_blank_title(title) {
            debug!("event=item_add module=store status=ignored reason=blank_title");
            return Ok(None);
        }

        let item = Item::new(title);
        self.repo.insert_item(&item).map_err(|err| {
            warn!("event=item_add module=store status=error error={err}");
            StoreError::Persistence(err)
        })?;
        self.items.push(item.clone());

        info!(
            "event=item_add module=store status=ok item_id={}",
            item.id
        );
        self.observers.notify(&StoreEvent::Added(item.clone()));
        Ok(Some(item))
    }

    /// Flips the completion flag and returns the updated item.
    ///
    /// # Errors
    /// - `NotFound` when no live item has `id`. If the row was removed behind
    ///   the store's back, the stale entry is dropped and `Deleted` is emitted.
    /// - `Persistence` when the write fails; the flag is left as it was.
    pub fn toggle_completion(&mut self, id: ItemId) -> StoreResult<Item> {
        let index = self.index_of(id)?;
        let flipped = !self.items[index].is_completed;

        if let Err(err) = self.repo.set_completed(id, flipped) {
            warn!("event=item_toggle module=store status=error item_id={id} error={err}");
            return Err(self.reconcile_failure(index, err));
        }
        let item = &mut self.items[index];
        item.toggle();
        let updated = item.clone();

        info!(
            "event=item_toggle module=store status=ok item_id={id} completed={}",
            updated.is_completed
        );
        self.observers.notify(&StoreEvent::Toggled(updated.clone()));
        Ok(updated)
    }

    /// Removes an item for good.
    ///
    /// # Errors
    /// - `NotFound` when no live item has `id`, including rows another
    ///   connection already removed.
    /// - `Persistence` when the delete fails; the item stays listed.
    pub fn delete(&mut self, id: ItemId) -> StoreResult<()> {
        let index = self.index_of(id)?;

        if let Err(err) = self.repo.delete_item(id) {
            warn!("event=item_delete module=store status=error item_id={id} error={err}");
            return Err(self.reconcile_failure(index, err));
        }
        self.items.remove(index);

        info!("event=item_delete module=store status=ok item_id={id}");
        self.observers.notify(&StoreEvent::Deleted(id));
        Ok(())
    }

    /// Appends the five essential-food starter items.
    ///
    /// Callers gate this on `is_empty()`; the store does not re-check.
    /// All five rows are persisted in one transaction.
    pub fn seed_essentials(
        &mut self,
        source: &mut dyn CompletionSource,
    ) -> StoreResult<Vec<Item>> {
        let seeded = seed::essential_items(source);
        if !self.items.is_empty() {
            debug!(
                "event=seed_essentials module=store status=ungated existing_count={}",
                self.items.len()
            );
        }

        self.repo.insert_items(&seeded).map_err(|err| {
            warn!("event=seed_essentials module=store status=error error={err}");
            StoreError::Persistence(err)
        })?;
        self.items.extend(seeded.iter().cloned());

        info!(
            "event=seed_essentials module=store status=ok item_count={}",
            seeded.len()
        );
        self.observers.notify(&StoreEvent::Seeded(seeded.clone()));
        Ok(seeded)
    }

    /// Registers a listener called after every successful mutation.
    pub fn on_change(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Releases the backing medium.
    pub fn close(self) -> StoreResult<()> {
        let count = self.items.len();
        self.repo.close().map_err(StoreError::Persistence)?;
        info!("event=store_close module=store status=ok item_count={count}");
        Ok(())
    }

    /// Maps a failed write on `self.items[index]` to a store error.
    ///
    /// A missing row means another writer deleted it, so the in-memory entry
    /// is evicted to keep memory and storage in agreement.
    fn reconcile_failure(&mut self, index: usize, err: RepoError) -> StoreError {
        match err {
            RepoError::NotFound(id) => {
                self.items.remove(index);
                info!("event=item_evict module=store status=ok item_id={id} reason=row_missing");
                self.observers.notify(&StoreEvent::Deleted(id));
                StoreError::NotFound(id)
            }
            other => StoreError::Persistence(other),
        }
    }

    fn index_of(&self, id: ItemId) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
