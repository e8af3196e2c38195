//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist grocery items in insertion order.
//! - Own the connection lifecycle of the backing medium.
//!
//! # Invariants
//! - Rows are listed by `position ASC`; positions are never reused.
//! - Bulk inserts are atomic: either every row lands or none does.
//! - Read paths reject corrupt rows instead of masking them.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::item::{Item, ItemId, ItemValidationError};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT id, title, is_completed FROM items";

const ITEM_INSERT_SQL: &str = "INSERT INTO items (id, title, is_completed) VALUES (?1, ?2, ?3);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract the grocery store writes through.
pub trait ItemRepository {
    /// Appends one item after every existing row.
    fn insert_item(&mut self, item: &Item) -> RepoResult<()>;
    /// Appends several items in order, all-or-nothing.
    fn insert_items(&mut self, items: &[Item]) -> RepoResult<()>;
    /// Overwrites the completion flag of an existing item.
    fn set_completed(&mut self, id: ItemId, is_completed: bool) -> RepoResult<()>;
    /// Removes an item permanently.
    fn delete_item(&mut self, id: ItemId) -> RepoResult<()>;
    /// Lists every item in insertion order.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Flushes and releases the backing medium.
    fn close(self) -> RepoResult<()>
    where
        Self: Sized;
}

/// SQLite-backed item repository owning its connection.
pub struct SqliteItemRepository {
    conn: Connection,
}

impl SqliteItemRepository {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (or creates) a database file for item storage.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl ItemRepository for SqliteItemRepository {
    fn insert_item(&mut self, item: &Item) -> RepoResult<()> {
        item.validate()?;
        self.conn.execute(
            ITEM_INSERT_SQL,
            params![
                item.id.to_string(),
                item.title.as_str(),
                bool_to_int(item.is_completed)
            ],
        )?;
        Ok(())
    }

    fn insert_items(&mut self, items: &[Item]) -> RepoResult<()> {
        for item in items {
            item.validate()?;
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        {
            let mut stmt = tx.prepare(ITEM_INSERT_SQL)?;
            for item in items {
                stmt.execute(params![
                    item.id.to_string(),
                    item.title.as_str(),
                    bool_to_int(item.is_completed)
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn set_completed(&mut self, id: ItemId, is_completed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET
                is_completed = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![bool_to_int(is_completed), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete_item(&mut self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY position ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn close(self) -> RepoResult<()> {
        self.conn.close().map_err(|(_, err)| RepoError::from(err))
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in items.id"))
    })?;

    let is_completed = match row.get::<_, i64>("is_completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_completed value `{other}` in items.is_completed"
            )));
        }
    };

    let item = Item {
        id,
        title: row.get("title")?,
        is_completed,
    };
    item.validate()?;
    Ok(item)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
