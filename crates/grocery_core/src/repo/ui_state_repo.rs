//! Presentation-only persisted flags.
//!
//! Stored in the `ui_state` table, separate from items; the grocery store
//! never reads or writes it.

use crate::repo::item_repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension};

const HAS_SHOWN_TIP_KEY: &str = "has_shown_tip";

/// Key/value flags for onboarding and other view concerns.
pub struct SqliteUiStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUiStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns whether the "essential foods" tip was already presented.
    pub fn has_shown_tip(&self) -> RepoResult<bool> {
        Ok(self.get_flag(HAS_SHOWN_TIP_KEY)?.unwrap_or(false))
    }

    /// Records that the tip was presented. Safe to call repeatedly.
    pub fn mark_tip_shown(&self) -> RepoResult<()> {
        self.set_flag(HAS_SHOWN_TIP_KEY, true)
    }

    fn get_flag(&self, key: &str) -> RepoResult<Option<bool>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM ui_state WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value.map(|raw| raw == "1"))
    }

    fn set_flag(&self, key: &str, value: bool) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO ui_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, if value { "1" } else { "0" }],
        )?;
        Ok(())
    }
}
