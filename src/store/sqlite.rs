//! SQLite-backed card store.

use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    card::{CardDraft, CardRecord},
    types::{BoxLevel, CardId},
};

use super::{CardStore, StoreError, StoreResult};

/// SQLite implementation of [`CardStore`].
///
/// Dates are stored as ISO `YYYY-MM-DD` text, so the `due <= today`
/// comparison works directly on the column.
pub struct SqliteCardStore {
    conn: Connection,
}

impl SqliteCardStore {
    /// Initializes the schema at `path`.
    ///
    /// Fails with [`StoreError::AlreadyInitialized`] if the cards table
    /// already exists.
    pub fn create(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        if Self::has_schema(&conn)? {
            return Err(StoreError::AlreadyInitialized);
        }
        conn.execute_batch(include_str!("schema.sql"))?;
        debug!("created card store at {}", path.display());
        Self::init_connection(conn)
    }

    /// Opens an existing store at `path`.
    ///
    /// Fails with [`StoreError::NotInitialized`] if the schema is missing.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        if !Self::has_schema(&conn)? {
            return Err(StoreError::NotInitialized);
        }
        debug!("opened card store at {}", path.display());
        Self::init_connection(conn)
    }

    /// Opens an in-memory store with a fresh schema.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    fn has_schema(conn: &Connection) -> StoreResult<bool> {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'cards'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

impl CardStore for SqliteCardStore {
    fn insert(&mut self, draft: CardDraft, due: NaiveDate) -> StoreResult<CardId> {
        self.conn.execute(
            "INSERT INTO cards (front, back, box, due) VALUES (?1, ?2, 0, ?3)",
            params![draft.front, draft.back, due],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_exact(
        &mut self,
        front: &str,
        back: &str,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<CardId> {
        self.conn.execute(
            "INSERT INTO cards (front, back, box, due) VALUES (?1, ?2, ?3, ?4)",
            params![front, back, box_level, due],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn next_due(&self, today: NaiveDate) -> StoreResult<Option<CardRecord>> {
        let card = self
            .conn
            .query_row(
                "SELECT id, front, back, box, due FROM cards \
                 WHERE due <= ?1 ORDER BY id ASC LIMIT 1",
                params![today],
                row_to_card,
            )
            .optional()?;
        Ok(card)
    }

    fn update_schedule(
        &mut self,
        id: CardId,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE cards SET box = ?1, due = ?2 WHERE id = ?3",
            params![box_level, due, id],
        )?;
        if changed == 0 {
            return Err(StoreError::MissingCard(id));
        }
        Ok(())
    }

    fn scan_all(&self) -> StoreResult<Vec<CardRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, front, back, box, due FROM cards ORDER BY id ASC")?;
        let rows = stmt.query_map([], row_to_card)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn row_to_card(row: &rusqlite::Row<'_>) -> rusqlite::Result<CardRecord> {
    Ok(CardRecord {
        id: row.get(0)?,
        front: row.get(1)?,
        back: row.get(2)?,
        box_level: row.get(3)?,
        due: row.get(4)?,
    })
}
