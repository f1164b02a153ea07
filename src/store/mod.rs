//! Word Store: durable keyed card records with due-date queries.

/// In-memory implementation.
pub mod memory;
/// SQLite implementation.
pub mod sqlite;

use std::fmt;

use chrono::NaiveDate;

use crate::{
    card::{CardDraft, CardRecord},
    types::{BoxLevel, CardId},
};

/// Errors surfaced by card stores.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite failure.
    Sqlite(rusqlite::Error),
    /// A schedule update referenced an id that does not exist.
    MissingCard(CardId),
    /// `create` was called on a store that already has a schema.
    AlreadyInitialized,
    /// `open` was called on a store that was never created.
    NotInitialized,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(err) => write!(f, "sqlite: {err}"),
            StoreError::MissingCard(id) => write!(f, "no card with id {id}"),
            StoreError::AlreadyInitialized => write!(f, "store is already initialized"),
            StoreError::NotInitialized => write!(f, "store is not initialized (run `new` first)"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent card storage.
///
/// One operator, one open handle, blocking calls. Implementations release
/// their resources on drop, so every exit path closes the store.
pub trait CardStore {
    /// Appends a new card at box 0 with the given (engine-computed) due
    /// date and returns its id.
    fn insert(&mut self, draft: CardDraft, due: NaiveDate) -> StoreResult<CardId>;

    /// Inserts a card with exact field values. Bulk-import path.
    fn insert_exact(
        &mut self,
        front: &str,
        back: &str,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<CardId>;

    /// Returns the due card with the smallest id, or `None` when nothing
    /// is due on `today`. Stable across calls while the pool is unchanged.
    fn next_due(&self, today: NaiveDate) -> StoreResult<Option<CardRecord>>;

    /// Overwrites box and due for `id` as a single combined write.
    fn update_schedule(
        &mut self,
        id: CardId,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<()>;

    /// All cards in creation order. Export path.
    fn scan_all(&self) -> StoreResult<Vec<CardRecord>>;
}
