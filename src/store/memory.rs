//! In-memory card store.
//!
//! Same contract as the SQLite store, without the file. The test suite is
//! the primary user; scripted runs that should leave nothing behind are
//! the other.

use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::{
    card::{CardDraft, CardRecord},
    engine::scheduler,
    types::{BoxLevel, CardId},
};

use super::{CardStore, StoreError, StoreResult};

/// In-memory implementation of [`CardStore`].
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    records: HashMap<CardId, CardRecord>,
    order: Vec<CardId>,
    next_card_id: CardId,
}

impl MemoryCardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            next_card_id: 1,
            ..Self::default()
        }
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the store holds no cards.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a card by id.
    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.records.get(&id)
    }

    fn push(&mut self, front: &str, back: &str, box_level: BoxLevel, due: NaiveDate) -> CardId {
        let id = self.next_card_id;
        self.next_card_id += 1;
        self.records.insert(
            id,
            CardRecord {
                id,
                front: front.to_string(),
                back: back.to_string(),
                box_level,
                due,
            },
        );
        self.order.push(id);
        id
    }
}

impl CardStore for MemoryCardStore {
    fn insert(&mut self, draft: CardDraft, due: NaiveDate) -> StoreResult<CardId> {
        Ok(self.push(&draft.front, &draft.back, 0, due))
    }

    fn insert_exact(
        &mut self,
        front: &str,
        back: &str,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<CardId> {
        Ok(self.push(front, back, box_level, due))
    }

    fn next_due(&self, today: NaiveDate) -> StoreResult<Option<CardRecord>> {
        // `order` is insertion order, which is id-ascending here.
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id))
            .find(|card| scheduler::is_due(card.due, today))
            .cloned())
    }

    fn update_schedule(
        &mut self,
        id: CardId,
        box_level: BoxLevel,
        due: NaiveDate,
    ) -> StoreResult<()> {
        let card = self.records.get_mut(&id).ok_or(StoreError::MissingCard(id))?;
        card.box_level = box_level;
        card.due = due;
        Ok(())
    }

    fn scan_all(&self) -> StoreResult<Vec<CardRecord>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect())
    }
}
