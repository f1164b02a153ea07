//! Card domain record and draft types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{BoxLevel, CardId};

/// Fully materialized, authoritative card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Stable card identifier.
    pub id: CardId,
    /// Prompt text shown to the learner. Immutable after creation.
    pub front: String,
    /// Expected answer text. Immutable after creation.
    pub back: String,
    /// Current retention box.
    pub box_level: BoxLevel,
    /// Date on which the card next becomes eligible for review.
    pub due: NaiveDate,
}

/// Insert payload used to create a new [`CardRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    /// Prompt text.
    pub front: String,
    /// Expected answer text.
    pub back: String,
}
