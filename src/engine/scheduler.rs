//! Leitner box transitions and due-date arithmetic.
//!
//! The whole scheduling model lives here: a correct review moves a card up
//! one box and doubles its interval (`2^new_box` days), a failed review
//! drops it back to box 0. Everything is pure. Callers capture "today" once
//! per review and feed that same value to both the due-query and the
//! reschedule, so a date rollover mid-review cannot skip or repeat a card.

use chrono::{Days, NaiveDate};

use crate::types::BoxLevel;

/// Cap on the interval shift. Far beyond any representable calendar date;
/// only keeps `1 << box` defined for arbitrarily high boxes.
const MAX_INTERVAL_SHIFT: BoxLevel = 62;

/// Due-date offset applied at the two spots where historical variants of
/// the tool disagreed: relapse scheduling and fresh-card scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueOffset {
    /// Eligible again on the same day.
    #[default]
    Today,
    /// Eligible starting the following day.
    Tomorrow,
}

impl DueOffset {
    /// Offset in whole days.
    pub fn days(self) -> u64 {
        match self {
            DueOffset::Today => 0,
            DueOffset::Tomorrow => 1,
        }
    }
}

/// Scheduling policy knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerConfig {
    /// Where a failed card lands.
    pub relapse_due: DueOffset,
    /// Where a freshly created card lands.
    pub fresh_due: DueOffset,
}

/// Combined result of one review. Box and interval always move together;
/// callers must write both through a single store update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// New retention box.
    pub box_level: BoxLevel,
    /// Days until the card is due again.
    pub interval_days: u64,
}

/// Applies one observed review outcome to a card's retention box.
///
/// Success increments the box before the power is taken, so a box-0 card
/// jumps straight to a 2-day interval. Failure resets to box 0 with the
/// configured relapse offset.
pub fn review(box_level: BoxLevel, correct: bool, config: &SchedulerConfig) -> Transition {
    if correct {
        let box_level = box_level.saturating_add(1);
        Transition {
            box_level,
            interval_days: 1u64 << box_level.min(MAX_INTERVAL_SHIFT),
        }
    } else {
        Transition {
            box_level: 0,
            interval_days: config.relapse_due.days(),
        }
    }
}

/// Next due date, `interval_days` after `today`. Saturates at the calendar
/// limit instead of overflowing for very high boxes.
pub fn next_due(today: NaiveDate, interval_days: u64) -> NaiveDate {
    today
        .checked_add_days(Days::new(interval_days))
        .unwrap_or(NaiveDate::MAX)
}

/// Due date for a freshly created card.
pub fn initial_due(today: NaiveDate, config: &SchedulerConfig) -> NaiveDate {
    next_due(today, config.fresh_due.days())
}

/// A card is due when its due date is on or before `today`.
pub fn is_due(due: NaiveDate, today: NaiveDate) -> bool {
    due <= today
}
