//! Leitner-box vocabulary trainer: a pure scheduling engine over a
//! pluggable word store.
//!
//! # Examples
//!
//! Pure scheduling:
//! ```
//! use chrono::NaiveDate;
//! use wordbox::engine::scheduler::{self, SchedulerConfig};
//!
//! let config = SchedulerConfig::default();
//! let t = scheduler::review(2, true, &config);
//! assert_eq!((t.box_level, t.interval_days), (3, 8));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).expect("date");
//! assert_eq!(
//!     scheduler::next_due(today, t.interval_days),
//!     NaiveDate::from_ymd_opt(2024, 1, 18).expect("date"),
//! );
//! ```
//!
//! A full review against the in-memory store:
//! ```
//! use chrono::NaiveDate;
//! use wordbox::{
//!     card::CardDraft,
//!     engine::scheduler::{self, SchedulerConfig},
//!     store::{CardStore, memory::MemoryCardStore},
//! };
//!
//! let config = SchedulerConfig::default();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).expect("date");
//!
//! let mut store = MemoryCardStore::new();
//! let id = store
//!     .insert(
//!         CardDraft { front: "Haus".into(), back: "house".into() },
//!         scheduler::initial_due(today, &config),
//!     )
//!     .expect("insert");
//!
//! let card = store.next_due(today).expect("query").expect("one card is due");
//! assert_eq!(card.id, id);
//!
//! let t = scheduler::review(card.box_level, true, &config);
//! store
//!     .update_schedule(card.id, t.box_level, scheduler::next_due(today, t.interval_days))
//!     .expect("update");
//! assert!(store.next_due(today).expect("query").is_none());
//! ```
#![deny(missing_docs)]

/// Card domain records and insert drafts.
pub mod card;
/// Scheduling engine: review transitions and outcome rules.
pub mod engine;
/// Interactive study loop and operator line interface.
pub mod session;
/// Word stores: the storage trait plus SQLite and in-memory backends.
pub mod store;
/// CSV bulk transfer.
pub mod transfer;
/// Shared primitive types.
pub mod types;
