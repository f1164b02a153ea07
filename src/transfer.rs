//! CSV bulk transfer of the full card set.
//!
//! Four fields per record, in order: front, back, box, due. Export writes
//! the stored tuples untouched, in creation order. Import is lenient:
//! malformed records are skipped and reported in an [`ImportReport`], and
//! everything else lands via [`CardStore::insert_exact`].

use std::fmt;
use std::io::{Read, Write};

use chrono::NaiveDate;
use log::warn;
use serde::Serialize;

use crate::{
    store::{CardStore, StoreError},
    types::BoxLevel,
};

/// Errors that abort a transfer outright. Per-record problems never land
/// here; they are collected in [`ImportReport::skipped`].
#[derive(Debug)]
pub enum TransferError {
    /// CSV-level read or write failure.
    Csv(csv::Error),
    /// Store failure while inserting or scanning.
    Store(StoreError),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Csv(err) => write!(f, "csv: {err}"),
            TransferError::Store(err) => write!(f, "store: {err}"),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::Csv(err) => Some(err),
            TransferError::Store(err) => Some(err),
        }
    }
}

impl From<csv::Error> for TransferError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<StoreError> for TransferError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result alias for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

#[derive(Debug, Serialize)]
struct TransferRow<'a> {
    front: &'a str,
    back: &'a str,
    box_level: BoxLevel,
    due: NaiveDate,
}

/// Why an import record was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Record did not have exactly four fields.
    FieldCount(usize),
    /// Box field was not a non-negative integer.
    BadBox(String),
    /// Due field was not an ISO `YYYY-MM-DD` date.
    BadDate(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected 4 fields, got {n}"),
            SkipReason::BadBox(value) => write!(f, "not a number: {value:?}"),
            SkipReason::BadDate(value) => write!(f, "invalid date: {value:?}"),
        }
    }
}

/// One skipped import record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSkip {
    /// 1-based line number in the input.
    pub line: u64,
    /// What was wrong with it.
    pub reason: SkipReason,
}

/// Outcome of a bulk import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Number of records inserted.
    pub imported: usize,
    /// Records skipped, in input order.
    pub skipped: Vec<ImportSkip>,
}

impl ImportReport {
    fn skip(&mut self, line: u64, reason: SkipReason) {
        warn!("skipping import record on line {line}: {reason}");
        self.skipped.push(ImportSkip { line, reason });
    }
}

/// Writes every card to `out` in creation order. Returns the record count.
pub fn export<S: CardStore, W: Write>(store: &S, out: W) -> TransferResult<usize> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    let cards = store.scan_all()?;
    for card in &cards {
        writer.serialize(TransferRow {
            front: &card.front,
            back: &card.back,
            box_level: card.box_level,
            due: card.due,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(cards.len())
}

/// Reads CSV records from `input` and inserts them exactly as given.
///
/// A record with the wrong field count, a non-integer box, or an
/// unparsable date is skipped; processing always continues with the next
/// record.
pub fn import<S: CardStore, R: Read>(store: &mut S, input: R) -> TransferResult<ImportReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut report = ImportReport::default();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() != 4 {
            report.skip(line, SkipReason::FieldCount(record.len()));
            continue;
        }
        let Ok(box_level) = record[2].parse::<BoxLevel>() else {
            report.skip(line, SkipReason::BadBox(record[2].to_string()));
            continue;
        };
        let Ok(due) = NaiveDate::parse_from_str(&record[3], "%Y-%m-%d") else {
            report.skip(line, SkipReason::BadDate(record[3].to_string()));
            continue;
        };

        store.insert_exact(&record[0], &record[1], box_level, due)?;
        report.imported += 1;
    }
    Ok(report)
}
