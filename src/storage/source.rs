//! CSV presence source.
//!
//! Each retained row is `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`. The file has
//! no header marker: rows with a different field count are dropped silently,
//! and rows whose fields fail to convert are logged and dropped. Only an
//! unreadable source aborts the parse.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime, Timelike};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{debug, info, trace};

use super::StorageError;
use crate::models::{PresenceEntry, PresenceStore, UserId};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const FIELD_COUNT: usize = 4;

/// Why a single row was left out of the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRow {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid user id {0:?}")]
    UserId(String),

    #[error("invalid date {0:?}")]
    Date(String),

    #[error("invalid start time {0:?}")]
    StartTime(String),

    #[error("invalid end time {0:?}")]
    EndTime(String),

    #[error("unreadable row: {0}")]
    Encoding(String),
}

/// A fully converted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub entry: PresenceEntry,
}

/// Anything that can produce a fresh [`PresenceStore`].
pub trait PresenceSource: Send + Sync {
    fn load(&self) -> Result<PresenceStore, StorageError>;
}

/// Presence source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PresenceSource for CsvSource {
    fn load(&self) -> Result<PresenceStore, StorageError> {
        let file = File::open(&self.path).map_err(|source| StorageError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        parse_presence(file, &self.path)
    }
}

/// Parse `HH:MM:SS`. Chrono reads a seconds field of 60 as a leap second;
/// clock times here stop at :59.
fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|t| t.nanosecond() < 1_000_000_000)
}

/// Convert one record into a presence row.
pub fn parse_row(record: &StringRecord) -> Result<ParsedRow, MalformedRow> {
    if record.len() != FIELD_COUNT {
        return Err(MalformedRow::FieldCount(record.len()));
    }

    let user_id = match record[0].trim().parse::<UserId>() {
        Ok(id) if id > 0 => id,
        _ => return Err(MalformedRow::UserId(record[0].to_string())),
    };
    let date = NaiveDate::parse_from_str(&record[1], DATE_FORMAT)
        .map_err(|_| MalformedRow::Date(record[1].to_string()))?;
    let start = parse_clock_time(&record[2])
        .ok_or_else(|| MalformedRow::StartTime(record[2].to_string()))?;
    let end = parse_clock_time(&record[3])
        .ok_or_else(|| MalformedRow::EndTime(record[3].to_string()))?;

    Ok(ParsedRow {
        user_id,
        date,
        entry: PresenceEntry::new(start, end),
    })
}

/// Read the whole source into a store. `origin` is only used for error reporting.
pub fn parse_presence<R: Read>(reader: R, origin: &Path) -> Result<PresenceStore, StorageError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = PresenceStore::new();
    let mut kept = 0usize;
    let mut skipped = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        let line = index + 1;
        let row = match result {
            Ok(record) => parse_row(&record),
            Err(e) => match e.into_kind() {
                csv::ErrorKind::Io(source) => {
                    return Err(StorageError::SourceUnavailable {
                        path: origin.to_path_buf(),
                        source,
                    })
                }
                kind => Err(MalformedRow::Encoding(format!("{:?}", kind))),
            },
        };

        match row {
            Ok(row) => {
                store.insert(row.user_id, row.date, row.entry);
                kept += 1;
            }
            Err(MalformedRow::FieldCount(found)) => {
                trace!("Ignoring line {} with {} fields", line, found);
                skipped += 1;
            }
            Err(e) => {
                debug!("Problem with line {}: {}", line, e);
                skipped += 1;
            }
        }
    }

    info!(
        "Parsed {} presence rows for {} users from {:?} ({} skipped)",
        kept,
        store.user_count(),
        origin,
        skipped
    );

    Ok(store)
}
