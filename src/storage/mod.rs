//! Presence source access.
//!
//! - Parsing the comma-delimited presence file into a [`crate::models::PresenceStore`]
//! - A time-bounded, thread-safe cache in front of the parse step

pub mod cache;
pub mod source;

pub use cache::{CachedStore, DEFAULT_VALIDITY};
pub use source::{parse_presence, parse_row, CsvSource, MalformedRow, ParsedRow, PresenceSource};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading presence data.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Presence source unavailable at {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
