//! Presence queries.
//!
//! Composes the cache, weekday grouping and statistics into the reports the
//! dashboard consumes. An unknown user is not an error: every report comes
//! back empty.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::calculate::{group_by_weekday, group_by_weekday_start_end, mean_seconds};
use crate::models::{weekday_label, PresenceStore, UserId, UserPresence};
use crate::storage::{CachedStore, StorageError};

/// Header row of the total presence report.
pub const TOTAL_HEADER: (&str, &str) = ("Weekday", "Presence (s)");

/// `(weekday, mean seconds present)`
pub type MeanTimeRow = (&'static str, f64);

/// `(weekday, mean arrival seconds, mean departure seconds)`
pub type StartEndRow = (&'static str, f64, f64);

/// Row of the total presence report. Serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TotalTimeRow {
    Header(&'static str, &'static str),
    Day(&'static str, i64),
}

/// Entry of the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub name: String,
}

/// Query façade over cached presence data.
#[derive(Debug, Clone)]
pub struct PresenceQueries {
    cache: Arc<CachedStore>,
}

impl PresenceQueries {
    pub fn new(cache: Arc<CachedStore>) -> Self {
        Self { cache }
    }

    /// Current presence data.
    pub fn get_data(&self) -> Result<Arc<PresenceStore>, StorageError> {
        self.cache.get()
    }

    /// All known users, ascending by id.
    pub fn users(&self) -> Result<Vec<UserSummary>, StorageError> {
        let data = self.get_data()?;
        Ok(data
            .user_ids()
            .map(|user_id| UserSummary {
                user_id,
                name: format!("User {}", user_id),
            })
            .collect())
    }

    /// Mean presence time per weekday, Monday first.
    pub fn mean_time_by_weekday(&self, user_id: UserId) -> Result<Vec<MeanTimeRow>, StorageError> {
        let data = self.get_data()?;
        let Some(items) = lookup(&data, user_id) else {
            return Ok(Vec::new());
        };

        Ok(group_by_weekday(items)
            .iter()
            .map(|(weekday, intervals)| (weekday_label(weekday), mean_seconds(intervals)))
            .collect())
    }

    /// Total presence time per weekday, preceded by a header row.
    pub fn total_time_by_weekday(
        &self,
        user_id: UserId,
    ) -> Result<Vec<TotalTimeRow>, StorageError> {
        let data = self.get_data()?;
        let Some(items) = lookup(&data, user_id) else {
            return Ok(Vec::new());
        };

        let mut result = vec![TotalTimeRow::Header(TOTAL_HEADER.0, TOTAL_HEADER.1)];
        result.extend(
            group_by_weekday(items)
                .iter()
                .map(|(weekday, intervals)| {
                    TotalTimeRow::Day(weekday_label(weekday), intervals.iter().sum())
                }),
        );
        Ok(result)
    }

    /// Mean arrival and departure time per weekday, Monday first.
    pub fn start_end_by_weekday(&self, user_id: UserId) -> Result<Vec<StartEndRow>, StorageError> {
        let data = self.get_data()?;
        let Some(items) = lookup(&data, user_id) else {
            return Ok(Vec::new());
        };

        Ok(group_by_weekday_start_end(items)
            .iter()
            .map(|(weekday, times)| {
                (
                    weekday_label(weekday),
                    mean_seconds(&times.start),
                    mean_seconds(&times.end),
                )
            })
            .collect())
    }
}

fn lookup(data: &PresenceStore, user_id: UserId) -> Option<&UserPresence> {
    let items = data.get(user_id);
    if items.is_none() {
        debug!("User {} not found!", user_id);
    }
    items
}
