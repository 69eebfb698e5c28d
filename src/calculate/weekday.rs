//! Weekday grouping of a user's presence entries.

use chrono::Datelike;

use crate::models::{StartEnd, UserPresence, WeekdayBuckets};

use super::{interval, seconds_since_midnight};

/// Group presence intervals (seconds) by weekday.
///
/// Dates are visited in ascending order, so each bucket lists its
/// intervals chronologically.
pub fn group_by_weekday(items: &UserPresence) -> WeekdayBuckets<Vec<i64>> {
    let mut result: WeekdayBuckets<Vec<i64>> = WeekdayBuckets::default();
    for (date, entry) in items {
        result
            .get_mut(date.weekday())
            .push(interval(entry.start, entry.end));
    }
    result
}

/// Group arrival and departure times (seconds since midnight) by weekday.
pub fn group_by_weekday_start_end(items: &UserPresence) -> WeekdayBuckets<StartEnd> {
    let mut result: WeekdayBuckets<StartEnd> = WeekdayBuckets::default();
    for (date, entry) in items {
        let bucket = result.get_mut(date.weekday());
        bucket.start.push(seconds_since_midnight(entry.start));
        bucket.end.push(seconds_since_midnight(entry.end));
    }
    result
}
