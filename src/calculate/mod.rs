//! Statistics calculation engine.
//!
//! Derives presence metrics from parsed records:
//! - Clock-time arithmetic (seconds since midnight, intervals)
//! - Arithmetic mean with an empty-input convention
//! - Weekday grouping of a user's entries

mod weekday;

pub use weekday::{group_by_weekday, group_by_weekday_start_end};

use chrono::{NaiveTime, Timelike};

/// Seconds elapsed since midnight for a clock time.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Signed interval in seconds from `start` to `end`.
/// Negative when `end` precedes `start`; no wraparound past midnight.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean<T>(items: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|&v| v.into()).sum();
    sum / items.len() as f64
}

/// Arithmetic mean of integer seconds. Returns 0.0 for an empty slice.
pub fn mean_seconds(items: &[i64]) -> f64 {
    let values: Vec<f64> = items.iter().map(|&s| s as f64).collect();
    mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(seconds_since_midnight(time(0, 0, 0)), 0);
        assert_eq!(seconds_since_midnight(time(12, 0, 0)), 43200);
        assert_eq!(seconds_since_midnight(time(17, 21, 11)), 62471);
        assert_eq!(seconds_since_midnight(time(23, 59, 59)), 86399);
    }

    #[test]
    fn test_interval() {
        assert_eq!(interval(time(10, 0, 0), time(11, 0, 0)), 3600);
        assert_eq!(interval(time(10, 0, 0), time(10, 0, 30)), 30);
        assert_eq!(interval(time(9, 0, 0), time(9, 0, 0)), 0);
    }

    #[test]
    fn test_interval_negative_not_clamped() {
        assert_eq!(interval(time(11, 0, 0), time(10, 0, 0)), -3600);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean::<f64>(&[]), 0.0);
        assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
        assert!((mean(&[1.11, 2.22, 3.33, 4.1234562]) - 2.69586405).abs() < 1e-8);
    }

    #[test]
    fn test_mean_integers_use_float_division() {
        assert_eq!(mean(&[1, 2]), 1.5);
        assert_eq!(mean_seconds(&[1, 2]), 1.5);
    }

    #[test]
    fn test_mean_seconds() {
        assert_eq!(mean_seconds(&[]), 0.0);
        assert_eq!(mean_seconds(&[30047]), 30047.0);
        assert_eq!(mean_seconds(&[-10, 30]), 10.0);
    }
}
