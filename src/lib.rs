//! # Presence Analyzer
//!
//! Per-weekday presence statistics for employees, computed from a CSV of
//! daily arrival and departure times and served as JSON to a dashboard.
//!
//! ## Architecture
//!
//! - **models**: Presence entries, the per-user store, weekday buckets
//! - **calculate**: Time arithmetic, means and weekday grouping
//! - **storage**: CSV parsing and the time-bounded presence cache
//! - **query**: Weekday reports for a single user
//! - **api**: REST API endpoints and dashboard pages
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod query;
pub mod storage;

pub use models::*;

use std::time::Duration;

/// Parse a human-friendly duration string (e.g., "1h", "10m", "90s"). Bare numbers are seconds.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        // Default to seconds
        (s, 1)
    };

    let num: u64 = num_str.parse().ok()?;
    num.checked_mul(multiplier).map(Duration::from_secs)
}
