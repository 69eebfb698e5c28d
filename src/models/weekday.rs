//! Weekday-indexed buckets.

use chrono::Weekday;

/// Abbreviated weekday names, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Label for a weekday index (0 = Monday).
pub fn weekday_label(index: usize) -> &'static str {
    WEEKDAY_LABELS[index % 7]
}

/// One value per weekday, indexed Monday = 0 through Sunday = 6.
///
/// All seven buckets always exist, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBuckets<T>([T; 7]);

impl<T: Default> Default for WeekdayBuckets<T> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T> WeekdayBuckets<T> {
    pub fn get(&self, weekday: Weekday) -> &T {
        &self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn get_mut(&mut self, weekday: Weekday) -> &mut T {
        &mut self.0[weekday.num_days_from_monday() as usize]
    }

    /// Buckets with their weekday index, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.0.iter().enumerate()
    }
}

/// Seconds-since-midnight samples for arrivals and departures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEnd {
    pub start: Vec<i64>,
    pub end: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_seven_empty_buckets() {
        let buckets: WeekdayBuckets<Vec<i64>> = WeekdayBuckets::default();
        assert_eq!(buckets.iter().count(), 7);
        assert!(buckets.iter().all(|(_, b)| b.is_empty()));
        assert_eq!(
            buckets.iter().map(|(i, _)| i).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_get_mut_targets_weekday() {
        let mut buckets: WeekdayBuckets<Vec<i64>> = WeekdayBuckets::default();
        buckets.get_mut(Weekday::Sun).push(1);
        buckets.get_mut(Weekday::Mon).push(2);

        assert_eq!(buckets.get(Weekday::Mon), &vec![2]);
        assert_eq!(buckets.get(Weekday::Sun), &vec![1]);
        assert!(buckets.get(Weekday::Wed).is_empty());
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(0), "Mon");
        assert_eq!(weekday_label(6), "Sun");
    }
}
