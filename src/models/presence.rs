//! Presence records and the per-user store built from them.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

/// Employee identifier as it appears in the presence source.
pub type UserId = u32;

/// Arrival and departure times for one user on one date.
///
/// `end` is not required to be after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceEntry {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PresenceEntry {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Presence entries of a single user, keyed (and iterated) by ascending date.
pub type UserPresence = BTreeMap<NaiveDate, PresenceEntry>;

/// All parsed presence data: user -> date -> entry.
///
/// Built once per cache refresh and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceStore {
    users: BTreeMap<UserId, UserPresence>,
}

impl PresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any earlier entry for the same user and date.
    pub fn insert(&mut self, user_id: UserId, date: NaiveDate, entry: PresenceEntry) {
        self.users.entry(user_id).or_default().insert(date, entry);
    }

    pub fn get(&self, user_id: UserId) -> Option<&UserPresence> {
        self.users.get(&user_id)
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    /// User ids in ascending order.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of (user, date) entries.
    pub fn entry_count(&self) -> usize {
        self.users.values().map(|dates| dates.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
