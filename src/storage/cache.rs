//! Time-bounded cache in front of a [`PresenceSource`].
//!
//! The staleness check and the refresh run as one critical section, so at
//! most one parse is in flight and a racing caller reuses the fresh value
//! instead of parsing again. The slot is replaced wholesale and never
//! mutated in place.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::{info, trace};

use super::{PresenceSource, StorageError};
use crate::models::PresenceStore;

/// Default validity period of a cached parse.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(600);

#[derive(Debug)]
struct CacheEntry {
    value: Arc<PresenceStore>,
    expires_at: Instant,
}

/// Cached access to presence data.
pub struct CachedStore {
    source: Box<dyn PresenceSource>,
    validity: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl CachedStore {
    pub fn new(source: impl PresenceSource + 'static, validity: Duration) -> Self {
        Self {
            source: Box::new(source),
            validity,
            slot: Mutex::new(None),
        }
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Current presence data, re-parsing the source if the cached copy expired.
    pub fn get(&self) -> Result<Arc<PresenceStore>, StorageError> {
        self.get_at(Instant::now())
    }

    /// Same as [`CachedStore::get`] with an explicit clock reading.
    pub fn get_at(&self, now: Instant) -> Result<Arc<PresenceStore>, StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = slot.as_ref() {
            if now < entry.expires_at {
                trace!("Presence cache hit");
                return Ok(Arc::clone(&entry.value));
            }
        }

        info!("Refreshing presence cache (validity {:?})", self.validity);
        let value = Arc::new(self.source.load()?);
        *slot = Some(CacheEntry {
            value: Arc::clone(&value),
            expires_at: now + self.validity,
        });

        Ok(value)
    }
}

impl std::fmt::Debug for CachedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedStore")
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}
