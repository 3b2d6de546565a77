//! Time-boxed response cache.
//!
//! One explicit object owned by the [`crate::Client`], keyed by the request it
//! answers ("code:gh", "all"). Entries expire by TTL only; nothing invalidates
//! them early. The interior mutex exists so the client can stay `&self`, not
//! because there is contention: the whole pipeline is one logical worker.

use crate::models::CountryStats;
use ahash::AHashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default TTL: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct Entry {
    records: Vec<CountryStats>,
    inserted: Instant,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<AHashMap<String, Entry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(AHashMap::new()),
        }
    }

    /// Last successful result for `key`, if it is still within the TTL.
    /// Expired entries are never returned; stale data is refetched, not shown.
    pub fn get(&self, key: &str) -> Option<Vec<CountryStats>> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries
            .get(key)
            .filter(|e| e.inserted.elapsed() < self.ttl)
            .map(|e| e.records.clone())
    }

    pub fn put(&self, key: &str, records: Vec<CountryStats>) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                records,
                inserted: Instant::now(),
            },
        );
    }

    /// Drop entries past their TTL. Optional housekeeping; `get` already
    /// ignores expired entries.
    pub fn expire(&self) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.retain(|_, e| e.inserted.elapsed() < self.ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
