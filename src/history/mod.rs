//! Bounded, age-limited password history
//!
//! History is an ordered list of [`PasswordRecord`]s, most recent first,
//! capped at [`HISTORY_CAPACITY`] entries and swept of anything older than
//! [`HISTORY_MAX_AGE_MS`]. The whole list is written as one JSON array under
//! one key after every mutation.
//!
//! Storage failures never reach the caller: the in-memory list stays the
//! source of truth for the session and the failure is logged.

pub mod record;

pub use record::PasswordRecord;

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::{HISTORY_CAPACITY, HISTORY_KEY, HISTORY_MAX_AGE_MS};

/// History list bound to a key-value store
pub struct HistoryStore<S> {
    store: S,
    key: String,
    capacity: usize,
    max_age_ms: i64,
    records: Vec<PasswordRecord>,
    persisted: bool,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load history from `store` with the default key and limits
    pub fn load(store: S) -> Self {
        Self::load_with(store, HISTORY_KEY, HISTORY_CAPACITY, HISTORY_MAX_AGE_MS)
    }

    /// Load history from `store` under `key`
    ///
    /// A missing key, an unreadable store, or malformed JSON all yield an
    /// empty history. The stored value is left untouched until the first
    /// mutation.
    pub fn load_with(store: S, key: &str, capacity: usize, max_age_ms: i64) -> Self {
        let records = match Self::read(&store, key) {
            Ok(Some(mut records)) => {
                records.iter_mut().for_each(PasswordRecord::repair);
                records.truncate(capacity);
                log::debug!("Loaded {} history records", records.len());
                records
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Discarding unreadable history under '{}': {}", key, e);
                Vec::new()
            }
        };

        Self {
            store,
            key: key.to_string(),
            capacity,
            max_age_ms,
            records,
            persisted: true,
        }
    }

    fn read(store: &S, key: &str) -> Result<Option<Vec<PasswordRecord>>> {
        match store.get(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.records)?;
        self.store.set(&self.key, &json)
    }

    /// Rewrite the stored list, logging instead of failing
    fn persist(&mut self) {
        match self.write() {
            Ok(()) => {
                self.persisted = true;
                log::debug!("Persisted {} history records", self.records.len());
            }
            Err(e) => {
                self.persisted = false;
                log::error!("Failed to persist history: {}", e);
            }
        }
    }

    /// Prepend a record, dropping the oldest beyond capacity
    pub fn insert(&mut self, record: PasswordRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
        self.persist();
    }

    /// Remove every record with the given ID, returning how many went
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = before - self.records.len();
        self.persist();
        removed
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
        log::info!("History cleared");
        self.persist();
    }

    /// Drop records older than the maximum age at `now_ms`
    ///
    /// A record exactly at the maximum age is kept. Writes only when
    /// something was removed.
    pub fn sweep(&mut self, now_ms: i64) -> usize {
        let before = self.records.len();
        let max_age = self.max_age_ms;
        self.records.retain(|r| r.age_ms(now_ms) <= max_age);
        let removed = before - self.records.len();
        if removed > 0 {
            log::info!("Swept {} expired history records", removed);
            self.persist();
        }
        removed
    }

    /// Records, most recent first
    pub fn records(&self) -> &[PasswordRecord] {
        &self.records
    }

    /// Look up a record by ID
    pub fn get(&self, id: i64) -> Option<&PasswordRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Highest ID in history
    pub fn latest_id(&self) -> Option<i64> {
        self.records.iter().map(|r| r.id).max()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the last write reached the store
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}
