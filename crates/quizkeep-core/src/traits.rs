//! The storage capability the progress engine and catalog are written against.
//!
//! Persistence is a plain string-keyed, string-valued store. Backends live in
//! `quizkeep-store`; [`MemoryStore`] is kept here so every crate can use it as
//! a fake in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Record keys
// ---------------------------------------------------------------------------

/// Key of the quiz summary catalog.
pub const INDEX_KEY: &str = "quizzesIndex";

/// Key of the stored quiz record.
pub fn quiz_key(quiz_id: &str) -> String {
    format!("quiz:{quiz_id}")
}

/// Key of the stored progress record.
pub fn progress_key(quiz_id: &str) -> String {
    format!("progress:{quiz_id}")
}

// ---------------------------------------------------------------------------
// Key-value store trait
// ---------------------------------------------------------------------------

/// Durable string-keyed storage.
///
/// No operation is retried or wrapped; a failing backend surfaces its
/// [`StoreError`] to whoever called the engine.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A process-local store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    /// Number of `set_item` calls made.
    writes: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes made to this store.
    pub fn write_count(&self) -> u32 {
        self.writes.load(Ordering::Relaxed)
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.items
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.lock()?.clear();
        Ok(())
    }
}
