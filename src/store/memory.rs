//! In-memory lock store.
//!
//! HashMap behind a mutex; the mutex provides the per-key read-modify-write
//! atomicity the lock manager relies on. Used by tests and by embedders that
//! keep lock state process-local.

use super::LockStore;
use crate::error::Result;
use crate::record::LockRecord;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local lock store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, LockRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LockStore for MemoryStore {
    fn get(&self, resource_id: &str) -> Result<Option<LockRecord>> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        Ok(records.get(resource_id).cloned())
    }

    fn put(&self, resource_id: &str, record: &LockRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        records.insert(resource_id.to_string(), record.clone());
        Ok(())
    }

    fn delete(&self, resource_id: &str) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        records.remove(resource_id);
        Ok(())
    }
}
