//! Lock store abstraction.
//!
//! The store is pure keyed persistence for [`LockRecord`]s; no lifecycle
//! logic lives here. Each operation must be atomic per key: two sessions
//! racing on the same resource must never both observe "unlocked" and both
//! write ownership. The in-memory backend gets this from its mutex; the file
//! backend from atomic rename. Stores never interpret expiry; liveness is
//! computed by the manager on read.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::record::LockRecord;

/// Keyed persistence for lock records.
pub trait LockStore {
    /// Read the record for a resource, absent records as `None`.
    ///
    /// Expired records are still returned; the caller decides liveness.
    fn get(&self, resource_id: &str) -> Result<Option<LockRecord>>;

    /// Write the record for a resource, replacing any prior record.
    fn put(&self, resource_id: &str, record: &LockRecord) -> Result<()>;

    /// Remove the record for a resource. Removing an absent record is not
    /// an error.
    fn delete(&self, resource_id: &str) -> Result<()>;
}

// Stores are commonly shared between a manager and other readers (the CLI's
// list command, tests that back-date records), so a borrowed store is a
// store.
impl<T: LockStore + ?Sized> LockStore for &T {
    fn get(&self, resource_id: &str) -> Result<Option<LockRecord>> {
        (**self).get(resource_id)
    }

    fn put(&self, resource_id: &str, record: &LockRecord) -> Result<()> {
        (**self).put(resource_id, record)
    }

    fn delete(&self, resource_id: &str) -> Result<()> {
        (**self).delete(resource_id)
    }
}
