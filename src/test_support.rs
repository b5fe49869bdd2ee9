//! Shared test fixtures.
//!
//! Expiry and refresh behavior is tested by back-dating a record's
//! `acquired_at` through the store, never by sleeping.

use crate::record::LockRecord;
use crate::store::LockStore;
use chrono::{Duration, Utc};

/// Shift a stored record's acquisition time into the past by `age`.
///
/// Panics if the record is absent; tests that back-date must have acquired
/// first.
pub(crate) fn backdate<S: LockStore>(store: &S, resource_id: &str, age: Duration) {
    let mut record = store
        .get(resource_id)
        .expect("store read failed")
        .expect("no record to backdate");
    record.acquired_at = Utc::now() - age;
    store.put(resource_id, &record).expect("store write failed");
}

/// Write a record owned by `owner` that is already `age` old.
pub(crate) fn seed_aged_record<S: LockStore>(
    store: &S,
    resource_id: &str,
    owner: &str,
    age: Duration,
) {
    let record = LockRecord {
        owner: owner.to_string(),
        acquired_at: Utc::now() - age,
    };
    store.put(resource_id, &record).expect("store write failed");
}
