//! Lock lifecycle state machine.
//!
//! This module implements the editing-lock lifecycle over a [`LockStore`]:
//! acquisition, expiry-based timeout, heartbeat refresh, contention
//! detection, and forced takeover. Per resource the observable states are
//! Unlocked, LockedBySelf, and LockedByOther; transitions are driven by
//! wall-clock time and explicit calls. There is no background sweeper, and
//! expiry is computed lazily on every read.
//!
//! Contention outcomes (`DeniedHeldBy`, `TakenOver`) are values, not errors:
//! they always carry the current owner and acquisition time so the caller
//! can surface them verbatim.
//!
//! There is no fencing token. After a timeout, the last refresher wins; a
//! straggling write from an ousted session is an accepted risk for the
//! cooperative trust model this serves.

use crate::config::Config;
use crate::error::{LatchError, Result};
use crate::record::{LockRecord, format_time_since};
use crate::store::LockStore;
use chrono::{DateTime, Duration, Utc};

/// The current holder of a contended lock, as reported to the losing side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockHolder {
    /// Identifier of the user holding the lock.
    pub owner: String,

    /// When the holder acquired or last refreshed the lock.
    pub since: DateTime<Utc>,
}

impl LockHolder {
    fn from_record(record: &LockRecord) -> Self {
        Self {
            owner: record.owner.clone(),
            since: record.acquired_at,
        }
    }

    /// Age of the holder's claim.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.since)
    }

    /// Human-readable age for notices.
    pub fn time_since(&self) -> String {
        format_time_since(self.age())
    }
}

/// Outcome of an acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireResult {
    /// The caller now owns the lock.
    Acquired,
    /// A different user holds a live lock; no mutation was performed.
    DeniedHeldBy(LockHolder),
}

/// Outcome of a heartbeat refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshResult {
    /// The caller's lock was extended (`acquired_at` reset to now).
    StillOwned,
    /// Another user took the lock after this session's last refresh; no
    /// mutation was performed.
    TakenOver(LockHolder),
}

/// Current lock state of a resource, from one user's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockStatus {
    /// No live lock exists.
    Unlocked,
    /// The querying user holds the lock.
    OwnedBySelf {
        /// When the caller acquired or last refreshed it.
        since: DateTime<Utc>,
    },
    /// A different user holds the lock.
    OwnedByOther(LockHolder),
}

/// The lock lifecycle state machine.
///
/// Owns a store and an immutable config. Every operation completes in a
/// single store round-trip; failures from the store propagate as
/// [`LatchError::Store`] and are never retried here; the heartbeat cadence
/// is the retry.
#[derive(Debug)]
pub struct LockManager<S: LockStore> {
    store: S,
    config: Config,
}

impl<S: LockStore> LockManager<S> {
    /// Create a manager over a store with an explicit config.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// The configuration this manager was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attempt to acquire the editing lock for a resource.
    ///
    /// - Absent or expired record: a fresh record owned by `user_id` is
    ///   written and `Acquired` is returned.
    /// - Live record owned by `user_id`: the acquisition time is reset
    ///   (idempotent re-acquire: re-entering your own edit session extends
    ///   your own lock).
    /// - Live record owned by someone else: `DeniedHeldBy` with the owner
    ///   and acquisition time; nothing is written.
    pub fn try_acquire(&self, resource_id: &str, user_id: &str) -> Result<AcquireResult> {
        validate_ids(resource_id, user_id)?;

        if let Some(record) = self.live_record(resource_id)?
            && record.owner != user_id
        {
            return Ok(AcquireResult::DeniedHeldBy(LockHolder::from_record(&record)));
        }

        self.store.put(resource_id, &LockRecord::new(user_id))?;
        Ok(AcquireResult::Acquired)
    }

    /// Refresh the lock from an active edit session, or report takeover.
    ///
    /// The liveness-extension path: called once per heartbeat interval while
    /// the editor is open. Absent, expired, or self-owned records are
    /// (re)written with `acquired_at = now`. A live record owned by someone
    /// else means this session lost the lock; the holder is reported and
    /// nothing is written.
    pub fn refresh_or_report(&self, resource_id: &str, user_id: &str) -> Result<RefreshResult> {
        validate_ids(resource_id, user_id)?;

        if let Some(record) = self.live_record(resource_id)?
            && record.owner != user_id
        {
            return Ok(RefreshResult::TakenOver(LockHolder::from_record(&record)));
        }

        self.store.put(resource_id, &LockRecord::new(user_id))?;
        Ok(RefreshResult::StillOwned)
    }

    /// Forcibly reassign the lock to `new_owner_id`.
    ///
    /// Deletes any existing record and writes a fresh one, regardless of the
    /// current holder or expiry. Idempotent. Authorization is the caller's
    /// responsibility (see `breaker`); this method never checks it.
    pub fn force_break(&self, resource_id: &str, new_owner_id: &str) -> Result<()> {
        validate_ids(resource_id, new_owner_id)?;

        self.store.delete(resource_id)?;
        self.store.put(resource_id, &LockRecord::new(new_owner_id))
    }

    /// Report the lock state of a resource without mutating anything.
    pub fn query_status(&self, resource_id: &str, user_id: &str) -> Result<LockStatus> {
        validate_ids(resource_id, user_id)?;

        match self.live_record(resource_id)? {
            None => Ok(LockStatus::Unlocked),
            Some(record) if record.owner == user_id => Ok(LockStatus::OwnedBySelf {
                since: record.acquired_at,
            }),
            Some(record) => Ok(LockStatus::OwnedByOther(LockHolder::from_record(&record))),
        }
    }

    /// Read the record for a resource, treating expired records as absent.
    fn live_record(&self, resource_id: &str) -> Result<Option<LockRecord>> {
        let duration = self.config.lock_duration();
        Ok(self
            .store
            .get(resource_id)?
            .filter(|record| record.is_live(duration)))
    }
}

/// Reject missing or blank identifiers before touching the store.
fn validate_ids(resource_id: &str, user_id: &str) -> Result<()> {
    if resource_id.trim().is_empty() {
        return Err(LatchError::InvalidInput(
            "resource id must not be empty".to_string(),
        ));
    }
    if user_id.trim().is_empty() {
        return Err(LatchError::InvalidInput(
            "user id must not be empty".to_string(),
        ));
    }
    Ok(())
}
