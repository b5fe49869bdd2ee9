//! Heartbeat protocol for active edit sessions.
//!
//! Not a transport, but the scheduling contract for liveness. While an editor
//! is open, its session invokes [`HeartbeatSession::beat`] once per
//! configured interval; each successful beat resets the lock's acquisition
//! time, pushing expiry a full duration into the future. When the editor
//! closes, the session simply stops beating and the lock expires on its own;
//! no explicit release exists or is needed.
//!
//! Missed beats are tolerated by construction: takeover becomes possible
//! only once the cumulative silent gap exceeds the lock duration, and the
//! interval is validated to sit well below the duration (see
//! `Config::validate`), so transient hiccups never cause a false takeover.

use crate::error::Result;
use crate::manager::{LockManager, RefreshResult};
use crate::store::LockStore;
use chrono::{DateTime, Duration, Utc};

/// Liveness driver for one editing session on one resource.
#[derive(Debug, Clone)]
pub struct HeartbeatSession {
    resource_id: String,
    user_id: String,
    interval: Duration,
    last_beat: Option<DateTime<Utc>>,
}

impl HeartbeatSession {
    /// Create a session beating at the given interval.
    pub fn new(resource_id: &str, user_id: &str, interval: Duration) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            user_id: user_id.to_string(),
            interval,
            last_beat: None,
        }
    }

    /// The resource this session keeps alive.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The user this session beats for.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The configured beat cadence.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deliver one heartbeat: refresh the lock or learn who took it.
    ///
    /// `last_beat` advances only on a confirmed `StillOwned`; after a store
    /// failure or a takeover report the session must not assume it still
    /// holds the lock.
    pub fn beat<S: LockStore>(&mut self, manager: &LockManager<S>) -> Result<RefreshResult> {
        let result = manager.refresh_or_report(&self.resource_id, &self.user_id)?;

        if result == RefreshResult::StillOwned {
            self.last_beat = Some(Utc::now());
        }

        Ok(result)
    }

    /// When the last confirmed beat happened, if any.
    pub fn last_beat(&self) -> Option<DateTime<Utc>> {
        self.last_beat
    }

    /// When the next beat is due: one interval after the last confirmed
    /// beat, or immediately if none has succeeded yet.
    pub fn next_beat_at(&self) -> DateTime<Utc> {
        match self.last_beat {
            Some(at) => at + self.interval,
            None => Utc::now(),
        }
    }
}
