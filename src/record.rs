//! Lock record model.
//!
//! A [`LockRecord`] is the sole persisted entity: an ownership claim on a
//! resource, carrying the owner identity and the acquisition timestamp. The
//! expiry time is derived, never stored: a record whose age exceeds the
//! configured lock duration is logically absent ("lazy expiry"), regardless
//! of whether the store has physically deleted it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A persisted ownership claim on a resource.
///
/// Stored keyed by resource id, so writing a new record for the same id
/// replaces any prior claim. `owner` is never empty for an existing record;
/// an absent record means "unlocked".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Identifier of the user holding the lock.
    pub owner: String,

    /// When the lock was created or last refreshed (RFC3339).
    pub acquired_at: DateTime<Utc>,
}

impl LockRecord {
    /// Create a record owned by `owner`, acquired now.
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            acquired_at: Utc::now(),
        }
    }

    /// Age of the lock relative to now.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.acquired_at)
    }

    /// Derived expiry time for the given lock duration.
    pub fn expires_at(&self, duration: Duration) -> DateTime<Utc> {
        self.acquired_at + duration
    }

    /// Whether the record is still live for the given lock duration.
    ///
    /// A record is live iff `now < acquired_at + duration`. Expired records
    /// must be treated as "no lock" by every read path.
    pub fn is_live(&self, duration: Duration) -> bool {
        Utc::now() < self.expires_at(duration)
    }

    /// Human-readable "time since acquisition" string for notices.
    ///
    /// Sub-second ages render as "just now"; under a minute as seconds;
    /// otherwise as minutes and seconds.
    pub fn time_since(&self) -> String {
        format_time_since(self.age())
    }
}

/// Format an elapsed duration for lock notices.
pub fn format_time_since(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    if secs < 1 {
        return "just now".to_string();
    }

    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes < 1 {
        if seconds == 1 {
            return "1 second ago".to_string();
        }
        return format!("{} seconds ago", seconds);
    }

    format!("{} minute {} second ago", minutes, seconds)
}

/// Default identity string for the CLI: `user@host`.
///
/// The hosting system normally supplies the user id; the CLI falls back to
/// the environment when no `--user` flag or `LATCH_USER` variable is set.
pub fn default_owner_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}
