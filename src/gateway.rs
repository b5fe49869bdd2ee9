//! Entry-point guard for beginning an edit session.
//!
//! Invoked once per edit-session entry, not per request. On a grant the
//! caller receives a ready-to-run [`HeartbeatSession`] and becomes
//! responsible for beating it while the editor stays open. On a denial the
//! typed return value carries everything the notification layer needs (owner,
//! acquisition time, and whether this user may break the lock), so no
//! side-channel notice storage is involved.

use crate::auth::BreakAuthorizer;
use crate::error::Result;
use crate::heartbeat::HeartbeatSession;
use crate::manager::{AcquireResult, LockHolder, LockManager};
use crate::store::LockStore;

/// Outcome of an attempt to begin editing a resource.
#[derive(Debug, Clone)]
pub enum EditAccess {
    /// Entry allowed; run this session for the duration of the edit.
    Granted {
        /// Heartbeat driver bound to this resource and user.
        session: HeartbeatSession,
    },
    /// Entry refused; the resource is being edited by someone else.
    Denied {
        /// Who holds the lock, and since when.
        holder: LockHolder,
        /// Whether the requesting user is authorized to break the lock.
        can_break: bool,
    },
}

/// Guard deciding acquire vs. deny at edit-session entry.
pub struct AccessGateway<'a, S: LockStore, A: BreakAuthorizer> {
    manager: &'a LockManager<S>,
    authorizer: &'a A,
}

impl<'a, S: LockStore, A: BreakAuthorizer> AccessGateway<'a, S, A> {
    pub fn new(manager: &'a LockManager<S>, authorizer: &'a A) -> Self {
        Self {
            manager,
            authorizer,
        }
    }

    /// Attempt to begin an edit session on a resource.
    pub fn enter(&self, resource_id: &str, user_id: &str) -> Result<EditAccess> {
        match self.manager.try_acquire(resource_id, user_id)? {
            AcquireResult::Acquired => Ok(EditAccess::Granted {
                session: HeartbeatSession::new(
                    resource_id,
                    user_id,
                    self.manager.config().heartbeat_interval(),
                ),
            }),
            AcquireResult::DeniedHeldBy(holder) => Ok(EditAccess::Denied {
                can_break: self.authorizer.can_break_lock(user_id),
                holder,
            }),
        }
    }
}
