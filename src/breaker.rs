//! Privileged break-lock operation.
//!
//! Forcible takeover of a stale or contended lock. The privilege check comes
//! from the external [`BreakAuthorizer`] and happens before any lock state is
//! touched; the resource-existence check comes from the external
//! [`ResourceDirectory`] (an absent *lock* is never an error, only an
//! unknown *resource* is). On success the requesting user becomes the new
//! owner and can resume editing immediately.

use crate::auth::{BreakAuthorizer, ResourceDirectory};
use crate::error::Result;
use crate::manager::LockManager;
use crate::store::LockStore;

/// Outcome of a break-lock request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakOutcome {
    /// The lock was reassigned; `new_owner` is the requesting user.
    Broken { new_owner: String },
    /// The requesting user lacks the break-lock privilege; state unchanged.
    Forbidden,
    /// The resource id names no known resource; state unchanged.
    NotFound,
}

/// Break-lock service over a manager plus external authorization.
pub struct BreakLockService<'a, S: LockStore, A: BreakAuthorizer, D: ResourceDirectory> {
    manager: &'a LockManager<S>,
    authorizer: &'a A,
    directory: &'a D,
}

impl<'a, S: LockStore, A: BreakAuthorizer, D: ResourceDirectory> BreakLockService<'a, S, A, D> {
    pub fn new(manager: &'a LockManager<S>, authorizer: &'a A, directory: &'a D) -> Self {
        Self {
            manager,
            authorizer,
            directory,
        }
    }

    /// Forcibly clear any lock on `resource_id` and assign it to the
    /// requesting user.
    pub fn break_lock(&self, resource_id: &str, requesting_user_id: &str) -> Result<BreakOutcome> {
        if !self.authorizer.can_break_lock(requesting_user_id) {
            return Ok(BreakOutcome::Forbidden);
        }

        if !self.directory.exists(resource_id) {
            return Ok(BreakOutcome::NotFound);
        }

        self.manager.force_break(resource_id, requesting_user_id)?;
        Ok(BreakOutcome::Broken {
            new_owner: requesting_user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AllowAll, AnyResource, ConfigAuthorizer};
    use crate::config::Config;
    use crate::manager::{AcquireResult, RefreshResult};
    use crate::store::MemoryStore;

    #[test]
    fn authorized_break_reassigns_the_lock() {
        let store = MemoryStore::new();
        let manager = LockManager::new(&store, Config::default());
        let service = BreakLockService::new(&manager, &AllowAll, &AnyResource);

        manager.try_acquire("page-1", "alice").unwrap();

        let outcome = service.break_lock("page-1", "carol").unwrap();
        assert_eq!(
            outcome,
            BreakOutcome::Broken {
                new_owner: "carol".to_string()
            }
        );

        // The new owner can immediately resume editing.
        assert_eq!(
            manager.try_acquire("page-1", "carol").unwrap(),
            AcquireResult::Acquired
        );
        // The ousted session learns about the takeover on its next beat.
        match manager.refresh_or_report("page-1", "alice").unwrap() {
            RefreshResult::TakenOver(holder) => {
                assert_eq!(holder.owner, "carol");
                assert!(holder.age().num_seconds() < 2);
            }
            other => panic!("expected TakenOver, got {:?}", other),
        }
    }

    #[test]
    fn unauthorized_break_is_forbidden_and_leaves_state_alone() {
        let store = MemoryStore::new();
        let config = Config {
            break_users: vec!["carol".to_string()],
            ..Config::default()
        };
        let authorizer = ConfigAuthorizer::new(&config);
        let manager = LockManager::new(&store, config);
        let service = BreakLockService::new(&manager, &authorizer, &AnyResource);

        manager.try_acquire("page-1", "alice").unwrap();

        let outcome = service.break_lock("page-1", "bob").unwrap();
        assert_eq!(outcome, BreakOutcome::Forbidden);
        assert_eq!(store.get("page-1").unwrap().unwrap().owner, "alice");
    }

    #[test]
    fn break_of_unlocked_resource_still_assigns_ownership() {
        let store = MemoryStore::new();
        let manager = LockManager::new(&store, Config::default());
        let service = BreakLockService::new(&manager, &AllowAll, &AnyResource);

        let outcome = service.break_lock("page-1", "carol").unwrap();
        assert!(matches!(outcome, BreakOutcome::Broken { .. }));
        assert_eq!(store.get("page-1").unwrap().unwrap().owner, "carol");
    }

    #[test]
    fn unknown_resource_is_not_found() {
        struct NoResources;
        impl ResourceDirectory for NoResources {
            fn exists(&self, _resource_id: &str) -> bool {
                false
            }
        }

        let store = MemoryStore::new();
        let manager = LockManager::new(&store, Config::default());
        let service = BreakLockService::new(&manager, &AllowAll, &NoResources);

        let outcome = service.break_lock("page-404", "carol").unwrap();
        assert_eq!(outcome, BreakOutcome::NotFound);
        assert!(store.get("page-404").unwrap().is_none());
    }
}
