//! External collaborator boundaries: authorization and resource validity.
//!
//! The lock manager never authorizes anything itself. Break-lock privilege
//! and resource existence are supplied by the hosting system; these traits
//! are the seams it plugs into. The CLI wires them from config
//! (`break_users`) and a permissive resource directory.

use crate::config::Config;

/// Decides whether a user may forcibly break another user's lock.
pub trait BreakAuthorizer {
    fn can_break_lock(&self, user_id: &str) -> bool;
}

/// Authorizer backed by the `break_users` config list.
#[derive(Debug, Clone)]
pub struct ConfigAuthorizer {
    break_users: Vec<String>,
}

impl ConfigAuthorizer {
    pub fn new(config: &Config) -> Self {
        Self {
            break_users: config.break_users.clone(),
        }
    }
}

impl BreakAuthorizer for ConfigAuthorizer {
    fn can_break_lock(&self, user_id: &str) -> bool {
        self.break_users.iter().any(|u| u == user_id)
    }
}

/// Authorizer that grants everyone break-lock privilege.
///
/// For tests and embedders that perform their own privilege checks upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl BreakAuthorizer for AllowAll {
    fn can_break_lock(&self, _user_id: &str) -> bool {
        true
    }
}

/// Answers whether a resource id names an existing resource.
///
/// Lock state is deliberately not consulted here: an absent lock is not a
/// missing resource.
pub trait ResourceDirectory {
    fn exists(&self, resource_id: &str) -> bool;
}

/// Directory that treats every well-formed id as existing.
///
/// The CLI has no resource catalog of its own; hosting systems substitute
/// their content store here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyResource;

impl ResourceDirectory for AnyResource {
    fn exists(&self, _resource_id: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_authorizer_allows_listed_users() {
        let config = Config {
            break_users: vec!["alice".to_string(), "carol".to_string()],
            ..Config::default()
        };
        let auth = ConfigAuthorizer::new(&config);

        assert!(auth.can_break_lock("alice"));
        assert!(auth.can_break_lock("carol"));
        assert!(!auth.can_break_lock("bob"));
    }

    #[test]
    fn empty_break_list_allows_nobody() {
        let auth = ConfigAuthorizer::new(&Config::default());
        assert!(!auth.can_break_lock("alice"));
    }

    #[test]
    fn allow_all_allows_anyone() {
        assert!(AllowAll.can_break_lock("anyone"));
    }

    #[test]
    fn any_resource_exists() {
        assert!(AnyResource.exists("page-1"));
    }
}
