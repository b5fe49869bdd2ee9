//! Latch: cooperative editing locks for shared content resources.
//!
//! When one user begins editing a resource, other users are denied until the
//! lock expires, is refreshed by heartbeats, or is broken by an authorized
//! user. Locks are advisory, single-writer-per-resource claims for a trusted
//! user population; expiry is computed lazily on read, so abandoned sessions
//! never deadlock a resource and no background sweeper exists.
//!
//! The core pieces:
//! - [`manager::LockManager`]: the lock lifecycle state machine over a
//!   [`store::LockStore`]
//! - [`heartbeat::HeartbeatSession`]: the liveness cadence for an active
//!   edit session
//! - [`gateway::AccessGateway`]: the acquire-or-deny guard at edit entry
//! - [`breaker::BreakLockService`]: privileged forced takeover
//!
//! The hosting system supplies identity, break authorization
//! ([`auth::BreakAuthorizer`]), and resource existence
//! ([`auth::ResourceDirectory`]); the bundled CLI wires these from the
//! environment and a YAML config.

pub mod auth;
pub mod breaker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod gateway;
pub mod heartbeat;
pub mod manager;
pub mod record;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use breaker::{BreakLockService, BreakOutcome};
pub use config::Config;
pub use error::{LatchError, Result};
pub use gateway::{AccessGateway, EditAccess};
pub use heartbeat::HeartbeatSession;
pub use manager::{AcquireResult, LockHolder, LockManager, LockStatus, RefreshResult};
pub use record::LockRecord;
pub use store::{FileStore, LockStore, MemoryStore};
