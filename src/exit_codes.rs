//! Exit code constants for the latch CLI.
//!
//! - 0: Success
//! - 1: User error (bad environment, unreadable config)
//! - 2: Invalid input (malformed resource or user id)
//! - 3: Unauthorized (break-lock privilege missing)
//! - 4: Contention (resource locked by another user)
//! - 5: Store failure (lock store unavailable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad environment, missing state directory, unreadable config.
pub const USER_ERROR: i32 = 1;

/// Invalid input: malformed resource id or user id, rejected before the store.
pub const INVALID_INPUT: i32 = 2;

/// Unauthorized: caller lacks the break-lock privilege.
pub const UNAUTHORIZED: i32 = 3;

/// Contention: the resource is locked by another user (expected outcome, not an error).
pub const CONTENTION: i32 = 4;

/// Store failure: the underlying lock store could not be read or written.
pub const STORE_FAILURE: i32 = 5;
