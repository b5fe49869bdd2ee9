//! Error types for latch.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Contention (a resource held by another user) is deliberately *not* an error
//! variant: it is an expected outcome carried in the return values of the
//! lock manager (`AcquireResult`, `RefreshResult`) so callers can never
//! silently suppress it with `?`.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for latch operations.
///
/// Each variant maps to a specific exit code for the CLI.
#[derive(Error, Debug)]
pub enum LatchError {
    /// Bad environment or invalid CLI state (missing state dir, unreadable config).
    #[error("{0}")]
    UserError(String),

    /// Malformed resource id or user id, rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Caller lacks the break-lock privilege.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The underlying lock store failed; transient, caller may retry on the
    /// next heartbeat tick but must not assume ownership until a successful
    /// response is observed.
    #[error("lock store failure: {0}")]
    Store(String),
}

impl LatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LatchError::UserError(_) => exit_codes::USER_ERROR,
            LatchError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            LatchError::Unauthorized(_) => exit_codes::UNAUTHORIZED,
            LatchError::Store(_) => exit_codes::STORE_FAILURE,
        }
    }
}

/// Result type alias for latch operations.
pub type Result<T> = std::result::Result<T, LatchError>;
