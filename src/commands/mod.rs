//! Command implementations for latch.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared environment each command runs in (state
//! directory, config, file store, acting user).
//!
//! Commands return the process exit code: contention is an expected outcome
//! reported through a distinct code, not an error.

mod acquire;
mod break_lock;
mod heartbeat;
mod list;
mod status;

use crate::cli::Command;
use crate::config::Config;
use crate::context::LockContext;
use crate::error::Result;
use crate::events::{Event, append_event};
use crate::record::default_owner_string;
use crate::store::FileStore;
use std::env;

/// Environment variable naming the acting user.
pub const USER_ENV: &str = "LATCH_USER";

/// Dispatch a command to its implementation, returning the exit code.
pub fn dispatch(command: Command) -> Result<i32> {
    let env = CommandEnv::resolve()?;

    match command {
        Command::Acquire(args) => acquire::cmd_acquire(&env, args),
        Command::Heartbeat(args) => heartbeat::cmd_heartbeat(&env, args),
        Command::Status(args) => status::cmd_status(&env, args),
        Command::Break(args) => break_lock::cmd_break(&env, args),
        Command::List => list::cmd_list(&env),
    }
}

/// Shared environment for command execution.
pub struct CommandEnv {
    pub ctx: LockContext,
    pub config: Config,
    pub store: FileStore,
}

impl CommandEnv {
    /// Resolve the state directory and load its config.
    fn resolve() -> Result<Self> {
        let ctx = LockContext::resolve()?;
        let config = ctx.load_config()?;
        let store = FileStore::new(&ctx.locks_dir);
        Ok(Self { ctx, config, store })
    }

    /// The user id to act as: `--user` flag, `$LATCH_USER`, then `user@host`.
    pub fn acting_user(&self, flag: &Option<String>) -> String {
        if let Some(user) = flag {
            return user.clone();
        }
        if let Ok(user) = env::var(USER_ENV)
            && !user.trim().is_empty()
        {
            return user;
        }
        default_owner_string()
    }

    /// Append an audit event; failures warn instead of failing the command.
    pub fn log_event(&self, event: &Event) {
        if let Err(e) = append_event(self.ctx.events_file(), event) {
            eprintln!("Warning: failed to append audit event: {}", e);
        }
    }
}
