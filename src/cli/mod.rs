//! CLI argument parsing for latch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Latch: cooperative editing locks for shared content resources.
///
/// One user edits a resource at a time: acquiring the lock denies other
/// editors until it expires, is refreshed by heartbeats, or is broken by an
/// authorized user. Lock state lives in the state directory (`$LATCH_DIR`
/// or `.latch/`).
#[derive(Parser, Debug)]
#[command(name = "latch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for latch.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Begin an edit session: acquire the lock for a resource.
    ///
    /// Exits with the contention code when another user holds a live lock,
    /// printing the holder and lock age.
    Acquire(AcquireArgs),

    /// Send heartbeats to keep an active edit session's lock alive.
    ///
    /// One beat by default; `--watch` beats at the configured interval until
    /// interrupted or the lock is taken over.
    Heartbeat(HeartbeatArgs),

    /// Show the lock state of a resource without changing it.
    Status(StatusArgs),

    /// Forcibly break a lock and take ownership (requires privilege).
    Break(BreakArgs),

    /// List all lock records with owner, age, and liveness.
    List,
}

/// Arguments for the `acquire` command.
#[derive(Parser, Debug)]
pub struct AcquireArgs {
    /// Resource to lock (e.g. page-7).
    pub resource: String,

    /// User id to act as (default: $LATCH_USER, then user@host).
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for the `heartbeat` command.
#[derive(Parser, Debug)]
pub struct HeartbeatArgs {
    /// Resource whose lock to refresh.
    pub resource: String,

    /// User id to act as (default: $LATCH_USER, then user@host).
    #[arg(long)]
    pub user: Option<String>,

    /// Keep beating at the configured interval until interrupted.
    #[arg(long)]
    pub watch: bool,

    /// Number of beats to send before exiting (with --watch).
    #[arg(long)]
    pub count: Option<u32>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Resource to inspect.
    pub resource: String,

    /// User id to report ownership relative to.
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for the `break` command.
#[derive(Parser, Debug)]
pub struct BreakArgs {
    /// Resource whose lock to break.
    pub resource: String,

    /// User id to act as; becomes the new owner on success.
    #[arg(long)]
    pub user: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_acquire() {
        let cli = Cli::try_parse_from(["latch", "acquire", "page-7"]).unwrap();
        if let Command::Acquire(args) = cli.command {
            assert_eq!(args.resource, "page-7");
            assert_eq!(args.user, None);
        } else {
            panic!("Expected Acquire command");
        }
    }

    #[test]
    fn parse_acquire_with_user() {
        let cli = Cli::try_parse_from(["latch", "acquire", "page-7", "--user", "alice"]).unwrap();
        if let Command::Acquire(args) = cli.command {
            assert_eq!(args.user, Some("alice".to_string()));
        } else {
            panic!("Expected Acquire command");
        }
    }

    #[test]
    fn parse_heartbeat_single() {
        let cli = Cli::try_parse_from(["latch", "heartbeat", "page-7"]).unwrap();
        if let Command::Heartbeat(args) = cli.command {
            assert_eq!(args.resource, "page-7");
            assert!(!args.watch);
            assert_eq!(args.count, None);
        } else {
            panic!("Expected Heartbeat command");
        }
    }

    #[test]
    fn parse_heartbeat_watch_with_count() {
        let cli =
            Cli::try_parse_from(["latch", "heartbeat", "page-7", "--watch", "--count", "3"])
                .unwrap();
        if let Command::Heartbeat(args) = cli.command {
            assert!(args.watch);
            assert_eq!(args.count, Some(3));
        } else {
            panic!("Expected Heartbeat command");
        }
    }

    #[test]
    fn parse_status() {
        let cli = Cli::try_parse_from(["latch", "status", "page-7"]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.resource, "page-7");
        } else {
            panic!("Expected Status command");
        }
    }

    #[test]
    fn parse_break() {
        let cli = Cli::try_parse_from(["latch", "break", "page-7", "--user", "carol"]).unwrap();
        if let Command::Break(args) = cli.command {
            assert_eq!(args.resource, "page-7");
            assert_eq!(args.user, Some("carol".to_string()));
        } else {
            panic!("Expected Break command");
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["latch", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }
}
