//! Latch: cooperative editing locks for shared content resources.
//!
//! This is the main entry point for the `latch` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps outcomes to exit
//! codes: contention (a resource held by someone else) is an expected
//! outcome with its own code, not an error.

use latch::cli::Cli;
use latch::commands;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
