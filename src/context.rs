//! State directory resolution for the latch CLI.
//!
//! The CLI keeps its lock files, config, and audit log in a single state
//! directory. Resolution order: the `LATCH_DIR` environment variable, then
//! `.latch/` under the current working directory. The library itself never
//! touches this module; embedders construct stores and configs directly.

use crate::config::Config;
use crate::error::{LatchError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the state directory location.
pub const STATE_DIR_ENV: &str = "LATCH_DIR";

/// Default state directory name under the working directory.
pub const DEFAULT_STATE_DIR: &str = ".latch";

/// Resolved paths for the latch state directory.
#[derive(Debug, Clone)]
pub struct LockContext {
    /// Absolute or caller-relative path of the state directory.
    pub state_dir: PathBuf,

    /// Directory holding one lock file per resource.
    pub locks_dir: PathBuf,
}

impl LockContext {
    /// Resolve the context from the environment and working directory.
    pub fn resolve() -> Result<Self> {
        if let Ok(dir) = env::var(STATE_DIR_ENV) {
            if dir.trim().is_empty() {
                return Err(LatchError::UserError(format!(
                    "{} is set but empty",
                    STATE_DIR_ENV
                )));
            }
            return Ok(Self::at(dir));
        }

        let cwd = env::current_dir().map_err(|e| {
            LatchError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::at(cwd.join(DEFAULT_STATE_DIR)))
    }

    /// Build a context rooted at a specific directory.
    pub fn at<P: AsRef<Path>>(state_dir: P) -> Self {
        let state_dir = state_dir.as_ref().to_path_buf();
        let locks_dir = state_dir.join("locks");
        Self {
            state_dir,
            locks_dir,
        }
    }

    /// Path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    /// Path of the append-only audit log.
    pub fn events_file(&self) -> PathBuf {
        self.state_dir.join("events.ndjson")
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Config::load(path)
    }
}
