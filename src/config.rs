//! Configuration model for latch.
//!
//! This module defines the Config struct that represents `config.yaml` in the
//! state directory. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for optional fields, and validation
//! of config values.
//!
//! The config is loaded once and passed into the lock manager at
//! construction; lifecycle methods never read ambient settings.

use crate::error::{LatchError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum configurable lock duration in minutes.
pub const MIN_LOCK_DURATION_MINUTES: u32 = 1;

/// Maximum configurable lock duration in minutes (24 hours).
pub const MAX_LOCK_DURATION_MINUTES: u32 = 1440;

/// Configuration for the lock lifecycle.
///
/// Immutable for the process lifetime once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long a resource stays locked without a refresh, in minutes.
    /// Valid range: 1–1440.
    pub lock_duration_minutes: u32,

    /// Cadence at which active edit sessions refresh their lock, in seconds.
    /// Must stay well below the lock duration so a few missed beats never
    /// cause a false takeover.
    pub heartbeat_interval_secs: u32,

    /// Users allowed to forcibly break another user's lock.
    pub break_users: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_duration_minutes: default_lock_duration_minutes(),
            heartbeat_interval_secs: default_heartbeat_interval_secs(),
            break_users: Vec::new(),
        }
    }
}

fn default_lock_duration_minutes() -> u32 {
    20
}

fn default_heartbeat_interval_secs() -> u32 {
    15
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LatchError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LatchError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LatchError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - `lock_duration_minutes` within 1–1440
    /// - `heartbeat_interval_secs` positive and strictly below the lock
    ///   duration, so a single missed beat cannot expire a live session
    pub fn validate(&self) -> Result<()> {
        if self.lock_duration_minutes < MIN_LOCK_DURATION_MINUTES
            || self.lock_duration_minutes > MAX_LOCK_DURATION_MINUTES
        {
            return Err(LatchError::UserError(format!(
                "config validation failed: lock_duration_minutes must be between {} and {} (got {})",
                MIN_LOCK_DURATION_MINUTES, MAX_LOCK_DURATION_MINUTES, self.lock_duration_minutes
            )));
        }

        if self.heartbeat_interval_secs == 0 {
            return Err(LatchError::UserError(
                "config validation failed: heartbeat_interval_secs must be greater than 0"
                    .to_string(),
            ));
        }

        if u64::from(self.heartbeat_interval_secs) >= u64::from(self.lock_duration_minutes) * 60 {
            return Err(LatchError::UserError(format!(
                "config validation failed: heartbeat_interval_secs ({}) must be below the lock duration ({}s)",
                self.heartbeat_interval_secs,
                u64::from(self.lock_duration_minutes) * 60
            )));
        }

        Ok(())
    }

    /// Lock duration as a chrono duration.
    pub fn lock_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.lock_duration_minutes))
    }

    /// Heartbeat interval as a chrono duration.
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::seconds(i64::from(self.heartbeat_interval_secs))
    }
}
