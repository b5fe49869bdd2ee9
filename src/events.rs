//! Audit log for lock lifecycle transitions.
//!
//! Append-only NDJSON (one JSON object per line), written by the CLI for
//! every lifecycle outcome so contested takeovers can be reconstructed
//! after the fact. Each event carries:
//! - `ts`: RFC3339 timestamp
//! - `action`: the lifecycle outcome (acquired, denied, lock_broken, ...)
//! - `actor`: the user id the command ran as
//! - `resource`: the resource id involved
//! - `details`: freeform object with outcome-specific fields
//!
//! Audit writes are best-effort from the CLI: a failing log must never fail
//! the lock operation it describes.

use crate::error::{LatchError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Lock lifecycle outcomes recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Lock acquired (fresh, expired-superseded, or self re-acquire).
    Acquired,
    /// Entry denied; another user holds a live lock.
    Denied,
    /// Lock refreshed by a heartbeat.
    Refreshed,
    /// Heartbeat found the lock taken over by another user.
    TakenOver,
    /// Lock forcibly broken and reassigned.
    LockBroken,
    /// Break attempt refused for lack of privilege.
    BreakRefused,
}

/// One audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the outcome was observed.
    pub ts: DateTime<Utc>,

    /// The lifecycle outcome.
    pub action: EventAction,

    /// User id the operation ran as.
    pub actor: String,

    /// Resource the operation targeted.
    pub resource: String,

    /// Outcome-specific details (current holder, lock age, ...).
    pub details: Value,
}

impl Event {
    /// Create an event timestamped now.
    pub fn new(action: EventAction, actor: &str, resource: &str) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor.to_string(),
            resource: resource.to_string(),
            details: Value::Null,
        }
    }

    /// Attach outcome-specific details.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

/// Append an event to the NDJSON log, creating the file and parents as
/// needed.
pub fn append_event<P: AsRef<Path>>(events_file: P, event: &Event) -> Result<()> {
    let path = events_file.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            LatchError::UserError(format!(
                "failed to create events directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let line = serde_json::to_string(event)
        .map_err(|e| LatchError::UserError(format!("failed to serialize event: {}", e)))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LatchError::UserError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line)
        .map_err(|e| LatchError::UserError(format!("failed to append event: {}", e)))?;

    Ok(())
}

/// Read all events from the log, oldest first. Missing file means no events.
pub fn read_events<P: AsRef<Path>>(events_file: P) -> Result<Vec<Event>> {
    let path = events_file.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(LatchError::UserError(format!(
                "failed to read events file '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let mut events = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|e| LatchError::UserError(format!("failed to parse event line: {}", e)))?;
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn append_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");

        let event = Event::new(EventAction::Acquired, "alice", "page-1")
            .with_details(json!({"reacquire": false}));
        append_event(&path, &event).unwrap();

        let events = read_events(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Acquired);
        assert_eq!(events[0].actor, "alice");
        assert_eq!(events[0].resource, "page-1");
        assert_eq!(events[0].details["reacquire"], json!(false));
    }

    #[test]
    fn events_append_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");

        append_event(&path, &Event::new(EventAction::Acquired, "alice", "page-1")).unwrap();
        append_event(&path, &Event::new(EventAction::Denied, "bob", "page-1")).unwrap();
        append_event(&path, &Event::new(EventAction::LockBroken, "carol", "page-1")).unwrap();

        let actions: Vec<EventAction> = read_events(&path)
            .unwrap()
            .iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                EventAction::Acquired,
                EventAction::Denied,
                EventAction::LockBroken
            ]
        );
    }

    #[test]
    fn missing_log_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let events = read_events(temp_dir.path().join("events.ndjson")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn append_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("events.ndjson");

        append_event(&path, &Event::new(EventAction::Refreshed, "alice", "page-1")).unwrap();

        assert_eq!(read_events(&path).unwrap().len(), 1);
    }

    #[test]
    fn actions_serialize_as_snake_case() {
        let event = Event::new(EventAction::TakenOver, "alice", "page-1");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"taken_over\""));
    }
}
