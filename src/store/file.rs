//! File-backed lock store.
//!
//! One JSON file per resource under a locks directory
//! (`{resource_id}.lock.json`). Writes go through the atomic-write helper so
//! a reader never sees a torn record. Resource ids become file names, so the
//! store rejects ids containing anything outside a safe character set before
//! touching the filesystem.

use super::LockStore;
use crate::error::{LatchError, Result};
use crate::fs::atomic_write;
use crate::record::LockRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for persisted lock records.
const LOCK_FILE_SUFFIX: &str = ".lock.json";

/// Lock store keeping one JSON file per resource.
#[derive(Debug, Clone)]
pub struct FileStore {
    locks_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given locks directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new<P: AsRef<Path>>(locks_dir: P) -> Self {
        Self {
            locks_dir: locks_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the lock file for a resource.
    pub fn lock_path(&self, resource_id: &str) -> Result<PathBuf> {
        ensure_safe_id(resource_id)?;
        Ok(self
            .locks_dir
            .join(format!("{}{}", resource_id, LOCK_FILE_SUFFIX)))
    }

    /// List all persisted records as `(resource_id, record)` pairs, sorted
    /// by resource id. Unparseable files are skipped.
    pub fn list(&self) -> Result<Vec<(String, LockRecord)>> {
        let mut records = Vec::new();

        if !self.locks_dir.exists() {
            return Ok(records);
        }

        let entries = fs::read_dir(&self.locks_dir).map_err(|e| {
            LatchError::Store(format!(
                "failed to read locks directory '{}': {}",
                self.locks_dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| LatchError::Store(format!("failed to read directory entry: {}", e)))?;
            let path = entry.path();

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(resource_id) = name.strip_suffix(LOCK_FILE_SUFFIX) else {
                continue;
            };

            // Skip temp files and anything that fails to parse.
            if name.starts_with('.') {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(record) = serde_json::from_str::<LockRecord>(&content) else {
                continue;
            };

            records.push((resource_id.to_string(), record));
        }

        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }
}

impl LockStore for FileStore {
    fn get(&self, resource_id: &str) -> Result<Option<LockRecord>> {
        let path = self.lock_path(resource_id)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LatchError::Store(format!(
                    "failed to read lock file '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        let record = serde_json::from_str(&content).map_err(|e| {
            LatchError::Store(format!(
                "failed to parse lock file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(record))
    }

    fn put(&self, resource_id: &str, record: &LockRecord) -> Result<()> {
        let path = self.lock_path(resource_id)?;
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| LatchError::Store(format!("failed to serialize lock record: {}", e)))?;

        atomic_write(&path, json.as_bytes())
    }

    fn delete(&self, resource_id: &str) -> Result<()> {
        let path = self.lock_path(resource_id)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LatchError::Store(format!(
                "failed to delete lock file '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Reject resource ids that are unsafe as file names.
///
/// Allowed: ASCII alphanumerics, `-`, `_`, `.`; a leading dot is refused so
/// lock files cannot collide with the atomic-write temp naming.
fn ensure_safe_id(resource_id: &str) -> Result<()> {
    if resource_id.is_empty() {
        return Err(LatchError::InvalidInput(
            "resource id must not be empty".to_string(),
        ));
    }

    if resource_id.starts_with('.') {
        return Err(LatchError::InvalidInput(format!(
            "resource id '{}' must not start with '.'",
            resource_id
        )));
    }

    if let Some(bad) = resource_id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(LatchError::InvalidInput(format!(
            "resource id '{}' contains unsupported character '{}'",
            resource_id, bad
        )));
    }

    Ok(())
}
