//! Atomic file writes.
//!
//! Pattern: write to a temp file in the same directory, fsync it, then rename
//! over the target. On POSIX `rename()` atomically replaces the destination;
//! a reader therefore sees either the old record or the new one, never a
//! partial write. Source and target must be on the same filesystem. On crash
//! a `.{filename}.tmp` file may remain; it is overwritten by the next write.

use crate::error::{LatchError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            LatchError::Store(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LatchError::Store(format!(
            "failed to replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    // Sync the directory entry so the rename survives a crash.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temp file path in the same directory as the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LatchError::Store("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        LatchError::Store(format!(
            "failed to create temp file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        LatchError::Store(format!("failed to write temp file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        LatchError::Store(format!("failed to sync temp file: {}", e))
    })?;

    Ok(())
}
