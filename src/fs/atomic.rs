//! Atomic filesystem operations for rsetup.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a uniquely named temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//!
//! Each write gets its own temporary file, so concurrent writers of one
//! target never share one; the last rename wins. Source and destination
//! share a directory, so they share a volume. On crash, a temporary file
//! named `.{filename}.XXXXXX.tmp` may remain.

use crate::error::{Result, RsetupError};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Atomically write bytes to a file.
///
/// The target is either left untouched or fully replaced, never truncated.
/// Missing parent directories are created.
///
/// # Example
///
/// ```no_run
/// use rsetup::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("rsetup.json"), b"{}")?;
/// # Ok::<(), rsetup::error::RsetupError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| RsetupError::io("failed to create directory", parent, e))?;
    }

    let temp = create_temp_file(path)?;
    let temp = write_and_sync(temp, content)?;
    replace(temp, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Fresh sibling temporary file: `.{filename}.XXXXXX.tmp`.
fn create_temp_file(target: &Path) -> Result<NamedTempFile> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            RsetupError::InvalidArgument(format!("invalid file path '{}'", target.display()))
        })?;

    Builder::new()
        .prefix(&format!(".{}.", filename))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| RsetupError::io("failed to create temporary file", parent, e))
}

fn write_and_sync(mut temp: NamedTempFile, content: &[u8]) -> Result<NamedTempFile> {
    let written = temp.write_all(content).and_then(|()| temp.as_file().sync_all());
    match written {
        Ok(()) => Ok(temp),
        // Dropping `temp` removes the file.
        Err(e) => Err(RsetupError::io("failed to write temporary file", temp.path(), e)),
    }
}

fn replace(temp: NamedTempFile, target: &Path) -> Result<()> {
    // On failure the returned file is dropped, which removes it.
    temp.persist(target)
        .map_err(|e| RsetupError::io("failed to replace", target, e.error))?;

    sync_parent(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}
