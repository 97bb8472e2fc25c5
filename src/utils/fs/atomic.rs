//! Atomic file replacement using a temp file in the target directory.

use crate::core::{FileOperation, FileResultExt};
use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with the UTF-8 `content`.
///
/// See [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically replace `path` with `content`.
///
/// The bytes are written to a temporary file next to `path`, synced, and then
/// renamed over the target, so readers see either the old or the new file and
/// never a partial write. Missing parent directories are created. If any step
/// fails the temporary file is removed and the target is left untouched.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temp file in: {}\n\nCheck file permissions and that directory exists",
            parent.display()
        )
    })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().context("Failed to sync file to disk")?;

    temp.persist(path).map_err(|e| e.error).with_file_context(
        FileOperation::Write,
        path,
        "renaming the temp file over it",
    )?;

    Ok(())
}
