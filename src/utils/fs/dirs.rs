//! Directory creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `path` and any missing parents.
///
/// Succeeds when the directory already exists and fails when `path` exists but
/// is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}
