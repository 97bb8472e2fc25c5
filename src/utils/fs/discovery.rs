//! Discovery of Gradle build scripts under a project root.

use crate::constants::{DECLARATION_SUFFIXES, DEFAULT_MAX_DEPTH, SETTINGS_FILE_STEM};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Traversal bounds for [`find_declaration_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Deepest directory that is still read; the root itself is depth 0
    pub max_depth: usize,
    /// Directory names skipped at any depth
    pub exclude_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_dirs: Vec::new(),
        }
    }
}

/// Whether `file_name` carries one of the build-script suffixes.
#[must_use]
pub fn is_declaration_file(file_name: &str) -> bool {
    DECLARATION_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix))
}

fn is_settings_file(file_name: &str) -> bool {
    DECLARATION_SUFFIXES.iter().any(|suffix| {
        file_name.strip_suffix(suffix).is_some_and(|stem| stem == SETTINGS_FILE_STEM)
    })
}

/// Collect every build script under `root`.
///
/// Files directly inside `root` sit at depth 0; a directory deeper than
/// `options.max_depth` is never read. The settings script at the root is
/// skipped, while settings scripts of nested builds are kept. Directories that
/// cannot be read are logged and skipped; traversal carries on with their
/// siblings. Entries are visited in file-name order, so the result is stable
/// across runs.
///
/// Symlinked directories are not followed. A symlink named like a build
/// script is kept when it points at a regular file.
#[must_use]
pub fn find_declaration_files(root: &Path, options: &DiscoveryOptions) -> Vec<PathBuf> {
    let excluded = |entry: &DirEntry| {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && options.exclude_dirs.iter().any(|name| entry.file_name() == name.as_str())
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(options.max_depth + 1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !excluded(entry))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path under {}: {}", root.display(), e);
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !is_declaration_file(&file_name) {
            continue;
        }
        if entry.depth() == 1 && is_settings_file(&file_name) {
            debug!("Skipping root settings script {}", entry.path().display());
            continue;
        }

        debug!("Found build script {}", entry.path().display());
        files.push(entry.into_path());
    }

    files
}
