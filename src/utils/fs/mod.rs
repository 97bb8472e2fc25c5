//! File system helpers used by the generator.
//!
//! - [`find_declaration_files`] walks a project for Gradle build scripts
//! - [`safe_write`] replaces a file atomically
//! - [`ensure_dir`] creates a directory tree

pub mod atomic;
pub mod dirs;
pub mod discovery;

pub use atomic::{atomic_write, safe_write};
pub use dirs::ensure_dir;
pub use discovery::{DiscoveryOptions, find_declaration_files, is_declaration_file};
