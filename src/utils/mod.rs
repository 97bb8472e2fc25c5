//! Shared helpers.
//!
//! - [`fs`] - build-script discovery, atomic writes and directory creation

pub mod fs;

pub use fs::{atomic_write, ensure_dir, safe_write};
