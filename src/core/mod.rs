//! Core types for vcatalog: error handling and file operation context.
//!
//! - [`CatalogError`] - Enumerated failure modes of a generation run
//! - [`ErrorContext`] - User-facing wrapper with details and suggestions
//! - [`user_friendly_error`] - Convert any `anyhow::Error` for CLI display
//! - [`FileOperationError`] / [`FileResultExt`] - IO failures tagged with path and purpose

pub mod error;
pub mod file_error;

pub use error::{CatalogError, ErrorContext, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
