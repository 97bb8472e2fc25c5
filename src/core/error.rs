//! Error handling for vcatalog
//!
//! This module provides the typed errors raised while generating a version catalog and
//! the user-facing presentation of those errors. The system follows two principles:
//! 1. **Strongly-typed errors** ([`CatalogError`]) at the operation sites
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Configuration**: [`CatalogError::InvalidArguments`], [`CatalogError::ConfigError`]
//! - **Project recognition**: [`CatalogError::NotAGradleProject`]
//! - **Catalog decoding**: [`CatalogError::CatalogParseError`],
//!   [`CatalogError::UnsupportedCatalogSection`]
//! - **File system**: [`CatalogError::FileSystemError`], [`CatalogError::IoError`]
//!
//! Extraction itself never fails: text that matches no pattern is simply skipped, so
//! there is no error variant for "malformed build script".
//!
//! # Examples
//!
//! ```rust,no_run
//! use vcatalog_cli::core::{CatalogError, user_friendly_error};
//!
//! let error = CatalogError::NotAGradleProject {
//!     path: "/tmp/project/gradle".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use crate::core::file_error::FileOperationError;
use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for catalog generation.
///
/// Every variant maps to one failure class the CLI reports. Fatal I/O problems
/// abort the run before the catalog file is rewritten, so no variant ever
/// implies a partially written catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Wrong number or shape of command-line arguments
    ///
    /// Raised before any filesystem access takes place.
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// What was wrong with the invocation
        message: String,
    },

    /// The root does not contain a `gradle` directory
    #[error("not a Gradle project seemingly: {path}")]
    NotAGradleProject {
        /// The `gradle` directory that was expected to exist
        path: String,
    },

    /// Configuration file could not be loaded
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// The persisted catalog is not valid TOML
    #[error("Invalid version catalog syntax in {file}")]
    CatalogParseError {
        /// Path of the catalog file
        file: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The persisted catalog contains something other than the four catalog sections
    #[error("Unsupported entry '{section}' in version catalog {file}")]
    UnsupportedCatalogSection {
        /// Path of the catalog file
        file: String,
        /// Offending top-level key
        section: String,
    },

    /// A file system operation failed
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The operation that was attempted
        operation: String,
        /// The path involved
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for CatalogError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidArguments {
                message,
            } => Self::InvalidArguments {
                message: message.clone(),
            },
            Self::NotAGradleProject {
                path,
            } => Self::NotAGradleProject {
                path: path.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::CatalogParseError {
                file,
                reason,
            } => Self::CatalogParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::UnsupportedCatalogSection {
                file,
                section,
            } => Self::UnsupportedCatalogSection {
                file: file.clone(),
                section: section.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            // Wrapped library errors are not Clone, keep their message only
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`CatalogError`] and adds an optional explanation and a
/// suggestion for resolution. `main` prints it with [`ErrorContext::display`] and
/// exits non-zero.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CatalogError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CatalogError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error (printed in green).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error (printed in yellow).
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises, in order:
/// - [`CatalogError`] variants, with tailored suggestions
/// - [`FileOperationError`], rendered with its operation and path
/// - [`std::io::Error`] kinds that have an obvious remedy
/// - anything else, with the full `anyhow` cause chain appended
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(catalog_error) = error.downcast_ref::<CatalogError>() {
        return create_error_context(catalog_error.clone());
    }

    if let Some(file_error) = error.downcast_ref::<FileOperationError>() {
        return ErrorContext::new(CatalogError::FileSystemError {
            operation: file_error.operation.to_string(),
            path: file_error.file_path.display().to_string(),
        })
        .with_details(file_error.user_message());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(CatalogError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the ownership and permissions of the project files")
                .with_details("vcatalog needs to read build scripts and write gradle/libs.versions.toml");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(CatalogError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CatalogError::Other {
        message,
    })
}

/// Map each [`CatalogError`] variant to an [`ErrorContext`] with suggestions.
fn create_error_context(error: CatalogError) -> ErrorContext {
    match &error {
        CatalogError::InvalidArguments { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'vcatalog generate [ROOT]' with at most one project directory"),

        CatalogError::NotAGradleProject { path } => {
            let suggestion = format!(
                "Run the command from the project root, or pass it explicitly. Expected directory: {path}"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("A Gradle project root is recognised by its 'gradle' directory (wrapper and catalog live there)")
        }

        CatalogError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the configuration file passed with --config or ~/.vcatalog/config.toml")
            .with_details("Supported keys are 'max-depth' (integer) and 'exclude-dirs' (list of directory names)"),

        CatalogError::CatalogParseError { file, reason } => {
            let suggestion = format!(
                "Fix the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets"
            );
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        CatalogError::UnsupportedCatalogSection { .. } => ErrorContext::new(error)
            .with_suggestion("Move the entry under [versions], [libraries], [plugins] or [bundles]")
            .with_details("The catalog is rewritten on every run; unknown entries are refused rather than dropped"),

        CatalogError::FileSystemError { .. } | CatalogError::IoError(_) | CatalogError::Other { .. } => {
            ErrorContext::new(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CatalogError::NotAGradleProject {
            path: "/work/app/gradle".to_string(),
        };
        assert_eq!(error.to_string(), "not a Gradle project seemingly: /work/app/gradle");

        let error = CatalogError::InvalidArguments {
            message: "requires at most one arg, received 2".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid arguments: requires at most one arg, received 2");

        let error = CatalogError::UnsupportedCatalogSection {
            file: "libs.versions.toml".to_string(),
            section: "metadata".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported entry 'metadata' in version catalog libs.versions.toml"
        );
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(CatalogError::Other {
            message: "boom".to_string(),
        })
        .with_suggestion("Try again")
        .with_details("Something broke");

        let display = format!("{ctx}");
        assert!(display.contains("boom"));
        assert!(display.contains("Details: Something broke"));
        assert!(display.contains("Suggestion: Try again"));
    }

    #[test]
    fn test_user_friendly_error_not_a_project() {
        let error = CatalogError::NotAGradleProject {
            path: "/nowhere/gradle".to_string(),
        };
        let ctx = user_friendly_error(anyhow::Error::from(error));
        match &ctx.error {
            CatalogError::NotAGradleProject {
                path,
            } => assert_eq!(path, "/nowhere/gradle"),
            other => panic!("Expected NotAGradleProject, got {other:?}"),
        }
        assert!(ctx.suggestion.unwrap().contains("/nowhere/gradle"));
        assert!(ctx.details.is_some());
    }

    #[test]
    fn test_user_friendly_error_through_context() {
        let error = anyhow::Error::from(CatalogError::CatalogParseError {
            file: "gradle/libs.versions.toml".to_string(),
            reason: "expected `=`".to_string(),
        })
        .context("loading version catalog");

        let ctx = user_friendly_error(error);
        assert!(matches!(ctx.error, CatalogError::CatalogParseError { .. }));
        assert_eq!(ctx.details.as_deref(), Some("expected `=`"));
    }

    #[test]
    fn test_user_friendly_error_permission_denied() {
        use std::io::{Error, ErrorKind};

        let io_error = Error::new(ErrorKind::PermissionDenied, "access denied");
        let ctx = user_friendly_error(anyhow::Error::from(io_error));
        assert!(matches!(ctx.error, CatalogError::FileSystemError { .. }));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_generic_chain() {
        let error = anyhow::anyhow!("root cause").context("outer operation");
        let ctx = user_friendly_error(error);
        let message = ctx.error.to_string();
        assert!(message.starts_with("outer operation"));
        assert!(message.contains("Caused by:"));
        assert!(message.contains("root cause"));
    }

    #[test]
    fn test_clone_downgrades_io_error() {
        let error = CatalogError::IoError(std::io::Error::other("disk gone"));
        let cloned = error.clone();
        assert!(matches!(cloned, CatalogError::Other { .. }));
        assert!(cloned.to_string().contains("disk gone"));
    }
}
