//! Test utilities for vcatalog
//!
//! Helpers shared by unit tests and the integration test suite:
//! - [`init_test_logging`] installs a test-writer tracing subscriber once
//! - [`GradleProjectFixture`] lays out a throwaway Gradle project
//!
//! # Example
//!
//! ```rust,no_run
//! use vcatalog_cli::test_utils::GradleProjectFixture;
//!
//! let project = GradleProjectFixture::new();
//! project.write("app/build.gradle.kts", r#"implementation("foo:foo:1.0")"#);
//! // ... run the generator against project.path() ...
//! assert!(project.read_catalog().contains("foo-foo"));
//! ```

use crate::constants::{CATALOG_FILE_NAME, GRADLE_DIR};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A Gradle project in a temporary directory.
///
/// Created with a `gradle/wrapper` directory so it is recognised as a project
/// root. The directory is removed when the fixture is dropped.
pub struct GradleProjectFixture {
    temp_dir: TempDir,
}

impl GradleProjectFixture {
    /// New project containing only `gradle/wrapper/`.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be set up.
    #[must_use]
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture.write("gradle/wrapper/gradle-wrapper.properties", "distributionUrl=gradle-8.13-bin.zip\n");
        fixture
    }

    /// New empty directory that is not a Gradle project.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Project root.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics on any I/O failure.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// `gradle/libs.versions.toml` of this project.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.path().join(GRADLE_DIR).join(CATALOG_FILE_NAME)
    }

    /// Current catalog text.
    ///
    /// # Panics
    ///
    /// Panics if the catalog does not exist.
    #[must_use]
    pub fn read_catalog(&self) -> String {
        std::fs::read_to_string(self.catalog_path()).expect("Failed to read version catalog")
    }
}

impl Default for GradleProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
