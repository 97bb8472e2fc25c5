//! vcatalog - Gradle version catalog inference
//!
//! Scans a Gradle project's build scripts (`*.gradle`, `*.gradle.kts`) for
//! dependency coordinates and plugin declarations and maintains
//! `gradle/libs.versions.toml` from them.
//!
//! # Architecture Overview
//!
//! A run is a straight pipeline:
//!
//! 1. [`utils::fs::find_declaration_files`] collects build scripts under the
//!    project root, bounded by depth and skipping the root settings script
//! 2. [`extract::Extractor`] pattern-matches each file for coordinates,
//!    plugin ids and literal variable bindings, resolving `$var` versions
//!    against the bindings of the same file
//! 3. [`catalog::merge`] adds the discovered entries to the persisted catalog,
//!    never replacing an alias that is already there
//! 4. [`catalog::render_catalog`] produces the canonical text, which is
//!    written atomically
//!
//! Versions that cannot be determined are written as `FIXME` and are meant to
//! be fixed by hand; hand edits survive every later run.
//!
//! # Catalog Format
//!
//! ```toml
//! [versions]
//! fooVersion = "1.0"
//!
//! [libraries]
//! foo-foo = { group = "foo", name = "foo", version.ref = "fooVersion" }
//! foo-sub-no-version = { group = "foo.sub", name = "No-Version", version = "FIXME" }
//!
//! [plugins]
//! com-android-application = { id = "com.android.application", version = "8.9.0" }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Update the catalog of the project in the current directory
//! vcatalog generate
//!
//! # Preview for another project, scanning deeper
//! vcatalog generate ../service --max-depth 4 --dry-run
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Catalog model, alias derivation, merge and TOML I/O
//! - [`cli`] - Command-line interface
//! - [`config`] - Optional user configuration (`~/.vcatalog/config.toml`)
//! - [`constants`] - File names and the recognised build-script vocabulary
//! - [`core`] - Error types and user-facing error formatting
//! - [`extract`] - Coordinate, plugin and variable extraction
//! - [`utils`] - Build-script discovery and atomic file writes

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod extract;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
