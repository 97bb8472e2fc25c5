//! Integration test suite for vcatalog
//!
//! End-to-end tests that run the `vcatalog` binary against temporary Gradle
//! projects and inspect the resulting `gradle/libs.versions.toml`.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: argument handling, discovery rules, extraction scenarios
//! - **merge**: re-runs against existing catalogs, idempotence, hand edits

use assert_cmd::Command;
use vcatalog_cli::test_utils::GradleProjectFixture;

mod generate;
mod merge;

/// `vcatalog` isolated from the caller's environment and user configuration.
fn vcatalog(project: &GradleProjectFixture) -> Command {
    let mut cmd = Command::cargo_bin("vcatalog").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("VCATALOG_MAX_DEPTH")
        .env_remove("VCATALOG_CONFIG")
        .env("HOME", project.path())
        .current_dir(project.path());
    cmd
}
