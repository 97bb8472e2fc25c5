//! Pattern-based extraction of dependency coordinates and plugin ids from build scripts.
//!
//! This is best-effort text scanning, not a parser for the Gradle DSLs: anything
//! that does not match one of the patterns below is skipped, and extraction
//! never fails on unrecognised syntax.
//!
//! # Recognised declarations
//!
//! ```kotlin
//! val fooVersion = "1.0"                                   // variable binding
//! api("foo:foo:$fooVersion")                               // library, version.ref
//! implementation "foo.sub:No-Version"                      // library, version FIXME
//! classpath 'software.amazon.awssdk:s3'                    // library, version FIXME
//! id("com.android.application") version "8.9.0" apply false // plugin
//! ```
//!
//! Coordinates must follow one of the keywords in
//! [`CONFIGURATIONS`](crate::constants::CONFIGURATIONS) and be quoted. Versions
//! written as `$name` / `${name}` become references to a `[versions]` entry
//! named after the variable. Its value comes from the bindings of the same
//! file when there are any, otherwise from the first other scanned file that
//! binds the name (e.g. an `ext { }` block in `gradle/dependencies.gradle`),
//! and is `FIXME` when no scanned file binds it.

pub mod coordinate;
pub mod variables;

pub use coordinate::{Coordinate, PluginDeclaration, VARIABLE_REFERENCE_PATTERN, VersionToken};
pub use variables::{ASSIGNMENT_PATTERN, VariableBindings};

use crate::catalog::{Library, Plugin, VersionCatalog, VersionSpec};
use crate::constants::{CONFIGURATIONS, FIXME_VERSION};
use crate::core::{FileOperation, FileResultExt};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

/// Everything found in one build script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDeclarations {
    /// Coordinates in source order
    pub coordinates: Vec<Coordinate>,
    /// Plugin declarations in source order
    pub plugins: Vec<PluginDeclaration>,
    /// Literal bindings of the file
    pub bindings: VariableBindings,
}

impl FileDeclarations {
    /// Add this file's declarations to `catalog`, resolving variables against
    /// this file's bindings only.
    pub fn apply_to(&self, catalog: &mut VersionCatalog) {
        for coordinate in &self.coordinates {
            let version = self.resolve(&coordinate.version, catalog);
            catalog.add_library(Library {
                group: coordinate.group.clone(),
                name: coordinate.name.clone(),
                version,
            });
        }

        for plugin in &self.plugins {
            let version = self.resolve(&plugin.version, catalog);
            catalog.add_plugin(Plugin {
                id: plugin.id.clone(),
                version,
            });
        }
    }

    fn resolve(&self, token: &VersionToken, catalog: &mut VersionCatalog) -> VersionSpec {
        match token {
            VersionToken::Literal(value) => VersionSpec::Literal(value.clone()),
            VersionToken::Missing => VersionSpec::fixme(),
            VersionToken::Variable(name) => {
                let value = self.bindings.get(name).unwrap_or(FIXME_VERSION);
                catalog.add_version(name, value);
                VersionSpec::Ref(name.clone())
            }
        }
    }
}

/// Compiled declaration patterns.
///
/// Build one per run and reuse it for every file.
#[derive(Debug, Clone)]
pub struct Extractor {
    dependency: Regex,
    plugin: Regex,
    variable_reference: Regex,
    assignment: Regex,
}

impl Extractor {
    /// Compile the dependency pattern from the configuration keyword list, the
    /// plugin pattern and the variable patterns.
    pub fn new() -> Result<Self> {
        let keywords = CONFIGURATIONS.join("|");
        let segment = r#"[^:"'\s]"#;

        // org.apache.httpcomponents:httpclient:4.5.13 (version optional, classifier ignored)
        let dependency = Regex::new(&format!(
            r#"\b(?:{keywords})\s*\(?\s*["']({segment}+):({segment}+)(?::({segment}*))?(?::{segment}*)?["']"#
        ))
        .context("Failed to compile dependency pattern")?;

        // id("com.android.application") version "8.9.0"
        let plugin = Regex::new(
            r#"\bid\s*\(?\s*["']([^"'\s]+)["']\s*\)?(?:[ \t]*version[ \t]*\(?[ \t]*["']([^"'\s]*)["'])?"#,
        )
        .context("Failed to compile plugin pattern")?;

        let variable_reference = Regex::new(VARIABLE_REFERENCE_PATTERN)
            .context("Failed to compile variable reference pattern")?;
        let assignment =
            Regex::new(ASSIGNMENT_PATTERN).context("Failed to compile assignment pattern")?;

        Ok(Self {
            dependency,
            plugin,
            variable_reference,
            assignment,
        })
    }

    /// Scan file content. Never fails; unmatched text is ignored.
    #[must_use]
    pub fn scan(&self, content: &str) -> FileDeclarations {
        let coordinates = self
            .dependency
            .captures_iter(content)
            .map(|caps| Coordinate {
                group: caps[1].to_string(),
                name: caps[2].to_string(),
                version: VersionToken::from_segment(
                    caps.get(3).map(|m| m.as_str()),
                    &self.variable_reference,
                ),
            })
            .collect();

        let plugins = self
            .plugin
            .captures_iter(content)
            .map(|caps| PluginDeclaration {
                id: caps[1].to_string(),
                version: VersionToken::from_segment(
                    caps.get(2).map(|m| m.as_str()),
                    &self.variable_reference,
                ),
            })
            .collect();

        FileDeclarations {
            coordinates,
            plugins,
            bindings: VariableBindings::scan(content, &self.assignment),
        }
    }

    /// Scan `content` and add the result to `catalog`.
    pub fn extract_into(&self, content: &str, catalog: &mut VersionCatalog) {
        self.scan(content).apply_to(catalog);
    }

    /// Read every file in order and build the catalog of everything discovered.
    ///
    /// Files are read one after another. Content that is not valid UTF-8 is
    /// decoded lossily; only a file that cannot be read at all aborts the run
    /// with a [`FileOperationError`](crate::core::FileOperationError).
    ///
    /// Once every file has been applied, versions still at `FIXME` are filled
    /// from the bindings of the other files, first file in path order winning.
    pub async fn extract_catalog(&self, paths: &[PathBuf]) -> Result<VersionCatalog> {
        let mut catalog = VersionCatalog::new();
        let mut all_bindings = Vec::with_capacity(paths.len());

        for path in paths {
            let bytes = tokio::fs::read(path).await.with_file_context(
                FileOperation::Read,
                path,
                "scanning build script",
            )?;
            let content = String::from_utf8_lossy(&bytes);

            let declarations = self.scan(&content);
            debug!(
                "{}: {} coordinates, {} plugins, {} bindings",
                path.display(),
                declarations.coordinates.len(),
                declarations.plugins.len(),
                declarations.bindings.len()
            );
            declarations.apply_to(&mut catalog);
            all_bindings.push(declarations.bindings);
        }

        let filled = catalog.resolve_placeholder_versions(|name| {
            all_bindings.iter().find_map(|bindings| bindings.get(name)).map(str::to_string)
        });
        if filled > 0 {
            debug!("Resolved {} versions from bindings in other build scripts", filled);
        }

        Ok(catalog)
    }
}
