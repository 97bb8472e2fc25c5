//! Generate or update the project's version catalog.
//!
//! The `generate` command scans a Gradle project for build scripts, extracts
//! every dependency coordinate and plugin declaration it recognises, and merges
//! the result into `gradle/libs.versions.toml`.
//!
//! # Behavior
//!
//! 1. Resolve the project root (the positional argument, or the working directory)
//! 2. Require a `gradle/` directory under the root
//! 3. Collect `*.gradle` / `*.gradle.kts` files down to the configured depth
//! 4. Extract libraries, plugins and version variables from each file in turn
//! 5. Merge into the existing catalog, keeping every entry that is already there
//! 6. Render the catalog canonically and replace the file atomically
//!
//! Entries whose version could not be determined carry the `FIXME` version and
//! should be edited by hand; later runs never overwrite those edits.
//!
//! # Examples
//!
//! ```bash
//! # Generate the catalog for the project in the current directory
//! vcatalog generate
//!
//! # Explicit project root, scanning one level deeper than the default
//! vcatalog generate ../my-app --max-depth 3
//!
//! # Print the merged catalog without writing it
//! vcatalog generate --dry-run
//! ```

use crate::catalog::{SectionCounts, load_catalog, merge, render_catalog, save_catalog};
use crate::config::GeneratorConfig;
use crate::constants::{CATALOG_FILE_NAME, GRADLE_DIR, MAX_DEPTH_ENV};
use crate::core::CatalogError;
use crate::extract::Extractor;
use crate::utils::fs::find_declaration_files;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command to infer a version catalog from build scripts.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
    /// Project root directory (defaults to the current directory)
    ///
    /// Collected as a list so that surplus arguments produce a clear
    /// configuration error instead of a parser error.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Deepest directory level scanned for build scripts (root is 0)
    #[arg(long, value_name = "N", env = MAX_DEPTH_ENV)]
    pub max_depth: Option<usize>,

    /// Print the merged catalog to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// What a generate run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Location of the catalog file
    pub catalog_path: PathBuf,
    /// Canonical text of the merged catalog
    pub rendered: String,
    /// Number of build scripts scanned
    pub files_scanned: usize,
    /// Entries newly added to the catalog
    pub added: SectionCounts,
    /// Discovered entries skipped because the catalog already had them
    pub kept: SectionCounts,
}

impl GenerateCommand {
    /// Execute with the default configuration lookup and normal output.
    pub async fn execute(self) -> Result<()> {
        self.execute_with_options(None, false).await
    }

    /// Execute with an explicit configuration file and output mode.
    ///
    /// Writes the catalog (unless `--dry-run`) and prints a one-line summary
    /// unless `quiet` is set.
    pub async fn execute_with_options(self, config_path: Option<&Path>, quiet: bool) -> Result<()> {
        let root = self.resolve_root()?;
        let config = GeneratorConfig::load(config_path).await?;
        let report = self.run(&root, &config).await?;

        if self.dry_run {
            print!("{}", report.rendered);
            return Ok(());
        }

        if !quiet {
            println!(
                "{} Updated {} ({} versions, {} libraries, {} plugins added from {} build scripts)",
                "✓".green(),
                report.catalog_path.display(),
                report.added.versions,
                report.added.libraries,
                report.added.plugins,
                report.files_scanned
            );
        }

        Ok(())
    }

    /// Root from the positional arguments, or the current directory.
    fn resolve_root(&self) -> Result<PathBuf> {
        match self.roots.as_slice() {
            [] => std::env::current_dir().context("Failed to determine the current directory"),
            [root] => Ok(root.clone()),
            roots => Err(CatalogError::InvalidArguments {
                message: format!("requires at most one arg, received {}", roots.len()),
            }
            .into()),
        }
    }

    /// Discover, extract, merge and (unless dry-run) save for the project at `root`.
    pub async fn run(&self, root: &Path, config: &GeneratorConfig) -> Result<GenerateReport> {
        let gradle_dir = root.join(GRADLE_DIR);
        if !gradle_dir.is_dir() {
            return Err(CatalogError::NotAGradleProject {
                path: gradle_dir.display().to_string(),
            }
            .into());
        }
        let catalog_path = gradle_dir.join(CATALOG_FILE_NAME);

        let options = config.discovery_options(self.max_depth);
        let files = find_declaration_files(root, &options);
        info!("Scanning {} build scripts under {}", files.len(), root.display());

        let extractor = Extractor::new()?;
        let discovered = extractor.extract_catalog(&files).await?;

        let persisted = load_catalog(&catalog_path).await?;
        let outcome = merge(persisted, discovered);
        info!(
            "Merged catalog: {} entries added, {} already present",
            outcome.added.total(),
            outcome.kept.total()
        );

        let rendered = render_catalog(&outcome.catalog);
        if !self.dry_run {
            save_catalog(&catalog_path, &rendered)?;
        }

        Ok(GenerateReport {
            catalog_path,
            rendered,
            files_scanned: files.len(),
            added: outcome.added,
            kept: outcome.kept,
        })
    }
}
