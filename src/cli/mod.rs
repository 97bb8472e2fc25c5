//! Command-line interface for vcatalog.
//!
//! # Commands
//!
//! - `generate` - Infer `gradle/libs.versions.toml` from the project's build scripts
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging on stderr
//! - `--quiet` / `-q` - Errors only, no summary line
//! - `--config` / `-c` - Configuration file (default `~/.vcatalog/config.toml`)
//!
//! # Examples
//!
//! ```bash
//! vcatalog generate
//! vcatalog --verbose generate path/to/project
//! vcatalog -c ./vcatalog.toml generate --max-depth 4
//! ```

pub mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and library callers can drive
/// [`Cli::execute_with_config`] without going through argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter used when `RUST_LOG` is not set (`debug`, `warn`, `error`)
    pub log_level: String,

    /// Suppress the summary line
    pub quiet: bool,

    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            quiet: false,
            config_path: None,
        }
    }
}

impl CliConfig {
    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// `RUST_LOG` wins over [`CliConfig::log_level`]. Calling this more than
    /// once is harmless; only the first subscriber is installed.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&self.log_level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Infer a Gradle version catalog from build scripts.
#[derive(Parser, Debug)]
#[command(
    name = "vcatalog",
    about = "Infer a Gradle version catalog (libs.versions.toml) from build scripts",
    version,
    long_about = "vcatalog scans a Gradle project's build scripts for dependency coordinates and \
                  plugin declarations and merges them into gradle/libs.versions.toml without \
                  touching entries that are already there."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "VCATALOG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate or update gradle/libs.versions.toml
    ///
    /// See [`generate::GenerateCommand`] for options and behavior.
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Generate(cmd) => {
                cmd.execute_with_options(config.config_path.as_deref(), config.quiet).await
            }
        }
    }
}
