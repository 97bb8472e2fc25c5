//! Global constants used throughout the vcatalog codebase.
//!
//! File names, directory names and the recognised build-script vocabulary
//! live here so that discovery, extraction and catalog I/O agree on them.

/// Name of the directory whose presence marks a Gradle project root.
pub const GRADLE_DIR: &str = "gradle";

/// File name of the version catalog inside [`GRADLE_DIR`].
pub const CATALOG_FILE_NAME: &str = "libs.versions.toml";

/// Sentinel written wherever a version could not be determined.
///
/// Entries carrying this value need manual attention after generation.
pub const FIXME_VERSION: &str = "FIXME";

/// Default maximum directory depth searched below the project root.
///
/// Depth 0 is the root itself; files inside `a/b/` sit at depth 2.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Build script suffixes recognised during discovery (Groovy and Kotlin DSL).
pub const DECLARATION_SUFFIXES: [&str; 2] = [".gradle", ".gradle.kts"];

/// File stem of the settings script, excluded at the project root only.
pub const SETTINGS_FILE_STEM: &str = "settings";

/// Dependency configurations whose string coordinates are extracted.
///
/// This is a closed set. Anything else, such as `project(":core")` or catalog
/// accessors like `libs.foo`, is left alone by the scanner.
pub const CONFIGURATIONS: [&str; 12] = [
    "api",
    "implementation",
    "compileOnly",
    "compileOnlyApi",
    "runtimeOnly",
    "testImplementation",
    "testCompileOnly",
    "testRuntimeOnly",
    "classpath",
    "annotationProcessor",
    "kapt",
    "ksp",
];

/// Environment variable overriding the traversal depth.
pub const MAX_DEPTH_ENV: &str = "VCATALOG_MAX_DEPTH";

/// Directory (under the home directory) holding the optional user config.
pub const CONFIG_DIR_NAME: &str = ".vcatalog";

/// File name of the optional user config.
pub const CONFIG_FILE_NAME: &str = "config.toml";
