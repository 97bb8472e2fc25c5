//! In-memory model of a Gradle version catalog (`gradle/libs.versions.toml`).
//!
//! A [`VersionCatalog`] is four maps keyed by alias: versions, libraries,
//! plugins and bundles. Each value is a [`CatalogEntry`], which is either
//! something discovered in the build scripts during this run, or a value read
//! back from the persisted catalog and carried through untouched.
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
//! com-android-library = { id = "com.android.library", version = "8.9.0" }
//! ```
//!
//! # Modules
//!
//! - [`alias`] - Deterministic alias derivation
//! - [`merge`] - Non-destructive combination with a persisted catalog
//! - [`io`] - Decoding, rendering, loading and saving

pub mod alias;
pub mod io;
pub mod merge;

pub use alias::{canonical_alias, library_alias, plugin_alias};
pub use io::{load_catalog, parse_catalog, render_catalog, save_catalog};
pub use merge::{MergeOutcome, merge};

use crate::constants::FIXME_VERSION;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Version of a library or plugin: a literal, or a reference to a `[versions]` alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// Rendered as `version = "X"`
    Literal(String),
    /// Rendered as `version.ref = "alias"`
    Ref(String),
}

impl VersionSpec {
    /// The `FIXME` sentinel used when no version could be determined.
    #[must_use]
    pub fn fixme() -> Self {
        Self::Literal(FIXME_VERSION.to_string())
    }

    /// Whether this is the `FIXME` sentinel.
    #[must_use]
    pub fn is_fixme(&self) -> bool {
        matches!(self, Self::Literal(v) if v == FIXME_VERSION)
    }
}

/// A `[libraries]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// Dotted group, e.g. `software.amazon.awssdk`
    pub group: String,
    /// Artifact name, original casing preserved
    pub name: String,
    /// Literal version or reference to a version alias
    pub version: VersionSpec,
}

impl Library {
    /// Canonical alias for this library.
    #[must_use]
    pub fn alias(&self) -> String {
        library_alias(&self.group, &self.name)
    }
}

/// A `[plugins]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Plugin id, e.g. `com.android.application`
    pub id: String,
    /// Literal version or reference to a version alias
    pub version: VersionSpec,
}

impl Plugin {
    /// Canonical alias for this plugin.
    #[must_use]
    pub fn alias(&self) -> String {
        plugin_alias(&self.id)
    }
}

/// A value stored under one alias.
#[derive(Debug, Clone)]
pub enum CatalogEntry<T> {
    /// Produced by extraction during this run
    Discovered(T),
    /// Read from the persisted catalog; re-rendered value for value
    Preserved(toml_edit::Value),
}

impl<T> CatalogEntry<T> {
    /// The discovered value, if this entry was produced by extraction.
    pub fn discovered(&self) -> Option<&T> {
        match self {
            Self::Discovered(value) => Some(value),
            Self::Preserved(_) => None,
        }
    }

    /// Whether this entry came from the persisted catalog.
    pub fn is_preserved(&self) -> bool {
        matches!(self, Self::Preserved(_))
    }
}

/// Number of entries per catalog section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub versions: usize,
    pub libraries: usize,
    pub plugins: usize,
    pub bundles: usize,
}

impl SectionCounts {
    /// Sum over all four sections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.versions + self.libraries + self.plugins + self.bundles
    }
}

/// A version catalog: four alias-keyed maps, iterated in lexicographic key order.
#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    pub versions: BTreeMap<String, CatalogEntry<String>>,
    pub libraries: BTreeMap<String, CatalogEntry<Library>>,
    pub plugins: BTreeMap<String, CatalogEntry<Plugin>>,
    pub bundles: BTreeMap<String, CatalogEntry<Vec<String>>>,
}

impl VersionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all four sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
            && self.libraries.is_empty()
            && self.plugins.is_empty()
            && self.bundles.is_empty()
    }

    /// Entry counts per section.
    #[must_use]
    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            versions: self.versions.len(),
            libraries: self.libraries.len(),
            plugins: self.plugins.len(),
            bundles: self.bundles.len(),
        }
    }

    /// Record a discovered version.
    ///
    /// The first value seen for `name` wins, except that a `FIXME` placeholder
    /// is replaced once some file supplies a concrete value.
    pub fn add_version(&mut self, name: &str, value: &str) {
        match self.versions.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(CatalogEntry::Discovered(value.to_string()));
            }
            Entry::Occupied(mut slot) => {
                let upgrade = matches!(
                    slot.get(),
                    CatalogEntry::Discovered(existing) if existing == FIXME_VERSION
                ) && value != FIXME_VERSION;
                if upgrade {
                    slot.insert(CatalogEntry::Discovered(value.to_string()));
                }
            }
        }
    }

    /// Replace discovered `FIXME` versions for which `lookup` knows a value.
    ///
    /// Preserved entries and concrete versions are left alone. Returns the
    /// number of versions filled.
    pub fn resolve_placeholder_versions(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> usize {
        let mut filled = 0;
        for (name, entry) in &mut self.versions {
            if let CatalogEntry::Discovered(value) = entry {
                if value == FIXME_VERSION {
                    if let Some(resolved) = lookup(name).filter(|v| v != FIXME_VERSION) {
                        *value = resolved;
                        filled += 1;
                    }
                }
            }
        }
        filled
    }

    /// Record a discovered library under its canonical alias.
    ///
    /// Same collision rule as [`add_version`](Self::add_version): first wins
    /// unless it only carries the `FIXME` sentinel.
    pub fn add_library(&mut self, library: Library) {
        let alias = library.alias();
        insert_discovered(&mut self.libraries, alias, library, |lib| lib.version.is_fixme());
    }

    /// Record a discovered plugin under its canonical alias.
    pub fn add_plugin(&mut self, plugin: Plugin) {
        let alias = plugin.alias();
        insert_discovered(&mut self.plugins, alias, plugin, |p| p.version.is_fixme());
    }
}

fn insert_discovered<T>(
    section: &mut BTreeMap<String, CatalogEntry<T>>,
    alias: String,
    value: T,
    is_placeholder: impl Fn(&T) -> bool,
) {
    match section.entry(alias) {
        Entry::Vacant(slot) => {
            slot.insert(CatalogEntry::Discovered(value));
        }
        Entry::Occupied(mut slot) => {
            let replace = match slot.get() {
                CatalogEntry::Discovered(existing) => {
                    is_placeholder(existing) && !is_placeholder(&value)
                }
                CatalogEntry::Preserved(_) => false,
            };
            if replace {
                slot.insert(CatalogEntry::Discovered(value));
            }
        }
    }
}
