//! Decoding, rendering and persistence of `libs.versions.toml`.
//!
//! Decoding goes through `toml_edit` so that persisted entries can be carried
//! through a run as their original TOML values: whatever shape a hand-written
//! entry has (`module = "g:n"`, rich version tables, string notation, arrays),
//! it is written back value for value.
//!
//! Rendering is deterministic and total:
//! - sections in the order `[versions]`, `[libraries]`, `[plugins]`, `[bundles]`
//! - a section with no entries is omitted entirely
//! - one `alias = value` line per entry, aliases sorted lexicographically
//! - sections separated by a single blank line
//!
//! An empty catalog renders to the empty string.

use super::{CatalogEntry, Library, Plugin, VersionCatalog, VersionSpec};
use crate::core::{CatalogError, FileOperation, FileResultExt};
use crate::utils::fs::safe_write;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use toml_edit::{DocumentMut, Item, Value};
use tracing::debug;

/// Decode catalog text. `file` is only used in error messages.
///
/// Empty (or whitespace-only) content yields an empty catalog. Top-level keys
/// other than the four catalog sections are rejected with
/// [`CatalogError::UnsupportedCatalogSection`].
pub fn parse_catalog(content: &str, file: &Path) -> Result<VersionCatalog, CatalogError> {
    let doc: DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| {
        CatalogError::CatalogParseError {
            file: file.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut catalog = VersionCatalog::new();
    for (key, item) in doc.iter() {
        match key {
            "versions" => catalog.versions = read_section(file, key, item)?,
            "libraries" => catalog.libraries = read_section(file, key, item)?,
            "plugins" => catalog.plugins = read_section(file, key, item)?,
            "bundles" => catalog.bundles = read_section(file, key, item)?,
            other => {
                return Err(CatalogError::UnsupportedCatalogSection {
                    file: file.display().to_string(),
                    section: other.to_string(),
                });
            }
        }
    }

    Ok(catalog)
}

fn read_section<T>(
    file: &Path,
    section: &str,
    item: &Item,
) -> Result<BTreeMap<String, CatalogEntry<T>>, CatalogError> {
    let unsupported = |key: String| CatalogError::UnsupportedCatalogSection {
        file: file.display().to_string(),
        section: key,
    };

    let table = item.as_table_like().ok_or_else(|| unsupported(section.to_string()))?;

    let mut entries = BTreeMap::new();
    for (alias, entry) in table.iter() {
        // `[libraries.foo]` sub-tables fold into an inline table
        let was_table = entry.is_table();
        let mut value =
            entry.clone().into_value().map_err(|_| unsupported(format!("{section}.{alias}")))?;
        if was_table {
            if let Some(inline) = value.as_inline_table_mut() {
                inline.fmt();
            }
        }
        value.decor_mut().clear();
        entries.insert(alias.to_string(), CatalogEntry::Preserved(value));
    }

    Ok(entries)
}

/// Render a catalog to its canonical text form.
#[must_use]
pub fn render_catalog(catalog: &VersionCatalog) -> String {
    let mut sections = Vec::new();
    push_section(&mut sections, "versions", &catalog.versions);
    push_section(&mut sections, "libraries", &catalog.libraries);
    push_section(&mut sections, "plugins", &catalog.plugins);
    push_section(&mut sections, "bundles", &catalog.bundles);
    sections.join("\n")
}

fn push_section<T: RenderValue>(
    sections: &mut Vec<String>,
    name: &str,
    entries: &BTreeMap<String, CatalogEntry<T>>,
) {
    if entries.is_empty() {
        return;
    }

    let mut section = format!("[{name}]\n");
    for (alias, entry) in entries {
        let value = match entry {
            CatalogEntry::Discovered(value) => value.render_value(),
            CatalogEntry::Preserved(value) => value.to_string().trim().to_string(),
        };
        section.push_str(&format!("{} = {}\n", render_key(alias), value));
    }
    sections.push(section);
}

/// Rendering of a discovered value as an inline TOML value.
trait RenderValue {
    fn render_value(&self) -> String;
}

impl RenderValue for String {
    fn render_value(&self) -> String {
        quote(self)
    }
}

impl RenderValue for Vec<String> {
    fn render_value(&self) -> String {
        let items: Vec<String> = self.iter().map(|alias| quote(alias)).collect();
        format!("[{}]", items.join(", "))
    }
}

impl RenderValue for Library {
    fn render_value(&self) -> String {
        format!(
            "{{ group = {}, name = {}, {} }}",
            quote(&self.group),
            quote(&self.name),
            render_version(&self.version)
        )
    }
}

impl RenderValue for Plugin {
    fn render_value(&self) -> String {
        format!("{{ id = {}, {} }}", quote(&self.id), render_version(&self.version))
    }
}

fn render_version(version: &VersionSpec) -> String {
    match version {
        VersionSpec::Literal(value) => format!("version = {}", quote(value)),
        VersionSpec::Ref(alias) => format!("version.ref = {}", quote(alias)),
    }
}

/// TOML string literal for `value`, escaped as needed.
fn quote(value: &str) -> String {
    Value::from(value).to_string()
}

/// Bare key when possible, quoted otherwise.
fn render_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare { key.to_string() } else { quote(key) }
}

/// Load the persisted catalog at `path`.
///
/// A missing file is treated as an empty catalog; it is created when the
/// merged result is saved.
pub async fn load_catalog(path: &Path) -> Result<VersionCatalog> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No version catalog at {}, starting empty", path.display());
            return Ok(VersionCatalog::new());
        }
        Err(e) => {
            return Err(e)
                .with_file_context(FileOperation::Read, path, "loading the version catalog")
                .map_err(anyhow::Error::from);
        }
    };

    let catalog = parse_catalog(&content, path)?;
    debug!("Loaded {} persisted catalog entries from {}", catalog.counts().total(), path.display());
    Ok(catalog)
}

/// Atomically replace the catalog at `path` with `rendered`.
pub fn save_catalog(path: &Path, rendered: &str) -> Result<()> {
    safe_write(path, rendered)
        .with_context(|| format!("Failed to save version catalog {}", path.display()))
}
