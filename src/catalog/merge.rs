//! Non-destructive merge of freshly extracted entries into a persisted catalog.
//!
//! For each of the four sections, every alias already present in the persisted
//! catalog is kept exactly as it was, and only aliases it does not know yet are
//! taken from the extraction. Running the generator again after hand-editing the
//! catalog therefore never reverts those edits, and merging a catalog with an
//! extraction it already covers changes nothing.

use super::{CatalogEntry, SectionCounts, VersionCatalog};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Result of [`merge`].
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The combined catalog
    pub catalog: VersionCatalog,
    /// Entries taken from the extraction
    pub added: SectionCounts,
    /// Extracted entries discarded because the alias was already persisted
    pub kept: SectionCounts,
}

/// Combine `persisted` with `discovered`, persisted entries winning every collision.
#[must_use]
pub fn merge(persisted: VersionCatalog, discovered: VersionCatalog) -> MergeOutcome {
    let mut catalog = persisted;
    let mut added = SectionCounts::default();
    let mut kept = SectionCounts::default();

    (added.versions, kept.versions) =
        merge_section("versions", &mut catalog.versions, discovered.versions);
    (added.libraries, kept.libraries) =
        merge_section("libraries", &mut catalog.libraries, discovered.libraries);
    (added.plugins, kept.plugins) =
        merge_section("plugins", &mut catalog.plugins, discovered.plugins);
    (added.bundles, kept.bundles) =
        merge_section("bundles", &mut catalog.bundles, discovered.bundles);

    MergeOutcome {
        catalog,
        added,
        kept,
    }
}

fn merge_section<T>(
    section: &str,
    base: &mut BTreeMap<String, CatalogEntry<T>>,
    incoming: BTreeMap<String, CatalogEntry<T>>,
) -> (usize, usize) {
    let mut added = 0;
    let mut kept = 0;

    for (alias, entry) in incoming {
        match base.entry(alias) {
            Entry::Occupied(existing) => {
                debug!("Keeping existing [{}] entry '{}'", section, existing.key());
                kept += 1;
            }
            Entry::Vacant(slot) => {
                debug!("Adding [{}] entry '{}'", section, slot.key());
                slot.insert(entry);
                added += 1;
            }
        }
    }

    (added, kept)
}
