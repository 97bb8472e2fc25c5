//! Canonical alias derivation for catalog entries.
//!
//! An alias is the lower-cased coordinate with every run of non-alphanumeric
//! characters collapsed into a single `-`:
//!
//! | Source                               | Alias                         |
//! |--------------------------------------|-------------------------------|
//! | `foo.sub:No-Version`                 | `foo-sub-no-version`          |
//! | `software.amazon.awssdk:s3`          | `software-amazon-awssdk-s3`   |
//! | plugin `org.jetbrains.kotlin.android`| `org-jetbrains-kotlin-android`|
//!
//! Version entries are the exception: they keep the variable name they were
//! discovered under (`fooVersion`), so they are never passed through here.

/// Alias for a library identified by `group` and `name`.
#[must_use]
pub fn library_alias(group: &str, name: &str) -> String {
    canonical_alias(&format!("{group}.{name}"))
}

/// Alias for a plugin identified by its id.
#[must_use]
pub fn plugin_alias(id: &str) -> String {
    canonical_alias(id)
}

/// Lower-case `raw` and collapse separator runs into single dashes.
///
/// Leading and trailing separators are dropped, so `-foo..bar-` becomes
/// `foo-bar`. Letters and digits outside ASCII are kept (`ü.ö` becomes `ü-ö`).
/// Input without any letter or digit keeps its lower-cased text, so the alias
/// is never empty for non-empty input.
#[must_use]
pub fn canonical_alias(raw: &str) -> String {
    let mut alias = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !alias.is_empty() {
                alias.push('-');
            }
            pending_dash = false;
            alias.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if alias.is_empty() { raw.to_lowercase() } else { alias }
}
