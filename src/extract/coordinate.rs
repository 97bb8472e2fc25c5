//! Raw records produced by scanning one build script.

use regex::Regex;

/// `$name` or `${name}` / `${a.b.name}` inside a version segment.
pub const VARIABLE_REFERENCE_PATTERN: &str =
    r"\$(?:\{\s*([A-Za-z_][A-Za-z0-9_.]*)\s*\}|([A-Za-z_][A-Za-z0-9_]*))";

/// The version part of a declaration as written in the build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    /// A literal version such as `1.0-M4`
    Literal(String),
    /// A reference to a variable (`$fooVersion`, `${fooVersion}`)
    Variable(String),
    /// No version segment, or an empty one
    Missing,
}

impl VersionToken {
    /// Classify a raw version segment.
    ///
    /// A segment containing a variable reference is a [`VersionToken::Variable`]
    /// named after the first reference; for qualified references such as
    /// `${rootProject.ext.kotlinVersion}` the last path segment is the name.
    /// A trailing `@ext` artifact-type suffix is not part of the version.
    ///
    /// `reference` is the compiled [`VARIABLE_REFERENCE_PATTERN`].
    #[must_use]
    pub fn from_segment(segment: Option<&str>, reference: &Regex) -> Self {
        let Some(segment) = segment else {
            return Self::Missing;
        };
        let segment = segment.split('@').next().unwrap_or_default().trim();
        if segment.is_empty() {
            return Self::Missing;
        }

        if let Some(caps) = reference.captures(segment) {
            let reference = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            if let Some(name) = reference.rsplit('.').next().filter(|name| !name.is_empty()) {
                return Self::Variable(name.to_string());
            }
        }

        Self::Literal(segment.to_string())
    }
}

/// A `group:name[:version]` coordinate found after a configuration keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: VersionToken,
}

/// A plugin id, optionally followed by a `version` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDeclaration {
    pub id: String,
    pub version: VersionToken,
}
