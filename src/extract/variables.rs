//! Local variable bindings of a single build script.
//!
//! Bindings are collected per file. A reference is resolved against the
//! bindings of its own file first; bindings of other scanned files only fill
//! versions that are still unresolved once every file has been read.

use regex::Regex;
use std::collections::HashMap;

/// `val x = "1.0"`, `def x = '1.0'`, `ext.x = "1.0"`, `const val x: String = "1.0"`, `x = "1.0"`.
///
/// Values containing `$` are templates, not literals, and are not bound.
pub const ASSIGNMENT_PATTERN: &str = r#"(?m)^[ \t]*(?:(?:val|var|def|final|const|private|internal)[ \t]+)*(?:(?:project\.)?ext\.)?([A-Za-z_][A-Za-z0-9_]*)[ \t]*(?::[ \t]*String[ \t]*)?=[ \t]*(?:"([^"$\r\n]*)"|'([^'$\r\n]*)')"#;

/// Variable name to literal value, scoped to one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBindings {
    values: HashMap<String, String>,
}

impl VariableBindings {
    /// Collect every literal assignment in `content`. Later assignments win.
    ///
    /// `assignment` is the compiled [`ASSIGNMENT_PATTERN`].
    #[must_use]
    pub fn scan(content: &str, assignment: &Regex) -> Self {
        let mut values = HashMap::new();
        for caps in assignment.captures_iter(content) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            values.insert(caps[1].to_string(), value.to_string());
        }
        Self {
            values,
        }
    }

    /// Literal bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no binding was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
