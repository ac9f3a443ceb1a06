//! Comment syntax resolution keyed off file extension.
//!
//! The builtin table covers the languages the gate has always known about.
//! Config can layer per-extension overrides on top via [`SyntaxTable`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The comment tokens of a file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSyntax {
    /// Line comment token, e.g. `//` or `#`. Empty when the file type has none.
    pub line: String,
    /// Block comment opening token.
    pub block_start: String,
    /// Block comment closing token.
    pub block_end: String,
}

impl CommentSyntax {
    pub fn new(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            block_start: block_start.into(),
            block_end: block_end.into(),
        }
    }

    /// C-family syntax, used before any file header and for unknown extensions.
    pub fn c_family() -> Self {
        Self::new("//", "/*", "*/")
    }

    /// Whether marker comments can be expressed in this syntax at all.
    pub fn has_line_comment(&self) -> bool {
        !self.line.is_empty()
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::c_family()
    }
}

/// Builtin extension table: (extension, line, block start, block end).
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("py", "#", "#", "#"),
    ("sh", "#", "#", "#"),
    ("js", "//", "/*", "*/"),
    ("ts", "//", "/*", "*/"),
    ("java", "//", "/*", "*/"),
    ("c", "//", "/*", "*/"),
    ("cpp", "//", "/*", "*/"),
    ("h", "//", "/*", "*/"),
    ("hpp", "//", "/*", "*/"),
    ("cs", "//", "/*", "*/"),
    ("go", "//", "/*", "*/"),
    ("rs", "//", "/*", "*/"),
    ("css", "/*", "/*", "*/"),
    ("html", "", "", ""),
    ("xml", "", "", ""),
];

/// Extract the lowercase extension of a path, without the dot.
///
/// Only the final path component is considered, and a leading dot
/// (`.bashrc`) does not start an extension.
pub fn extension_of(path: &str) -> Option<String> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot + 1 == file_name.len() {
        return None;
    }
    Some(file_name[dot + 1..].to_lowercase())
}

/// Resolve the comment syntax for a path using the builtin table only.
pub fn resolve(path: &str) -> CommentSyntax {
    extension_of(path)
        .and_then(|ext| builtin_for(&ext))
        .unwrap_or_default()
}

fn builtin_for(ext: &str) -> Option<CommentSyntax> {
    BUILTIN
        .iter()
        .find(|(e, ..)| *e == ext)
        .map(|(_, line, start, end)| CommentSyntax::new(*line, *start, *end))
}

/// Builtin table plus config overrides.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTable {
    /// Overrides keyed by lowercase extension without a leading dot.
    overrides: BTreeMap<String, CommentSyntax>,
}

impl SyntaxTable {
    pub fn with_overrides(overrides: &BTreeMap<String, CommentSyntax>) -> Self {
        Self {
            overrides: overrides
                .iter()
                .map(|(ext, syntax)| (ext.to_lowercase(), syntax.clone()))
                .collect(),
        }
    }

    /// Resolve the comment syntax for a path. Overrides win over the builtin table.
    pub fn resolve(&self, path: &str) -> CommentSyntax {
        let Some(ext) = extension_of(path) else {
            return CommentSyntax::default();
        };

        self.overrides
            .get(&ext)
            .cloned()
            .or_else(|| builtin_for(&ext))
            .unwrap_or_default()
    }
}
