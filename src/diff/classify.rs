//! Classification of single diff lines.

use crate::syntax::CommentSyntax;
use regex::Regex;

/// Prefix of the file header lines that switch the current file.
pub const FILE_HEADER_PREFIX: &str = "+++ b/";

/// What a single diff line means to the scanner.
///
/// Variants are listed in the priority order they are tested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine<'a> {
    /// `+++ b/<path>`; holds the trimmed path.
    FileHeader(&'a str),
    /// Anything that is not an added line.
    NonAdded,
    /// Added line that is a begin-marker comment.
    Begin,
    /// Added line that is an end-marker comment.
    End,
    /// Any other added line; holds the content without `+`, trimmed.
    Added(&'a str),
}

/// Begin/end marker patterns compiled for one comment syntax.
///
/// A marker line is `<ws>* <line token> <ws>* <marker text> <ws>*` and
/// nothing else. Syntaxes without a line comment token recognize no markers.
#[derive(Debug, Clone)]
pub struct MarkerMatchers {
    begin: Option<Regex>,
    end: Option<Regex>,
}

impl MarkerMatchers {
    pub fn compile(syntax: &CommentSyntax, begin_text: &str, end_text: &str) -> Self {
        if !syntax.has_line_comment() {
            return Self::none();
        }

        Self {
            begin: marker_regex(&syntax.line, begin_text),
            end: marker_regex(&syntax.line, end_text),
        }
    }

    /// Matchers that never match.
    pub fn none() -> Self {
        Self {
            begin: None,
            end: None,
        }
    }

    pub fn is_begin(&self, content: &str) -> bool {
        self.begin.as_ref().is_some_and(|re| re.is_match(content))
    }

    pub fn is_end(&self, content: &str) -> bool {
        self.end.as_ref().is_some_and(|re| re.is_match(content))
    }
}

fn marker_regex(token: &str, text: &str) -> Option<Regex> {
    let pattern = format!(
        r"^\s*{}\s*{}\s*$",
        regex::escape(token),
        regex::escape(text.trim())
    );

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(%pattern, error = %e, "marker pattern failed to compile, markers disabled");
            None
        }
    }
}

/// Classify a raw diff line.
///
/// Markers are matched against the line with its leading `+` removed, so
/// indentation inside the added line is allowed.
pub fn classify_line<'a>(line: &'a str, matchers: &MarkerMatchers) -> DiffLine<'a> {
    if let Some(path) = line.strip_prefix(FILE_HEADER_PREFIX) {
        return DiffLine::FileHeader(path.trim());
    }

    if line.starts_with("+++") {
        return DiffLine::NonAdded;
    }

    let Some(content) = line.strip_prefix('+') else {
        return DiffLine::NonAdded;
    };

    if matchers.is_begin(content) {
        DiffLine::Begin
    } else if matchers.is_end(content) {
        DiffLine::End
    } else {
        DiffLine::Added(content.trim())
    }
}
