//! Content check for one flushed block of added lines.

use super::types::{Violation, ViolationKind};

/// One added line waiting in the pending block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLine {
    /// Line content without the leading `+`, trimmed.
    pub content: String,
    /// 1-based line number in the diff.
    pub line_number: usize,
}

impl PendingLine {
    pub fn new(content: impl Into<String>, line_number: usize) -> Self {
        Self {
            content: content.into(),
            line_number,
        }
    }
}

/// Validate a contiguous block of added lines.
///
/// Only the first line is inspected: it must contain `confidential_marker`
/// somewhere. Marker pairing is the scanner's job, not this function's.
pub fn validate_block(block: &[PendingLine], confidential_marker: &str) -> Option<Violation> {
    let first = block.first()?;

    if first.content.contains(confidential_marker) {
        return None;
    }

    Some(Violation::new(
        first.line_number,
        ViolationKind::MissingConfidentialityMarker,
        format!(
            "First line of new code block must contain '{}' comment. Found: '{}'",
            confidential_marker, first.content
        ),
    ))
}
