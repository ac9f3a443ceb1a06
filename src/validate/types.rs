//! Core types for validation results and violations.

use serde::Serialize;
use std::fmt;

/// The rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Begin marker without an end marker before a flush point or end of diff.
    UnclosedRegion,
    /// Begin marker while already inside a region.
    NestedBegin,
    /// End marker while not inside a region.
    DanglingEnd,
    /// First line of an added block lacks the confidentiality marker.
    MissingConfidentialityMarker,
}

/// A single finding, tagged with its 1-based line number in the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    #[serde(rename = "line")]
    pub line_number: usize,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(line_number: usize, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            line_number,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.message)
    }
}

/// Result of validating a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether validation passed (no violations).
    pub passed: bool,
    /// Violations in detection order (empty if passed).
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// Create a passing verdict.
    pub fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Create a failing verdict with violations.
    pub fn fail(violations: Vec<Violation>) -> Self {
        Self {
            passed: false,
            violations,
        }
    }

    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::pass()
        } else {
            Self::fail(violations)
        }
    }

    /// Format the violations one per line, `Line N: message`.
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = String::new();
        for violation in &self.violations {
            msg.push_str(&violation.to_string());
            msg.push('\n');
        }
        msg
    }
}
