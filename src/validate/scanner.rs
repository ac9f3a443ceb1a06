//! Marker-aware scan over a unified diff.
//!
//! One left-to-right pass. All state lives in [`Scanner`] and is dropped when
//! [`scan_diff`] returns, so repeated scans of the same text agree.

use crate::config::Config;
use crate::diff::{DiffLine, MarkerMatchers, classify_line};
use crate::syntax::{CommentSyntax, SyntaxTable};

use super::block::{PendingLine, validate_block};
use super::types::{Verdict, Violation, ViolationKind};

/// Everything a scan needs besides the diff text.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub begin_marker: String,
    pub end_marker: String,
    pub confidential_marker: String,
    /// Close an open region at each file header instead of carrying it over.
    pub reset_region_per_file: bool,
    pub syntax: SyntaxTable,
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            begin_marker: config.begin_marker.trim().to_string(),
            end_marker: config.end_marker.trim().to_string(),
            confidential_marker: config.confidential_marker.clone(),
            reset_region_per_file: config.reset_region_per_file,
            syntax: config.syntax_table(),
        }
    }

    fn matchers_for(&self, syntax: &CommentSyntax) -> MarkerMatchers {
        MarkerMatchers::compile(syntax, &self.begin_marker, &self.end_marker)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Validate a whole diff and return the verdict.
///
/// Never fails: malformed input just yields violations or a pass.
///
/// # Example
///
/// ```
/// use markgate::validate::{ScanOptions, scan_diff};
///
/// let diff = "+++ b/src/main.cpp\n+// Arista Begin\n+// Arista confidential. foo\n+// Arista End\n";
/// let verdict = scan_diff(diff, &ScanOptions::default());
/// assert!(verdict.passed);
/// ```
pub fn scan_diff(diff: &str, options: &ScanOptions) -> Verdict {
    let mut scanner = Scanner::new(options);
    let mut last_line = 0;

    for (index, line) in diff.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;

        let kind = classify_line(line, &scanner.matchers);
        match kind {
            DiffLine::FileHeader(path) => scanner.on_file_header(path, line_number),
            DiffLine::NonAdded => scanner.on_non_added(line_number),
            DiffLine::Begin => scanner.on_begin(line, line_number),
            DiffLine::End => scanner.on_end(line, line_number),
            DiffLine::Added(content) => scanner.pending.push(PendingLine::new(content, line_number)),
        }
    }

    let violations = scanner.finish(last_line);
    tracing::info!(
        lines = last_line,
        violations = violations.len(),
        "diff scanned"
    );
    Verdict::from_violations(violations)
}

struct Scanner<'o> {
    options: &'o ScanOptions,
    current_file: Option<String>,
    matchers: MarkerMatchers,
    inside_region: bool,
    pending: Vec<PendingLine>,
    violations: Vec<Violation>,
}

impl<'o> Scanner<'o> {
    fn new(options: &'o ScanOptions) -> Self {
        Self {
            options,
            current_file: None,
            matchers: options.matchers_for(&CommentSyntax::default()),
            inside_region: false,
            pending: Vec::new(),
            violations: Vec::new(),
        }
    }

    fn on_file_header(&mut self, path: &str, line_number: usize) {
        let reset = self.options.reset_region_per_file;

        // With nothing pending, an open region carries into the next file.
        if self.inside_region && (reset || !self.pending.is_empty()) {
            self.push_unclosed(line_number);
            self.inside_region = false;
        }
        self.flush();

        let syntax = self.options.syntax.resolve(path);
        tracing::debug!(
            path,
            line_comment = %syntax.line,
            inside_region = self.inside_region,
            "switching file"
        );
        self.matchers = self.options.matchers_for(&syntax);
        self.current_file = Some(path.to_string());
    }

    fn on_non_added(&mut self, line_number: usize) {
        if self.pending.is_empty() {
            return;
        }

        if self.inside_region {
            self.push_unclosed(line_number);
            self.inside_region = false;
        }
        self.flush();
    }

    fn on_begin(&mut self, line: &str, line_number: usize) {
        if self.inside_region {
            self.violations.push(Violation::new(
                line_number,
                ViolationKind::NestedBegin,
                format!(
                    "Nested '{}' comment found at '{}'.",
                    self.options.begin_marker, line
                ),
            ));
        }
        self.inside_region = true;
        self.flush();
    }

    fn on_end(&mut self, line: &str, line_number: usize) {
        if !self.inside_region {
            self.violations.push(Violation::new(
                line_number,
                ViolationKind::DanglingEnd,
                format!(
                    "'{}' comment found without a preceding '{}' at '{}'.",
                    self.options.end_marker, self.options.begin_marker, line
                ),
            ));
        }
        self.inside_region = false;
        self.flush();
    }

    fn finish(mut self, last_line: usize) -> Vec<Violation> {
        if self.inside_region {
            self.violations.push(Violation::new(
                last_line,
                ViolationKind::UnclosedRegion,
                format!(
                    "Reached end of diff but '{}' block was not closed with '{}'.",
                    self.options.begin_marker, self.options.end_marker
                ),
            ));
        }
        self.flush();
        self.violations
    }

    fn push_unclosed(&mut self, line_number: usize) {
        self.violations.push(Violation::new(
            line_number,
            ViolationKind::UnclosedRegion,
            format!(
                "Expected '{}' comment, but block ended without it.",
                self.options.end_marker
            ),
        ));
    }

    /// Validate and clear the pending block.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        tracing::debug!(
            file = self.current_file.as_deref().unwrap_or("<none>"),
            first_line = self.pending[0].line_number,
            len = self.pending.len(),
            "flushing block"
        );
        if let Some(violation) = validate_block(&self.pending, &self.options.confidential_marker) {
            self.violations.push(violation);
        }
        self.pending.clear();
    }
}
