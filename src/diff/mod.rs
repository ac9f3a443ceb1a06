//! Unified diff primitives for markgate.
//!
//! This module provides:
//! - Line classification against the current file's marker comments
//! - Diff sources that produce a unified diff as one text blob
//!
//! Only `+++ b/` file headers and `+` added lines carry meaning; every other
//! line (`---`, `@@`, context, removed, metadata) classifies as non-added.

mod classify;
mod source;


// Re-export public API
pub use classify::{DiffLine, MarkerMatchers, classify_line};
pub use source::{DiffSource, FileSource, StdinSource, TextSource, source_for};
