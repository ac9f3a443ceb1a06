//! Config struct definition and default implementation.

use super::types::*;
use crate::syntax::CommentSyntax;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a markgate run.
///
/// This struct represents the contents of `.markgate.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Marker text
    // =========================================================================
    /// Text that opens a bracketed region, after the line comment token.
    #[serde(default = "default_begin_marker")]
    pub begin_marker: String,

    /// Text that closes a bracketed region, after the line comment token.
    #[serde(default = "default_end_marker")]
    pub end_marker: String,

    /// Literal text the first line of every added block must contain.
    #[serde(default = "default_confidential_marker")]
    pub confidential_marker: String,

    // =========================================================================
    // Scanner behavior
    // =========================================================================
    /// Close an open region at every `+++ b/` file header.
    ///
    /// Off by default: a region opened in one file stays open into the next.
    #[serde(default)]
    pub reset_region_per_file: bool,

    // =========================================================================
    // Comment syntax
    // =========================================================================
    /// Per-extension overrides of the builtin comment syntax table.
    /// Keys are extensions without leading dots.
    #[serde(default)]
    pub comment_syntax: BTreeMap<String, CommentSyntax>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            begin_marker: default_begin_marker(),
            end_marker: default_end_marker(),
            confidential_marker: default_confidential_marker(),
            reset_region_per_file: false,
            comment_syntax: BTreeMap::new(),
        }
    }
}
