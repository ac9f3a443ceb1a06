//! Default values for config fields.

/// Default begin-marker text, written after the file's line comment token.
pub fn default_begin_marker() -> String {
    "Arista Begin".to_string()
}

/// Default end-marker text.
pub fn default_end_marker() -> String {
    "Arista End".to_string()
}

/// Default text required on the first line of every added block.
pub fn default_confidential_marker() -> String {
    "Arista confidential.".to_string()
}
