//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{GateError, Result};
use crate::syntax::SyntaxTable;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".markgate.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GateError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GateError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must load. Without one, `.markgate.yaml` in `dir` is
    /// used when it exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            Self::load(&implicit)
        } else {
            tracing::debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GateError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GateError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - marker texts must be non-empty single lines
    /// - `begin_marker` and `end_marker` must differ
    /// - `comment_syntax` keys must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("begin_marker", &self.begin_marker),
            ("end_marker", &self.end_marker),
            ("confidential_marker", &self.confidential_marker),
        ] {
            if value.trim().is_empty() {
                return Err(GateError::ConfigError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
            if value.contains('\n') {
                return Err(GateError::ConfigError(format!(
                    "config validation failed: {} must be a single line",
                    field
                )));
            }
        }

        if self.begin_marker.trim() == self.end_marker.trim() {
            return Err(GateError::ConfigError(
                "config validation failed: begin_marker and end_marker must differ".to_string(),
            ));
        }

        for ext in self.comment_syntax.keys() {
            if ext.is_empty() {
                return Err(GateError::ConfigError(
                    "config validation failed: comment_syntax keys must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(GateError::ConfigError(format!(
                    "config validation failed: comment_syntax keys must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Build the comment syntax table for this config.
    pub fn syntax_table(&self) -> SyntaxTable {
        SyntaxTable::with_overrides(&self.comment_syntax)
    }
}
