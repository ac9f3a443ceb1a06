//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::GateError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.begin_marker, "Arista Begin");
    assert_eq!(config.end_marker, "Arista End");
    assert_eq!(config.confidential_marker, "Arista confidential.");
    assert!(!config.reset_region_per_file);
    assert!(config.comment_syntax.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
reset_region_per_file: true
confidential_marker: "Acme internal."
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(config.reset_region_per_file);
    assert_eq!(config.confidential_marker, "Acme internal.");

    // Unspecified values should use defaults
    assert_eq!(config.begin_marker, "Arista Begin");
    assert_eq!(config.end_marker, "Arista End");
}

#[test]
fn test_parse_comment_syntax_overrides() {
    let yaml = r#"
comment_syntax:
  sql:
    line: "--"
    block_start: "/*"
    block_end: "*/"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    let table = config.syntax_table();
    assert_eq!(table.resolve("db/schema.sql").line, "--");
    assert_eq!(table.resolve("a.py").line, "#");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
begin_marker: "Vendor Begin"
end_marker: "Vendor End"
some_future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.begin_marker, "Vendor Begin");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml("reset_region_per_file: [not, a, bool]");
    match result {
        Err(GateError::ConfigError(msg)) => assert!(msg.contains("failed to parse config YAML")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_validate_empty_marker_fails() {
    let err = Config::from_yaml("confidential_marker: \"  \"").unwrap_err();
    assert!(err.to_string().contains("confidential_marker must be non-empty"));
}

#[test]
fn test_validate_identical_markers_fail() {
    let yaml = r#"
begin_marker: Region
end_marker: Region
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_validate_leading_dot_extension_fails() {
    let yaml = r#"
comment_syntax:
  .sql:
    line: "--"
    block_start: "/*"
    block_end: "*/"
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("leading dots"));
    assert!(err.to_string().contains("'sql'"));
}

#[test]
fn test_yaml_round_trip_preserves_defaults() {
    let yaml = Config::default().to_yaml().unwrap();
    assert!(yaml.contains("begin_marker: Arista Begin"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_picks_up_implicit_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "reset_region_per_file: true\n",
    )
    .unwrap();

    let config = Config::discover(None, dir.path()).unwrap();
    assert!(config.reset_region_per_file);
}

#[test]
fn test_discover_explicit_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, GateError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
