//! Error types for markgate.
//!
//! Validation findings are not errors; they travel as `Violation` values in a
//! `Verdict`. This enum covers operational failures around the scan.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for markgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or failed validation.
    #[error("{0}")]
    ConfigError(String),

    /// The diff could not be read from its source.
    #[error("Failed to read diff: {0}")]
    SourceError(String),

    /// The diff was scanned and violations were found.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl GateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::UserError(_) => exit_codes::USER_ERROR,
            GateError::ConfigError(_) => exit_codes::USER_ERROR,
            GateError::SourceError(_) => exit_codes::SOURCE_FAILURE,
            GateError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// Whether the failure was already written out by the report itself.
    pub fn already_reported(&self) -> bool {
        matches!(self, GateError::ValidationFailed(_))
    }
}

/// Result type alias for markgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_and_config_errors_share_exit_code() {
        let user = GateError::UserError("bad argument".to_string());
        let config = GateError::ConfigError("bad yaml".to_string());
        assert_eq!(user.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(config.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn source_error_has_correct_exit_code() {
        let err = GateError::SourceError("no such file".to_string());
        assert_eq!(err.exit_code(), exit_codes::SOURCE_FAILURE);
    }

    #[test]
    fn validation_failed_has_correct_exit_code() {
        let err = GateError::ValidationFailed("2 violations".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn only_validation_failure_is_already_reported() {
        assert!(GateError::ValidationFailed("1 violation(s) found".to_string()).already_reported());
        assert!(!GateError::UserError("bad".to_string()).already_reported());
        assert!(!GateError::ConfigError("bad".to_string()).already_reported());
        assert!(!GateError::SourceError("bad".to_string()).already_reported());
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GateError::SourceError("diff.patch: not found".to_string());
        assert_eq!(err.to_string(), "Failed to read diff: diff.patch: not found");

        let err = GateError::ValidationFailed("3 violations".to_string());
        assert_eq!(err.to_string(), "Validation failed: 3 violations");
    }
}
