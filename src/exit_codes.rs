//! Exit code constants for the markgate CLI.
//!
//! - 0: Diff passed validation
//! - 1: Diff failed validation (same code the CI gate always returned)
//! - 2: User error (bad args, invalid config)
//! - 3: Diff source could not be read

/// Diff passed validation.
pub const SUCCESS: i32 = 0;

/// Validation failure: at least one violation was reported.
pub const VALIDATION_FAILURE: i32 = 1;

/// User error: bad arguments or an invalid config file.
pub const USER_ERROR: i32 = 2;

/// The diff could not be read from its source.
pub const SOURCE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, VALIDATION_FAILURE, USER_ERROR, SOURCE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn pass_and_fail_codes_stay_compatible() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(VALIDATION_FAILURE, 1);
    }
}
