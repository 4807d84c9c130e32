//! Tests for the envscan error types.

use envscan_core::errors::*;

/// Every error enum exposes a non-empty code.
#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound {
        path: "/tmp/envscan.toml".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let pattern = PatternError::CompilationFailed {
        name: "usage:process_env_dot".into(),
        message: "unclosed group".into(),
    };
    assert_eq!(pattern.error_code(), "PATTERN_ERROR");
}

/// Coded strings prefix the display message with the code.
#[test]
fn test_coded_string_format() {
    let err = ConfigError::ValidationFailed {
        field: "grouping.prefix_depth".into(),
        message: "must be at least 1".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[CONFIG_ERROR] Config validation failed for grouping.prefix_depth: must be at least 1"
    );
}
