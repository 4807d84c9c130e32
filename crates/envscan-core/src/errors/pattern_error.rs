//! Pattern table errors.

use super::error_code::{self, EnvScanErrorCode};

/// Errors reported when checking the built-in pattern tables.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern {name} failed to compile: {message}")]
    CompilationFailed { name: String, message: String },
}

impl EnvScanErrorCode for PatternError {
    fn error_code(&self) -> &'static str {
        error_code::PATTERN_ERROR
    }
}
