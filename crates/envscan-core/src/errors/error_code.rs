//! Structured error codes.

/// Every error enum implements this to expose a stable code string
/// that tooling built on top of envscan can match on.
pub trait EnvScanErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
