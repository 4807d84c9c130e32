//! Error handling for envscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The extraction operations themselves never fail; these errors cover
//! configuration loading and pattern-table diagnostics.

pub mod config_error;
pub mod error_code;
pub mod pattern_error;

pub use config_error::ConfigError;
pub use error_code::EnvScanErrorCode;
pub use pattern_error::PatternError;
