//! envscan-core: shared infrastructure for the envscan scanner.
//!
//! - Config: TOML-based, layered resolution (overrides > env > project > user > defaults)
//! - Errors: one `thiserror` enum per subsystem
//! - Tracing: `ENVSCAN_LOG` driven subscriber setup
//! - Tokens: comma-list splitting shared by extraction and config
//! - Types: collection aliases

pub mod config;
pub mod errors;
pub mod tokens;
pub mod tracing;
pub mod types;

pub use config::{EnvScanConfig, GroupingSection, InventorySection};
pub use errors::{ConfigError, PatternError};
pub use tokens::split_comma_list;
