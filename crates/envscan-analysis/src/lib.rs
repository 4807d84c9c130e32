//! envscan-analysis: pattern-based discovery of environment variables.
//!
//! - Usage: names referenced through `process.env` and `env.*` accessors
//! - Defaults: fallback values declared alongside those references
//! - Grouping: names partitioned into start-cased, sorted buckets
//! - Inventory: the three combined over many sources
//!
//! Scanning is textual, not syntactic. Every operation is pure and
//! infallible; text that matches nothing yields an empty result.

pub mod defaults;
pub mod grouping;
pub mod inventory;
pub mod patterns;
pub mod usage;

pub use defaults::{extract_defaults, DefaultsMap};
pub use envscan_core::tokens::split_comma_list;
pub use grouping::{group_variables, Group, GroupingConfig};
pub use inventory::{Inventory, InventoryGroup, InventoryStats, VariableRecord};
pub use patterns::verify_patterns;
pub use usage::{extract_usage, UsageSet};
