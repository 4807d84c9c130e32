//! Configuration system for envscan.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod envscan_config;
pub mod grouping_config;
pub mod inventory_config;

pub use envscan_config::{ConfigOverrides, EnvScanConfig};
pub use grouping_config::GroupingSection;
pub use inventory_config::InventorySection;
