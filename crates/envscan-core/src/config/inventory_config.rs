//! Inventory configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the aggregated inventory view.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InventorySection {
    /// Sort each variable's default values instead of keeping encounter order. Default: false.
    pub sort_defaults: Option<bool>,
}

impl InventorySection {
    /// Returns the effective sort flag, defaulting to false.
    pub fn effective_sort_defaults(&self) -> bool {
        self.sort_defaults.unwrap_or(false)
    }
}
