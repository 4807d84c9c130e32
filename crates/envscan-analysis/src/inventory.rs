//! Inventory: every variable across a set of sources, with defaults,
//! organized into groups.

use envscan_core::config::EnvScanConfig;
use serde::{Deserialize, Serialize};

use crate::defaults::{extract_defaults, DefaultsMap};
use crate::grouping::{group_variables, GroupingConfig};
use crate::usage::{extract_usage, UsageSet};

/// One variable and what the sources say about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    /// Distinct defaults observed.
    pub defaults: Vec<String>,
    /// True when no source provides a default.
    pub required: bool,
}

/// A group of variable records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryGroup {
    pub group_name: String,
    pub variables: Vec<VariableRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub sources_scanned: usize,
    pub unique_variables: usize,
    pub with_defaults: usize,
    pub required: usize,
}

/// Grouped view of the configuration surface of a set of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub groups: Vec<InventoryGroup>,
    pub stats: InventoryStats,
}

impl Inventory {
    /// Scan every source for usages and defaults, then group the union of
    /// discovered names.
    ///
    /// Names seen only in a default expression are included. Default lists
    /// from different sources are merged keeping the first occurrence of
    /// each value.
    pub fn from_sources<S: AsRef<str>>(sources: &[S], config: &EnvScanConfig) -> Self {
        let mut names = UsageSet::new();
        let mut defaults = DefaultsMap::new();

        for source in sources {
            let source = source.as_ref();
            for name in &extract_usage(source) {
                names.insert(name);
            }
            for (name, values) in extract_defaults(source).iter() {
                names.insert(name);
                for value in values {
                    defaults.record(name, value.clone());
                }
            }
        }

        let sort_defaults = config.inventory.effective_sort_defaults();
        let names = names.into_vec();
        let groups: Vec<InventoryGroup> = group_variables(&names, &GroupingConfig::from(config))
            .into_iter()
            .map(|group| InventoryGroup {
                group_name: group.group_name,
                variables: group
                    .variables
                    .into_iter()
                    .map(|name| {
                        let mut values = defaults.get(&name).map(<[String]>::to_vec).unwrap_or_default();
                        if sort_defaults {
                            values.sort();
                        }
                        VariableRecord {
                            required: values.is_empty(),
                            defaults: values,
                            name,
                        }
                    })
                    .collect(),
            })
            .collect();

        let stats = InventoryStats {
            sources_scanned: sources.len(),
            unique_variables: names.len(),
            with_defaults: defaults.len(),
            required: names.len() - defaults.len(),
        };

        tracing::debug!(
            sources = stats.sources_scanned,
            variables = stats.unique_variables,
            groups = groups.len(),
            "inventory built"
        );

        Self { groups, stats }
    }

    /// Look up a variable's record by exact name.
    pub fn variable(&self, name: &str) -> Option<&VariableRecord> {
        self.groups
            .iter()
            .flat_map(|group| group.variables.iter())
            .find(|record| record.name == name)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
