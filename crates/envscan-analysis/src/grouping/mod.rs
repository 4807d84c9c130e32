//! Grouping of variable names into named, sorted buckets.

pub mod start_case;

use envscan_core::config::grouping_config::DEFAULT_PREFIX_DEPTH;
use envscan_core::config::EnvScanConfig;
use envscan_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub use start_case::start_case;

/// A named bucket of variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_name: String,
    pub variables: Vec<String>,
}

/// How variable names are assigned to buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingConfig {
    /// Leading underscore-delimited segments that form the bucket key.
    pub prefix_depth: usize,
    /// Prefixes that claim a variable outright. The first matching entry wins.
    pub prefix_groups: Vec<String>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            prefix_depth: DEFAULT_PREFIX_DEPTH,
            prefix_groups: Vec::new(),
        }
    }
}

impl From<&EnvScanConfig> for GroupingConfig {
    fn from(config: &EnvScanConfig) -> Self {
        Self {
            prefix_depth: config.grouping.effective_prefix_depth(),
            prefix_groups: config.grouping.prefix_groups.clone(),
        }
    }
}

/// Partition `names` into groups sorted by name, each with sorted variables.
///
/// A name that starts (case-insensitively) with a configured prefix group
/// goes to that prefix's bucket. Otherwise the bucket key is the first
/// `prefix_depth` underscore-separated segments, lower-cased. Keys are
/// rendered in start case. Every input name lands in exactly one group;
/// duplicates in the input are kept.
pub fn group_variables<S: AsRef<str>>(names: &[S], config: &GroupingConfig) -> Vec<Group> {
    let prefix_groups: Vec<String> = config
        .prefix_groups
        .iter()
        .map(|group| group.to_lowercase())
        .collect();

    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        let key = bucket_key(name, &prefix_groups, config.prefix_depth);
        buckets.entry(key).or_default().push(name.to_string());
    }

    tracing::debug!(
        variables = names.len(),
        groups = buckets.len(),
        "variables grouped"
    );

    buckets
        .into_iter()
        .map(|(group_name, mut variables)| {
            variables.sort();
            Group {
                group_name,
                variables,
            }
        })
        .collect()
}

/// Bucket key for one variable name. `prefix_groups` must be lower-cased.
fn bucket_key(name: &str, prefix_groups: &[String], prefix_depth: usize) -> String {
    let lowered = name.to_lowercase();

    // First match wins. An empty prefix matches everything but claims nothing.
    match prefix_groups.iter().find(|group| lowered.starts_with(group.as_str())) {
        Some(group) if !group.is_empty() => start_case(group),
        _ => {
            let prefix = name
                .split('_')
                .take(prefix_depth)
                .collect::<Vec<_>>()
                .join("_");
            start_case(&prefix.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_key_depth() {
        assert_eq!(bucket_key("DB_HOST", &[], 2), "Db Host");
        assert_eq!(bucket_key("DB_HOST", &[], 1), "Db");
        assert_eq!(bucket_key("CACHE", &[], 3), "Cache");
        assert_eq!(bucket_key("DB_HOST", &[], 0), "");
    }

    #[test]
    fn test_bucket_key_first_prefix_wins() {
        let groups = vec!["react".to_string(), "react_app".to_string()];
        assert_eq!(bucket_key("REACT_APP_API", &groups, 2), "React");
    }

    #[test]
    fn test_empty_prefix_group_falls_back_to_depth() {
        let groups = vec![String::new(), "db".to_string()];
        assert_eq!(bucket_key("DB_HOST_NAME", &groups, 2), "Db Host");
    }
}
