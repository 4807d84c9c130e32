//! Grouping configuration.

use serde::{Deserialize, Serialize};

/// Default number of underscore-delimited segments that form a bucket key.
pub const DEFAULT_PREFIX_DEPTH: usize = 2;

/// Configuration for variable grouping.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GroupingSection {
    /// Segments of the variable name used as the bucket key. Default: 2.
    pub prefix_depth: Option<usize>,
    /// Prefixes that force a variable into a named bucket. First match wins.
    #[serde(default)]
    pub prefix_groups: Vec<String>,
}

impl GroupingSection {
    /// Returns the effective prefix depth, defaulting to 2.
    pub fn effective_prefix_depth(&self) -> usize {
        self.prefix_depth.unwrap_or(DEFAULT_PREFIX_DEPTH)
    }
}
