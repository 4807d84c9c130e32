//! Usage extraction: which environment variables does a text reference?

use envscan_core::tokens::split_comma_list;
use envscan_core::types::collections::FxHashSet;
use serde::{Serialize, Serializer};

use crate::patterns::{
    scan_matches,
    usage::{all_patterns, UsageCapture},
};

/// Unique variable names in first-discovery order.
#[derive(Debug, Clone, Default)]
pub struct UsageSet {
    names: Vec<String>,
    index: FxHashSet<String>,
}

impl UsageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains(name) {
            return false;
        }
        self.index.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names sorted lexicographically.
    pub fn sorted(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl PartialEq for UsageSet {
    /// Set equality; discovery order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for UsageSet {}

impl Serialize for UsageSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a UsageSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Extract every environment variable name `source` appears to reference.
///
/// Each pattern scans the full text independently; names found by several
/// patterns are recorded once. A match with an empty capture ends that
/// pattern's scan.
pub fn extract_usage(source: &str) -> UsageSet {
    let mut usage = UsageSet::new();

    for pattern in all_patterns() {
        let mut added = 0usize;
        let matches = scan_matches(source, pattern.regex, |caps| {
            let captured = caps.get(1).map_or("", |m| m.as_str());
            if captured.is_empty() {
                return false;
            }
            match pattern.capture {
                UsageCapture::Name => {
                    if usage.insert(captured) {
                        added += 1;
                    }
                }
                UsageCapture::List => {
                    for token in split_comma_list(captured) {
                        if usage.insert(&token) {
                            added += 1;
                        }
                    }
                }
            }
            true
        });
        tracing::trace!(pattern = pattern.name, matches, added, "usage pattern scanned");
    }

    tracing::debug!(variables = usage.len(), "usage extraction complete");
    usage
}
