//! Default-value extraction: which fallback values does a text declare?

use envscan_core::types::collections::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::patterns::{
    defaults::{all_patterns, DefaultCapture},
    scan_matches,
};

/// Variable name to distinct default values, both in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsMap {
    entries: Vec<(String, Vec<String>)>,
    index: FxHashMap<String, usize>,
}

impl DefaultsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `name` unless that exact value is already listed.
    /// Returns `true` if the value was added.
    pub fn record(&mut self, name: &str, value: String) -> bool {
        match self.index.get(name) {
            Some(&slot) => {
                let values = &mut self.entries[slot].1;
                if values.contains(&value) {
                    false
                } else {
                    values.push(value);
                    true
                }
            }
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), vec![value]));
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn into_entries(self) -> Vec<(String, Vec<String>)> {
        self.entries
    }
}

impl Serialize for DefaultsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

/// Extract declared default values from `source`.
///
/// Each pattern scans the full text independently. A variable collects
/// every distinct default it is given, in the order they appear. A match
/// with an empty variable name ends that pattern's scan.
pub fn extract_defaults(source: &str) -> DefaultsMap {
    let mut defaults = DefaultsMap::new();

    for pattern in all_patterns() {
        let mut added = 0usize;
        let matches = scan_matches(source, pattern.regex, |caps| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            if name.is_empty() {
                return false;
            }
            let raw = caps.get(2).map_or("", |m| m.as_str());
            let value = match pattern.capture {
                DefaultCapture::Verbatim => raw.to_string(),
                DefaultCapture::List => flatten_list_default(raw),
            };
            if defaults.record(name, value) {
                added += 1;
            }
            true
        });
        tracing::trace!(pattern = pattern.name, matches, added, "default pattern scanned");
    }

    tracing::debug!(variables = defaults.len(), "default extraction complete");
    defaults
}

/// Flatten the items of a bracketed list default into one comma-joined
/// string. Single quotes are read as double quotes. Anything that does not
/// parse as a JSON array body yields an empty string.
pub fn flatten_list_default(raw: &str) -> String {
    let json = format!("[{}]", raw.replace('\'', "\""));
    match serde_json::from_str::<Vec<Value>>(&json) {
        Ok(items) => join_items(&items),
        Err(e) => {
            tracing::trace!(raw, error = %e, "unparseable list default");
            String::new()
        }
    }
}

fn join_items(items: &[Value]) -> String {
    items.iter().map(item_text).collect::<Vec<_>>().join(",")
}

/// Text of a single list item, as a JavaScript array join renders it.
fn item_text(item: &Value) -> String {
    match item {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(inner) => join_items(inner),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates_values() {
        let mut map = DefaultsMap::new();
        assert!(map.record("PORT", "3000".into()));
        assert!(!map.record("PORT", "3000".into()));
        assert!(map.record("PORT", "8080".into()));
        assert_eq!(map.get("PORT").unwrap(), ["3000", "8080"]);
    }

    #[test]
    fn test_flatten_quoted_items() {
        assert_eq!(flatten_list_default("'a','b','c'"), "a,b,c");
        assert_eq!(flatten_list_default(r#""x", "y""#), "x,y");
    }

    #[test]
    fn test_flatten_mixed_items() {
        assert_eq!(flatten_list_default("1, 2.5, 3.0, true, null"), "1,2.5,3,true,");
        assert_eq!(flatten_list_default("['a', 'b'], 'c'"), "a,b,c");
        assert_eq!(flatten_list_default("{}"), "[object Object]");
    }

    #[test]
    fn test_flatten_large_integral_floats() {
        assert_eq!(flatten_list_default("1e20"), "100000000000000000000");
        assert_eq!(flatten_list_default("-1e19"), "-10000000000000000000");
        assert_eq!(flatten_list_default("-0.0, 2e3"), "0,2000");
    }

    #[test]
    fn test_flatten_empty_and_malformed() {
        assert_eq!(flatten_list_default(""), "");
        assert_eq!(flatten_list_default("a, b"), "");
        assert_eq!(flatten_list_default("'it's'"), "");
    }
}
