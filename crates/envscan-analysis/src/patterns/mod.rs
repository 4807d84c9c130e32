//! Ordered pattern tables for usage and default extraction.
//!
//! Each table is evaluated in priority order. A pattern that fails to
//! compile is `None` and simply produces no matches.

use std::sync::LazyLock;

use envscan_core::errors::PatternError;
use regex::{Captures, Regex};

/// Declares a lazily compiled pattern together with its source text.
macro_rules! scan_pattern {
    ($name:ident, $source:ident, $regex_str:expr) => {
        pub const $source: &str = $regex_str;
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($source).ok());
    };
}

pub mod defaults;
pub mod usage;

/// Visit every non-overlapping match of `regex` in `text`, left to right.
///
/// Each search runs on the suffix following the previous match. The
/// visitor returns `false` to stop the scan early. Returns the number of
/// matches visited.
pub fn scan_matches<F>(text: &str, regex: &LazyLock<Option<Regex>>, mut visit: F) -> usize
where
    F: FnMut(&Captures<'_>) -> bool,
{
    let Some(re) = regex.as_ref() else { return 0 };

    let mut rest = text;
    let mut visited = 0;
    while !rest.is_empty() {
        let Some(caps) = re.captures(rest) else { break };
        let end = caps.get(0).map_or(0, |m| m.end());
        visited += 1;
        if !visit(&caps) || end == 0 {
            break;
        }
        rest = &rest[end..];
    }
    visited
}

/// Recompile every pattern source and report the first failure.
///
/// Returns the number of patterns checked on success.
pub fn verify_patterns() -> Result<usize, PatternError> {
    let sources = usage::all_patterns()
        .into_iter()
        .map(|p| (p.name, p.source))
        .chain(defaults::all_patterns().into_iter().map(|p| (p.name, p.source)));

    let mut checked = 0;
    for (name, source) in sources {
        Regex::new(source).map_err(|e| PatternError::CompilationFailed {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        checked += 1;
    }
    Ok(checked)
}
