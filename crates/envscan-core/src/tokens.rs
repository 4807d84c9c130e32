//! Comma-separated token splitting.

/// Split `value` on commas, trimming each piece and dropping empty ones.
///
/// `"a, b ,, c"` yields `["a", "b", "c"]`; the empty string yields nothing.
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
