//! Default-value patterns, in priority order.
//!
//! Every pattern captures the variable name in group 1 and the raw
//! default value in group 2. Patterns run in CRLF mode, so `.` stops at
//! `\r` as well as `\n`.

use std::sync::LazyLock;

use regex::Regex;

/// How a default pattern's raw value capture becomes the recorded default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCapture {
    /// Recorded exactly as captured.
    Verbatim,
    /// Bracketed list items, flattened into one comma-joined string.
    List,
}

/// A compiled default-value pattern.
pub struct DefaultPattern {
    pub name: &'static str,
    pub source: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub capture: DefaultCapture,
}

// ── process.env.API_SERVER || 'api.example.com' ───────────────────────────
scan_pattern!(
    RE_FALLBACK_SINGLE,
    RE_FALLBACK_SINGLE_SRC,
    r"(?iR)process\.env\.((?-u:\w)*)\s?\|\|\s?'(.*)'"
);

// ── process.env.API_SERVER || "api.example.com" ───────────────────────────
scan_pattern!(
    RE_FALLBACK_DOUBLE,
    RE_FALLBACK_DOUBLE_SRC,
    r#"(?iR)process\.env\.((?-u:\w)*)\s?\|\|\s?"(.*)""#
);

// ── env.string('HOST', 'localhost') ───────────────────────────────────────
scan_pattern!(
    RE_ENV_STRING,
    RE_ENV_STRING_SRC,
    r#"(?iR)env\.string\(\s*['|"]((?-u:\w)*)['|"]\s*,\s*['|"](.*)['|"]"#
);

// ── env.bool('DEBUG', false) ──────────────────────────────────────────────
scan_pattern!(
    RE_ENV_BOOL,
    RE_ENV_BOOL_SRC,
    r#"(?i)env\.bool\(\s*['|"]((?-u:\w)*)['|"]\s*,\s*(true|false)\s*\)"#
);

// ── env.int('PORT', 3000) ─────────────────────────────────────────────────
scan_pattern!(
    RE_ENV_INT,
    RE_ENV_INT_SRC,
    r#"(?iR)env\.int\(\s*['|"]((?-u:\w)*)['|"]\s*,\s*(.*)\s*\)"#
);

// ── env.list('FEATURES', 'description', ['a', 'b']) ───────────────────────
scan_pattern!(
    RE_ENV_LIST,
    RE_ENV_LIST_SRC,
    r#"(?iR)env\.list\(\s*['|"]((?-u:\w)*)['|"]\s*,.*,\s*\[\s*(.*)\s*\]"#
);

/// All default-value patterns in evaluation order.
pub fn all_patterns() -> Vec<DefaultPattern> {
    vec![
        DefaultPattern {
            name: "process_env_fallback_single",
            source: RE_FALLBACK_SINGLE_SRC,
            regex: &RE_FALLBACK_SINGLE,
            capture: DefaultCapture::Verbatim,
        },
        DefaultPattern {
            name: "process_env_fallback_double",
            source: RE_FALLBACK_DOUBLE_SRC,
            regex: &RE_FALLBACK_DOUBLE,
            capture: DefaultCapture::Verbatim,
        },
        DefaultPattern {
            name: "env_string",
            source: RE_ENV_STRING_SRC,
            regex: &RE_ENV_STRING,
            capture: DefaultCapture::Verbatim,
        },
        DefaultPattern {
            name: "env_bool",
            source: RE_ENV_BOOL_SRC,
            regex: &RE_ENV_BOOL,
            capture: DefaultCapture::Verbatim,
        },
        DefaultPattern {
            name: "env_int",
            source: RE_ENV_INT_SRC,
            regex: &RE_ENV_INT,
            capture: DefaultCapture::Verbatim,
        },
        DefaultPattern {
            name: "env_list",
            source: RE_ENV_LIST_SRC,
            regex: &RE_ENV_LIST,
            capture: DefaultCapture::List,
        },
    ]
}
