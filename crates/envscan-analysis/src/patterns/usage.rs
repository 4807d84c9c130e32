//! Usage-site patterns, in priority order.
//!
//! Matching is case-insensitive. Names are ASCII word characters,
//! `(?-u:\w)`. The destructuring pattern runs in CRLF mode, so its
//! capture stops at `\r` as well as `\n`.

use std::sync::LazyLock;

use regex::Regex;

/// How a usage pattern's first capture becomes variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageCapture {
    /// The capture is one identifier.
    Name,
    /// The capture is a comma-separated list of identifiers.
    List,
}

/// A compiled usage pattern.
pub struct UsagePattern {
    pub name: &'static str,
    pub source: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub capture: UsageCapture,
}

// ── process.env['API_SERVER'] ─────────────────────────────────────────────
scan_pattern!(
    RE_BRACKET_SINGLE,
    RE_BRACKET_SINGLE_SRC,
    r"(?i)process\.env\['((?-u:\w)*)'\]"
);

// ── process.env["API_SERVER"] ─────────────────────────────────────────────
scan_pattern!(
    RE_BRACKET_DOUBLE,
    RE_BRACKET_DOUBLE_SRC,
    r#"(?i)process\.env\["((?-u:\w)*)"\]"#
);

// ── process.env.API_SERVER ────────────────────────────────────────────────
scan_pattern!(RE_DOT, RE_DOT_SRC, r"(?i)process\.env\.((?-u:\w)*)");

// ── const { API_SERVER, NODE_ENV } = process.env ──────────────────────────
scan_pattern!(
    RE_DESTRUCTURE,
    RE_DESTRUCTURE_SRC,
    r"(?iR)\{(.*)\}\s*=\s*process\.env"
);

// ── env.string('NAME') and friends ────────────────────────────────────────
scan_pattern!(
    RE_ENV_STRING,
    RE_ENV_STRING_SRC,
    r#"(?i)env\.string\(\s*['|"]((?-u:\w)*)['|"]"#
);
scan_pattern!(
    RE_ENV_BOOL,
    RE_ENV_BOOL_SRC,
    r#"(?i)env\.bool\(\s*['|"]((?-u:\w)*)['|"]"#
);
scan_pattern!(
    RE_ENV_INT,
    RE_ENV_INT_SRC,
    r#"(?i)env\.int\(\s*['|"]((?-u:\w)*)['|"]"#
);
scan_pattern!(
    RE_ENV_LIST,
    RE_ENV_LIST_SRC,
    r#"(?i)env\.list\(\s*['|"]((?-u:\w)*)['|"]"#
);
scan_pattern!(
    RE_ENV_JSON,
    RE_ENV_JSON_SRC,
    r#"(?i)env\.json\(\s*['|"]((?-u:\w)*)['|"]"#
);

/// All usage patterns in evaluation order.
pub fn all_patterns() -> Vec<UsagePattern> {
    vec![
        UsagePattern {
            name: "process_env_bracket_single",
            source: RE_BRACKET_SINGLE_SRC,
            regex: &RE_BRACKET_SINGLE,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "process_env_bracket_double",
            source: RE_BRACKET_DOUBLE_SRC,
            regex: &RE_BRACKET_DOUBLE,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "process_env_dot",
            source: RE_DOT_SRC,
            regex: &RE_DOT,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "process_env_destructure",
            source: RE_DESTRUCTURE_SRC,
            regex: &RE_DESTRUCTURE,
            capture: UsageCapture::List,
        },
        UsagePattern {
            name: "env_string",
            source: RE_ENV_STRING_SRC,
            regex: &RE_ENV_STRING,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "env_bool",
            source: RE_ENV_BOOL_SRC,
            regex: &RE_ENV_BOOL,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "env_int",
            source: RE_ENV_INT_SRC,
            regex: &RE_ENV_INT,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "env_list",
            source: RE_ENV_LIST_SRC,
            regex: &RE_ENV_LIST,
            capture: UsageCapture::Name,
        },
        UsagePattern {
            name: "env_json",
            source: RE_ENV_JSON_SRC,
            regex: &RE_ENV_JSON,
            capture: UsageCapture::Name,
        },
    ]
}
