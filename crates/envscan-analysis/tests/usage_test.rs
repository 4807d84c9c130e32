//! Usage extraction tests.

use envscan_analysis::extract_usage;

/// Dot access and destructuring are both discovered.
#[test]
fn test_dot_and_destructure() {
    let source = r#"
const api = process.env.API_SERVER;
const { NODE_ENV, PORT } = process.env;
"#;
    let usage = extract_usage(source);
    assert_eq!(usage.sorted(), vec!["API_SERVER", "NODE_ENV", "PORT"]);
}

/// Bracket access with either quote style.
#[test]
fn test_bracket_access() {
    let source = r#"
const a = process.env['SINGLE_QUOTED'];
const b = process.env["DOUBLE_QUOTED"];
"#;
    let usage = extract_usage(source);
    assert_eq!(usage.sorted(), vec!["DOUBLE_QUOTED", "SINGLE_QUOTED"]);
}

/// Every `env.*` accessor names its variable.
#[test]
fn test_env_accessors() {
    let source = r#"
module.exports = {
    host: env.string('HOST', 'localhost'),
    debug: env.bool("DEBUG", false),
    port: env.int('PORT', 3000),
    features: env.list('FEATURES', 'enabled features', []),
    settings: env.json("SETTINGS"),
};
"#;
    let usage = extract_usage(source);
    assert_eq!(
        usage.sorted(),
        vec!["DEBUG", "FEATURES", "HOST", "PORT", "SETTINGS"]
    );
}

/// Matching ignores case; names keep theirs.
#[test]
fn test_case_insensitive_matching() {
    let usage = extract_usage("PROCESS.ENV.Mixed_Case; Env.String('lower_name')");
    assert!(usage.contains("Mixed_Case"));
    assert!(usage.contains("lower_name"));
    assert_eq!(usage.len(), 2);
}

/// Several usages on one line are all found.
#[test]
fn test_multiple_matches_per_line() {
    let usage = extract_usage("const url = process.env.HOST + ':' + process.env.PORT;");
    assert_eq!(usage.sorted(), vec!["HOST", "PORT"]);
}

/// A name found by several patterns is recorded once.
#[test]
fn test_deduplicated_across_patterns() {
    let source = "process.env.PORT; process.env['PORT']; env.int('PORT', 1);";
    let usage = extract_usage(source);
    assert_eq!(usage.into_vec(), vec!["PORT"]);
}

/// Earlier patterns run first, so their names come first.
#[test]
fn test_discovery_order_follows_pattern_priority() {
    let usage = extract_usage("process.env.ZETA; process.env['ALPHA'];");
    assert_eq!(usage.into_vec(), vec!["ALPHA", "ZETA"]);
}

/// An empty capture ends that pattern's scan.
#[test]
fn test_empty_capture_stops_pattern() {
    let source = "process.env.\nconst later = process.env.LATER;\nenv.string('KEPT')";
    let usage = extract_usage(source);
    assert!(!usage.contains("LATER"));
    assert!(usage.contains("KEPT"));
}

/// Trailing commas and blank entries in destructuring are dropped.
#[test]
fn test_destructure_blank_entries() {
    let usage = extract_usage("const { A, , B, } = process.env");
    assert_eq!(usage.sorted(), vec!["A", "B"]);
}

/// Destructuring on separate carriage-return lines is split per line.
#[test]
fn test_destructure_carriage_return_lines() {
    let usage = extract_usage("const { A } = process.env\rconst { B } = process.env");
    assert_eq!(usage.sorted(), vec!["A", "B"]);
}

/// Text without any usage sites gives an empty set.
#[test]
fn test_no_matches() {
    assert!(extract_usage("").is_empty());
    assert!(extract_usage("const env = require('dotenv'); console.log(env);").is_empty());
}

/// Serializes as a plain list in discovery order.
#[test]
fn test_serializes_as_list() {
    let usage = extract_usage("process.env['B']; process.env.A");
    assert_eq!(serde_json::to_string(&usage).unwrap(), r#"["B","A"]"#);
}
