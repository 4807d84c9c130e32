//! Grouping tests.

use envscan_analysis::{group_variables, Group, GroupingConfig};
use envscan_core::EnvScanConfig;

fn group(name: &str, variables: &[&str]) -> Group {
    Group {
        group_name: name.to_string(),
        variables: variables.iter().map(|v| v.to_string()).collect(),
    }
}

fn depth(prefix_depth: usize) -> GroupingConfig {
    GroupingConfig {
        prefix_depth,
        ..Default::default()
    }
}

/// The default depth keys on the first two segments.
#[test]
fn test_default_depth_two() {
    let groups = group_variables(&["DB_HOST", "DB_PORT", "CACHE_TTL"], &GroupingConfig::default());
    assert_eq!(
        groups,
        vec![
            group("Cache Ttl", &["CACHE_TTL"]),
            group("Db Host", &["DB_HOST"]),
            group("Db Port", &["DB_PORT"]),
        ]
    );
}

/// Depth one keys on the first segment only.
#[test]
fn test_depth_one() {
    let groups = group_variables(&["DB_PORT", "CACHE_TTL", "DB_HOST"], &depth(1));
    assert_eq!(
        groups,
        vec![
            group("Cache", &["CACHE_TTL"]),
            group("Db", &["DB_HOST", "DB_PORT"]),
        ]
    );
}

/// Names shorter than the depth use every segment they have.
#[test]
fn test_short_names() {
    let groups = group_variables(&["PORT", "AWS_S3_BUCKET_NAME"], &depth(3));
    assert_eq!(
        groups,
        vec![
            group("Aws S 3 Bucket", &["AWS_S3_BUCKET_NAME"]),
            group("Port", &["PORT"]),
        ]
    );
}

/// Prefix groups claim matching names regardless of depth.
#[test]
fn test_prefix_groups() {
    let config = GroupingConfig {
        prefix_depth: 2,
        prefix_groups: vec!["REACT_APP".to_string()],
    };
    let groups = group_variables(
        &["REACT_APP_TITLE", "NODE_ENV", "react_app_api_url"],
        &config,
    );
    assert_eq!(
        groups,
        vec![
            group("Node Env", &["NODE_ENV"]),
            group("React App", &["REACT_APP_TITLE", "react_app_api_url"]),
        ]
    );
}

/// The first configured prefix that matches wins, even if a later one is longer.
#[test]
fn test_first_matching_prefix_wins() {
    let config = GroupingConfig {
        prefix_depth: 2,
        prefix_groups: vec!["next".to_string(), "next_public".to_string()],
    };
    let groups = group_variables(&["NEXT_PUBLIC_URL"], &config);
    assert_eq!(groups, vec![group("Next", &["NEXT_PUBLIC_URL"])]);
}

/// Mixed-case names are keyed on their lower-cased form.
#[test]
fn test_mixed_case_names_share_bucket() {
    let groups = group_variables(&["Db_Host", "DB_HOST"], &GroupingConfig::default());
    assert_eq!(groups, vec![group("Db Host", &["DB_HOST", "Db_Host"])]);
}

/// Duplicate input names are kept.
#[test]
fn test_duplicates_kept() {
    let groups = group_variables(&["API_KEY", "API_KEY"], &depth(1));
    assert_eq!(groups, vec![group("Api", &["API_KEY", "API_KEY"])]);
}

/// No names, no groups.
#[test]
fn test_empty_input() {
    let names: [&str; 0] = [];
    assert!(group_variables(&names, &GroupingConfig::default()).is_empty());
}

/// Output fields use camelCase names.
#[test]
fn test_group_serialization() {
    let groups = group_variables(&["DB_HOST"], &depth(1));
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json, serde_json::json!([{ "groupName": "Db", "variables": ["DB_HOST"] }]));
}

/// Grouping settings come from the resolved configuration.
#[test]
fn test_config_from_toml() {
    let config = EnvScanConfig::from_toml(
        r#"
[grouping]
prefix_depth = 1
prefix_groups = ["aws"]
"#,
    )
    .unwrap();
    let grouping = GroupingConfig::from(&config);
    assert_eq!(grouping.prefix_depth, 1);
    assert_eq!(grouping.prefix_groups, vec!["aws"]);

    let defaults = GroupingConfig::from(&EnvScanConfig::default());
    assert_eq!(defaults, GroupingConfig::default());
}
