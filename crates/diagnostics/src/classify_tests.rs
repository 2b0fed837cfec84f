// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn config_with_keys(keys: &[&str]) -> RawConfig {
    keys.iter()
        .map(|k| (k.to_string(), serde_json::json!({"command": "node"})))
        .collect()
}

#[rstest]
#[case("filesystem", BuiltIn::Filesystem)]
#[case("file", BuiltIn::Filesystem)]
#[case("fs", BuiltIn::Filesystem)]
#[case("files", BuiltIn::Filesystem)]
#[case("file-system", BuiltIn::Filesystem)]
#[case("context7", BuiltIn::Context7)]
#[case("context-7", BuiltIn::Context7)]
#[case("ctx7", BuiltIn::Context7)]
#[case("docs", BuiltIn::Context7)]
#[case("documentation", BuiltIn::Context7)]
#[case("github", BuiltIn::Github)]
#[case("gh", BuiltIn::Github)]
#[case("github.com", BuiltIn::Github)]
fn test_every_alias_maps_to_its_canonical(#[case] alias: &str, #[case] expected: BuiltIn) {
    assert_eq!(built_in_for(alias), Some(expected));
}

#[test]
fn test_alias_table_covers_every_built_in() {
    for tool in BuiltIn::ALL {
        assert!(
            BUILT_IN_ALIASES.iter().any(|(_, b)| *b == tool),
            "no alias for {tool}"
        );
    }
}

#[test]
fn test_alias_table_has_no_duplicate_spellings() {
    for (i, (alias, _)) in BUILT_IN_ALIASES.iter().enumerate() {
        assert!(
            !BUILT_IN_ALIASES[i + 1..].iter().any(|(other, _)| other == alias),
            "duplicate alias {alias}"
        );
    }
}

#[rstest]
#[case("Filesystem")]
#[case("FILESYSTEM")]
#[case("  filesystem  ")]
#[case("\tGitHub\n")]
fn test_lookup_normalizes_case_and_whitespace(#[case] spelling: &str) {
    assert!(built_in_for(spelling).is_some());
}

#[rstest]
#[case("memory")]
#[case("brave-search")]
#[case("my-filesystem")]
#[case("filesystem2")]
#[case("")]
fn test_unknown_names_are_not_built_ins(#[case] name: &str) {
    assert_eq!(built_in_for(name), None);
}

#[test]
fn test_classify_partitions_mixed_config() {
    let config = config_with_keys(&["filesystem", "memory", "gh", "sqlite"]);
    let result = classify(&config);

    assert!(result.skipped_servers.contains("filesystem"));
    assert!(result.skipped_servers.contains("gh"));
    assert!(result.validated_servers.contains("memory"));
    assert!(result.validated_servers.contains("sqlite"));
}

#[test]
fn test_classify_keeps_original_spelling() {
    let config = config_with_keys(&["  FileSystem "]);
    let result = classify(&config);
    assert!(result.skipped_servers.contains("  FileSystem "));
}

#[test]
fn test_classify_ignores_entry_contents() {
    // A built-in with a broken entry is still skipped, not validated.
    let mut config = RawConfig::new();
    config.insert("filesystem".to_string(), serde_json::json!({"args": 42}));
    let result = classify(&config);
    assert!(result.skipped_servers.contains("filesystem"));
    assert!(result.validated_servers.is_empty());
}

#[test]
fn test_classify_empty_config() {
    let result = classify(&RawConfig::new());
    assert!(result.validated_servers.is_empty());
    assert!(result.skipped_servers.is_empty());
}

#[test]
fn test_skipped_built_ins_reports_canonical() {
    let config = config_with_keys(&["fs", "docs"]);
    let result = classify(&config);
    let skipped = result.skipped_built_ins();
    assert_eq!(
        skipped,
        vec![("docs", BuiltIn::Context7), ("fs", BuiltIn::Filesystem)]
    );
}

proptest! {
    // Partition law: validated and skipped are disjoint and their union is
    // exactly the configured key set, for any input.
    #[test]
    fn prop_classify_is_a_partition(keys in proptest::collection::btree_set("[a-zA-Z0-9_.-]{0,12}", 0..16)) {
        let config: RawConfig = keys
            .iter()
            .map(|k| (k.clone(), serde_json::json!({"command": "x"})))
            .collect();
        let result = classify(&config);

        prop_assert!(result.validated_servers.is_disjoint(&result.skipped_servers));
        let union: std::collections::BTreeSet<String> = result
            .validated_servers
            .union(&result.skipped_servers)
            .cloned()
            .collect();
        prop_assert_eq!(union, keys);
    }

    #[test]
    fn prop_classify_is_idempotent(keys in proptest::collection::btree_set("[a-z-]{1,10}", 0..12)) {
        let config: RawConfig = keys
            .iter()
            .map(|k| (k.clone(), serde_json::Value::Null))
            .collect();
        prop_assert_eq!(classify(&config), classify(&config));
    }
}
