// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Tests for version-ranged capability filtering

use unified_sql_ir::{CapabilityEntry, Version, filter_for_version};

static FUNCTIONS: &[CapabilityEntry<&str>] = &[
    CapabilityEntry::always("CONCAT"),
    CapabilityEntry::since("JSON_EXTRACT", 50708),
    CapabilityEntry::until("PASSWORD", 80010),
    CapabilityEntry::since("ROW_NUMBER", 80000),
    CapabilityEntry::between("ENCRYPT", 50100, 50799),
];

fn target(text: &str) -> unified_sql_ir::VersionId {
    Version::parse(text).unwrap().id()
}

#[test]
fn test_filter_is_idempotent() {
    for version in ["5.1", "5.6", "5.7", "8.0", "9.0"] {
        let once = filter_for_version(FUNCTIONS, target(version));
        let refiltered: Vec<CapabilityEntry<&str>> = FUNCTIONS
            .iter()
            .filter(|entry| once.contains(&entry.value))
            .cloned()
            .collect();
        let twice = filter_for_version(&refiltered, target(version));
        assert_eq!(once, twice, "version {version}");
    }
}

#[test]
fn test_filter_mysql_57() {
    let funcs = filter_for_version(FUNCTIONS, target("5.7"));
    assert_eq!(funcs, vec!["CONCAT", "JSON_EXTRACT", "PASSWORD", "ENCRYPT"]);
}

#[test]
fn test_filter_mysql_80_patch_levels() {
    let early = filter_for_version(FUNCTIONS, target("8.0.10"));
    assert!(early.contains(&"PASSWORD"));

    let late = filter_for_version(FUNCTIONS, target("8.0.11"));
    assert!(!late.contains(&"PASSWORD"));
    assert!(late.contains(&"ROW_NUMBER"));
}

#[test]
fn test_filter_empty_table() {
    let empty: &[CapabilityEntry<&str>] = &[];
    assert!(filter_for_version(empty, target("8.0")).is_empty());
}
