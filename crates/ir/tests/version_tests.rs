// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Ordering tests for version ids

use unified_sql_ir::{Version, VersionId};

fn id(major: u32, minor: u32, patch: u32) -> VersionId {
    Version::new(major, Some(minor), Some(patch)).id()
}

#[test]
fn test_id_increases_with_each_component() {
    for major in [1, 5, 8, 10, 11, 90] {
        for minor in [0, 1, 7, 42, 98] {
            for patch in [0, 3, 44, 98] {
                let base = id(major, minor, patch);
                assert!(base < id(major, minor, patch + 1), "patch {major}.{minor}.{patch}");
                assert!(base < id(major, minor + 1, patch), "minor {major}.{minor}.{patch}");
                if major < 90 {
                    assert!(base < id(major + 1, minor, patch), "major {major}.{minor}.{patch}");
                }
            }
        }
    }
}

#[test]
fn test_explicit_patch_sorts_before_omitted_patch() {
    let explicit = Version::parse("8.0.5").unwrap().id();
    let omitted = Version::parse("8.0").unwrap().id();
    assert!(explicit < omitted);

    let patch_99 = Version::parse("8.0.99").unwrap().id();
    assert_eq!(patch_99, omitted);
}

#[test]
fn test_mariadb_ids_sort_after_mysql_ids() {
    let mysql = Version::parse("9.0").unwrap().id();
    let maria = Version::parse("10.0.7").unwrap().id();
    assert_eq!(maria.as_u32(), 100007);
    assert!(mysql < maria);
}

#[test]
fn test_standard_year_ids() {
    let sql92 = Version::parse("92").unwrap().id();
    let sql2016 = Version::parse("2016").unwrap().id();
    assert_eq!(sql92.as_u32(), 92);
    assert_eq!(sql2016.as_u32(), 2016);
    assert!(sql92 < sql2016);
}
