// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the platform crate

use std::sync::Arc;
use unified_sql_platform::{
    Charset, Family, ModeFlag, PlatformError, PlatformRegistry, SqlMode, Version, VersionId,
    VersionSpec,
};

#[test]
fn test_mode_text_round_trip() {
    let registry = PlatformRegistry::new();
    let platform = registry.get("mysql", "8.0").unwrap();

    for flag in ModeFlag::ALL.iter().filter(|f| !f.is_deprecated() && !f.is_group()) {
        let mode = SqlMode::from_int(flag.bit() as i64).unwrap();
        let parsed = SqlMode::from_string(&mode.as_string(), &platform).unwrap();
        assert_eq!(parsed.value(), flag.bit(), "{}", flag);
    }

    let primitives: u64 = ModeFlag::ALL
        .iter()
        .filter(|f| !f.is_deprecated() && !f.is_group())
        .fold(0, |bits, f| bits | f.bit());
    let mode = SqlMode::from_int(primitives as i64).unwrap();
    let parsed = SqlMode::from_string(&mode.as_string(), &platform).unwrap();
    assert_eq!(parsed.value(), primitives);
}

#[test]
fn test_groups_expand_to_strict_superset() {
    for group in ModeFlag::ALL.iter().filter(|f| f.is_group()) {
        let mode = SqlMode::from_int(group.bit() as i64).unwrap();
        assert_eq!(mode.value(), group.bit());
        assert!(mode.full_value() & mode.value() == mode.value());
        assert_ne!(mode.full_value(), mode.value(), "{}", group);
        for member in group.expansion() {
            assert!(mode.contains(*member), "{} should imply {}", group, member);
        }
        // text form never substitutes the expansion
        assert_eq!(mode.as_string(), group.name());
    }
}

#[test]
fn test_default_keyword_uses_platform_default() {
    let registry = PlatformRegistry::new();
    let platform = registry.get("mysql", "5.6").unwrap();
    let mode = SqlMode::from_string("default , ANSI_QUOTES", &platform).unwrap();
    assert!(mode.contains(ModeFlag::NoEngineSubstitution));
    assert!(mode.contains(ModeFlag::AnsiQuotes));
    assert!(matches!(
        SqlMode::from_string("ANSI,NOPE", &platform),
        Err(PlatformError::InvalidMode(_))
    ));
}

#[test]
fn test_charset_bijection_and_validation() {
    for charset in Charset::ALL {
        assert_eq!(Charset::from_id(charset.id()).unwrap(), charset);
    }
    assert_eq!(
        Charset::validate_value("CP1250_LATIN2").unwrap(),
        "cp1250_latin2"
    );
    assert_eq!(
        Charset::validate_value("Latin1_KOI8").unwrap(),
        "latin1_koi8r"
    );
    assert!(matches!(
        Charset::validate_value("nope"),
        Err(PlatformError::UnknownCharset(_))
    ));
}

#[test]
fn test_default_modes_by_version() {
    let registry = PlatformRegistry::new();

    let mysql_56 = registry.get("mysql", "5.6").unwrap();
    assert!(mysql_56.default_modes().contains(&"NO_ENGINE_SUBSTITUTION"));
    assert!(!mysql_56.default_modes().contains(&"ERROR_FOR_DIVISION_BY_ZERO"));

    let mysql_80 = registry.get("mysql", "8.0").unwrap();
    assert!(mysql_80.default_modes().contains(&"NO_ENGINE_SUBSTITUTION"));
    assert!(mysql_80.default_modes().contains(&"ERROR_FOR_DIVISION_BY_ZERO"));
}

#[test]
fn test_default_mode_follows_sql_mode_variable() {
    let registry = PlatformRegistry::new();

    let mysql_56 = registry.get("mysql", "5.6").unwrap();
    assert_eq!(mysql_56.default_mode().as_string(), "NO_ENGINE_SUBSTITUTION");

    let mysql_80 = registry.get("mysql", "8.0").unwrap();
    let mode = mysql_80.default_mode();
    assert!(mode.contains(ModeFlag::OnlyFullGroupBy));
    assert!(mode.contains(ModeFlag::ErrorForDivisionByZero));
    assert!(!mode.contains(ModeFlag::NoAutoCreateUser));
    assert!(mode.unsupported_flags(&mysql_80).is_empty());

    let mysql_57 = registry.get("mysql", "5.7").unwrap();
    assert!(mysql_57.default_mode().contains(ModeFlag::NoAutoCreateUser));
    assert_eq!(
        mysql_57.default_mode().unsupported_flags(&mysql_80),
        vec![ModeFlag::NoAutoCreateUser]
    );
}

#[test]
fn test_unsupported_flags() {
    let registry = PlatformRegistry::new();
    let mysql_57 = registry.get("mysql", "5.7").unwrap();
    let maria = registry.get("maria", "10.6").unwrap();

    let mode = SqlMode::from_flags(&[ModeFlag::EmptyStringIsNull, ModeFlag::TimeTruncateFractional]);
    assert_eq!(
        mode.unsupported_flags(&mysql_57),
        vec![ModeFlag::TimeTruncateFractional, ModeFlag::EmptyStringIsNull]
    );
    assert_eq!(
        mode.unsupported_flags(&maria),
        vec![ModeFlag::TimeTruncateFractional]
    );
}

#[test]
fn test_optional_comments() {
    let registry = PlatformRegistry::new();
    let mysql = registry.get("mysql", "8.0").unwrap();
    assert!(mysql.interpret_optional_comment("50708"));

    let maria = registry.get("maria", "10.8").unwrap();
    assert!(!maria.interpret_optional_comment("50708"));
    assert!(maria.interpret_optional_comment("M100500"));

    // MariaDB before 10.0.7 still runs MySQL-tagged comments
    let old_maria = registry
        .get_family(Family::MariaDb, Version::new(10, Some(0), Some(6)))
        .unwrap();
    assert!(old_maria.interpret_optional_comment("50708"));
}

#[test]
fn test_lookup_failures() {
    let registry = PlatformRegistry::new();
    assert!(matches!(
        registry.get("mysql", "9.9"),
        Err(PlatformError::UnknownVersion { .. })
    ));
    assert!(matches!(
        registry.get("postgres", "1.0"),
        Err(PlatformError::UnknownFamily(_))
    ));
    assert!(matches!(
        registry.get("sql", "2011"),
        Err(PlatformError::Configuration(_))
    ));
}

#[test]
fn test_version_spec_forms_share_cache_entry() {
    let registry = PlatformRegistry::new();
    let text = registry.get("maria", "10.6").unwrap();
    let exact = registry
        .get_family(Family::MariaDb, Version::new(10, Some(6), None))
        .unwrap();
    let number = registry.get("maria", 100699u32).unwrap();
    assert!(Arc::ptr_eq(&text, &exact));
    assert!(Arc::ptr_eq(&text, &number));

    let default = registry.get("maria", VersionSpec::Default).unwrap();
    assert_eq!(default.version().to_string(), "10.11");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_mariadb_layers_over_mysql_baseline() {
    let registry = PlatformRegistry::new();
    let maria = registry.get("maria", "10.3").unwrap();

    // inherited from MySQL 5.7
    assert!(maria.is_reserved("ACCESSIBLE"));
    assert!(maria.supports_operator("<=>"));
    // MariaDB's own
    assert!(maria.is_keyword("SEQUENCE"));
    assert!(maria.has_function("NEXTVAL"));
    assert!(maria.is_preparable("CREATE SEQUENCE"));
    // MySQL 8.0 only
    assert!(!maria.has_function("UUID_TO_BIN"));

    let mysql = registry.get("mysql", "8.0").unwrap();
    assert!(!mysql.has_function("NEXTVAL"));
    assert!(mysql.matches(Some("mysql"), Some(VersionId::from_raw(80000)), None));
}

#[test]
fn test_mariadb_drops_mysql_only_entries() {
    let registry = PlatformRegistry::new();
    let maria = registry.get("maria", "10.6").unwrap();

    assert!(!maria.supports_operator("->"));
    assert!(!maria.supports_operator("->>"));
    assert!(maria.variable("default_authentication_plugin").is_none());
    assert!(maria.variable("transaction_isolation").is_none());
    assert!(maria.variable("transaction_read_only").is_none());
    assert!(!maria.is_reserved("OPTIMIZER_COSTS"));
    assert!(!maria.is_keyword("OPTIMIZER_COSTS"));
    // generated column words stay usable as identifiers
    assert!(!maria.is_reserved("GENERATED"));
    assert!(maria.is_keyword("VIRTUAL"));
    assert!(maria.is_keyword("PERSISTENT"));

    let maria_11_1 = registry.get("maria", "11.1").unwrap();
    assert!(maria_11_1.variable("transaction_isolation").is_some());
    assert!(maria_11_1.variable("@@transaction_read_only").is_some());

    let mysql = registry.get("mysql", "5.7").unwrap();
    assert!(mysql.supports_operator("->"));
    assert!(mysql.variable("default_authentication_plugin").is_some());
    assert!(mysql.is_reserved("OPTIMIZER_COSTS"));
}

#[test]
fn test_global_registry() {
    let a = PlatformRegistry::global().get("mysql", "8.4").unwrap();
    let b = PlatformRegistry::global().get("mysql", "8.4").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}
