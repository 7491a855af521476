// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for session configuration and formatting

use unified_sql_platform::{
    BaseType, Charset, Formatter, ModeFlag, PlatformError, PlatformRegistry, SettingsConfig,
};

#[test]
fn test_yaml_config() {
    let yaml = r#"
family: maria
version: "10.6"
delimiter: "$$"
charset: UTF8MB3
sql_mode: DEFAULT,ANSI_QUOTES
quote_all_names: false
optional_equals: false
"#;
    let registry = PlatformRegistry::new();
    let settings = SettingsConfig::from_yaml_str(yaml)
        .unwrap()
        .build(&registry)
        .unwrap();

    assert_eq!(settings.platform().version().to_string(), "10.6");
    assert_eq!(settings.delimiter(), "$$");
    assert_eq!(settings.charset(), Some(Charset::Utf8));
    assert!(settings.mode().contains(ModeFlag::AnsiQuotes));
    assert!(settings.mode().contains(ModeFlag::StrictTransTables));
    assert!(!settings.quote_all_names());
    assert!(settings.canonicalize_types());

    let f = Formatter::new(&settings);
    assert_eq!(f.format_name("orders"), "orders");
    assert_eq!(f.format_name("order"), "\"order\"");
    assert_eq!(f.format_equals(), " ");
}

#[test]
fn test_json_config() {
    let json = r#"{ "family": "mysql", "version": "5.7", "canonicalize_types": false }"#;
    let registry = PlatformRegistry::new();
    let settings = SettingsConfig::from_json_str(json)
        .unwrap()
        .build(&registry)
        .unwrap();

    let f = Formatter::new(&settings);
    assert_eq!(f.format_type(BaseType::Boolean), BaseType::Boolean.as_str());
    assert_eq!(f.format_name("orders"), "`orders`");
}

#[test]
fn test_rejected_values() {
    let registry = PlatformRegistry::new();

    let bad_charset = SettingsConfig::from_json_str(r#"{ "charset": "klingon" }"#).unwrap();
    assert!(matches!(
        bad_charset.build(&registry),
        Err(PlatformError::UnknownCharset(_))
    ));

    let bad_mode = SettingsConfig::from_json_str(r#"{ "sql_mode": "FAST" }"#).unwrap();
    assert!(matches!(
        bad_mode.build(&registry),
        Err(PlatformError::InvalidMode(_))
    ));

    let bad_version = SettingsConfig::from_json_str(r#"{ "version": "4.1" }"#).unwrap();
    assert!(matches!(
        bad_version.build(&registry),
        Err(PlatformError::UnknownVersion { .. })
    ));

    assert!(matches!(
        SettingsConfig::from_yaml_str("family: [mysql"),
        Err(PlatformError::Configuration(_))
    ));
}
