// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MariaDB-only builtin function definitions
//!
//! Versions are MariaDB ids (`10.3.0` is `100300`).

use unified_sql_ir::{BaseType, CapabilityEntry, CapabilityTable, FunctionMetadata, FunctionType};

use BaseType::*;

const fn scalar(name: &'static str, return_type: BaseType) -> FunctionMetadata {
    FunctionMetadata::new(name, return_type)
}

const fn window(name: &'static str, return_type: BaseType) -> FunctionMetadata {
    FunctionMetadata::new(name, return_type).with_type(FunctionType::Window)
}

const fn any_window(name: &'static str) -> FunctionMetadata {
    FunctionMetadata::polymorphic(name).with_type(FunctionType::Window)
}

/// Functions MariaDB adds on top of its MySQL baseline
pub static FUNCTIONS: CapabilityTable<FunctionMetadata> = &[
    // Dynamic columns
    CapabilityEntry::since(scalar("COLUMN_CREATE", Blob), 50300),
    CapabilityEntry::since(scalar("COLUMN_ADD", Blob), 50300),
    CapabilityEntry::since(scalar("COLUMN_DELETE", Blob), 50300),
    CapabilityEntry::since(scalar("COLUMN_EXISTS", Int), 50300),
    CapabilityEntry::since(scalar("COLUMN_LIST", Text), 50300),
    CapabilityEntry::since(FunctionMetadata::polymorphic("COLUMN_GET"), 50300),
    CapabilityEntry::since(scalar("COLUMN_CHECK", Int), 100002),
    CapabilityEntry::since(scalar("COLUMN_JSON", Text), 100002),
    // Regular expressions
    CapabilityEntry::since(scalar("REGEXP_REPLACE", Text), 100005),
    CapabilityEntry::since(scalar("REGEXP_INSTR", BigInt), 100005),
    CapabilityEntry::since(scalar("REGEXP_SUBSTR", Text), 100005),
    // Window functions
    CapabilityEntry::since(window("ROW_NUMBER", BigInt), 100200),
    CapabilityEntry::since(window("RANK", BigInt), 100200),
    CapabilityEntry::since(window("DENSE_RANK", BigInt), 100200),
    CapabilityEntry::since(window("PERCENT_RANK", Double), 100200),
    CapabilityEntry::since(window("CUME_DIST", Double), 100200),
    CapabilityEntry::since(window("NTILE", BigInt), 100200),
    CapabilityEntry::since(any_window("LAG"), 100200),
    CapabilityEntry::since(any_window("LEAD"), 100200),
    CapabilityEntry::since(any_window("FIRST_VALUE"), 100200),
    CapabilityEntry::since(any_window("LAST_VALUE"), 100200),
    CapabilityEntry::since(any_window("NTH_VALUE"), 100200),
    CapabilityEntry::since(any_window("MEDIAN"), 100300),
    CapabilityEntry::since(any_window("PERCENTILE_CONT"), 100300),
    CapabilityEntry::since(any_window("PERCENTILE_DISC"), 100300),
    // JSON functions
    CapabilityEntry::since(FunctionMetadata::polymorphic("JSON_VALUE"), 100202),
    CapabilityEntry::since(scalar("JSON_QUERY", Json), 100202),
    CapabilityEntry::since(scalar("JSON_EXISTS", Int), 100203),
    CapabilityEntry::since(scalar("JSON_DETAILED", LongText), 100204),
    CapabilityEntry::since(scalar("JSON_COMPACT", LongText), 100204),
    CapabilityEntry::since(scalar("JSON_LOOSE", LongText), 100204),
    CapabilityEntry::since(
        FunctionMetadata::polymorphic("JSON_TABLE").with_type(FunctionType::Table),
        100600,
    ),
    CapabilityEntry::since(scalar("JSON_EQUALS", Int), 100700),
    CapabilityEntry::since(scalar("JSON_NORMALIZE", LongText), 100700),
    CapabilityEntry::since(scalar("JSON_OVERLAPS", Int), 100900),
    // Sequences
    CapabilityEntry::since(scalar("NEXTVAL", BigInt), 100300),
    CapabilityEntry::since(scalar("LASTVAL", BigInt), 100300),
    CapabilityEntry::since(scalar("SETVAL", BigInt), 100300),
    // Oracle compatibility
    CapabilityEntry::since(scalar("DECODE_ORACLE", Varchar), 100302),
    CapabilityEntry::since(scalar("LENGTHB", BigInt), 100301),
    CapabilityEntry::since(scalar("ADD_MONTHS", Date), 100601),
    CapabilityEntry::since(scalar("TO_CHAR", Varchar), 100601),
    CapabilityEntry::since(scalar("SYS_GUID", Varchar), 100601),
    // Miscellaneous
    CapabilityEntry::since(scalar("SFORMAT", LongText), 100701),
    CapabilityEntry::since(scalar("NATURAL_SORT_KEY", Varchar), 100702),
    CapabilityEntry::since(scalar("KDF", VarBinary), 110300),
];

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_ir::{VersionId, filter_for_version};

    #[test]
    fn test_sequences_since_103() {
        let at_102: Vec<_> = filter_for_version(FUNCTIONS, VersionId::from_raw(100299))
            .iter()
            .map(|f| f.name)
            .collect();
        let at_103: Vec<_> = filter_for_version(FUNCTIONS, VersionId::from_raw(100399))
            .iter()
            .map(|f| f.name)
            .collect();
        assert!(!at_102.contains(&"NEXTVAL"));
        assert!(at_103.contains(&"NEXTVAL"));
        assert!(at_102.contains(&"ROW_NUMBER"));
    }
}
