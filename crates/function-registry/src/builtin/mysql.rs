// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL builtin function definitions

use unified_sql_ir::{BaseType, CapabilityEntry, CapabilityTable, FunctionMetadata, FunctionType};

use BaseType::*;

const fn scalar(name: &'static str, return_type: BaseType) -> FunctionMetadata {
    FunctionMetadata::new(name, return_type)
}

const fn any(name: &'static str) -> FunctionMetadata {
    FunctionMetadata::polymorphic(name)
}

const fn aggregate(name: &'static str, return_type: BaseType) -> FunctionMetadata {
    FunctionMetadata::new(name, return_type).with_type(FunctionType::Aggregate)
}

const fn any_aggregate(name: &'static str) -> FunctionMetadata {
    FunctionMetadata::polymorphic(name).with_type(FunctionType::Aggregate)
}

const fn window(name: &'static str, return_type: BaseType) -> FunctionMetadata {
    FunctionMetadata::new(name, return_type).with_type(FunctionType::Window)
}

const fn any_window(name: &'static str) -> FunctionMetadata {
    FunctionMetadata::polymorphic(name).with_type(FunctionType::Window)
}

/// All builtin MySQL functions with the versions they exist in
pub static FUNCTIONS: CapabilityTable<FunctionMetadata> = &[
    // Aggregate functions
    CapabilityEntry::always(
        aggregate("COUNT", BigInt).with_description("Count the number of rows"),
    ),
    CapabilityEntry::always(aggregate("SUM", Decimal).with_description("Sum of values")),
    CapabilityEntry::always(aggregate("AVG", Decimal).with_description("Average of values")),
    CapabilityEntry::always(any_aggregate("MIN").with_description("Minimum value")),
    CapabilityEntry::always(any_aggregate("MAX").with_description("Maximum value")),
    CapabilityEntry::always(
        aggregate("GROUP_CONCAT", Text)
            .with_description("Concatenate values from multiple rows"),
    ),
    CapabilityEntry::always(aggregate("BIT_AND", BigInt)),
    CapabilityEntry::always(aggregate("BIT_OR", BigInt)),
    CapabilityEntry::always(aggregate("BIT_XOR", BigInt)),
    CapabilityEntry::always(aggregate("STD", Double)),
    CapabilityEntry::always(aggregate("STDDEV", Double)),
    CapabilityEntry::always(aggregate("STDDEV_POP", Double)),
    CapabilityEntry::always(aggregate("STDDEV_SAMP", Double)),
    CapabilityEntry::always(aggregate("VARIANCE", Double)),
    CapabilityEntry::always(aggregate("VAR_POP", Double)),
    CapabilityEntry::always(aggregate("VAR_SAMP", Double)),
    CapabilityEntry::since(any_aggregate("ANY_VALUE"), 50705),
    CapabilityEntry::since(aggregate("JSON_ARRAYAGG", Json), 50722),
    CapabilityEntry::since(aggregate("JSON_OBJECTAGG", Json), 50722),
    CapabilityEntry::since(scalar("GROUPING", Int), 80001),
    // Numeric functions
    CapabilityEntry::always(any("ABS").with_description("Absolute value")),
    CapabilityEntry::always(scalar("CEIL", BigInt).with_description("Round up to nearest integer")),
    CapabilityEntry::always(scalar("CEILING", BigInt)),
    CapabilityEntry::always(
        scalar("FLOOR", BigInt).with_description("Round down to nearest integer"),
    ),
    CapabilityEntry::always(any("ROUND").with_description("Round to nearest decimal")),
    CapabilityEntry::always(any("TRUNCATE")),
    CapabilityEntry::always(any("MOD")),
    CapabilityEntry::always(scalar("POW", Double)),
    CapabilityEntry::always(scalar("POWER", Double)),
    CapabilityEntry::always(scalar("SQRT", Double)),
    CapabilityEntry::always(scalar("EXP", Double)),
    CapabilityEntry::always(scalar("LN", Double)),
    CapabilityEntry::always(scalar("LOG", Double)),
    CapabilityEntry::always(scalar("LOG2", Double)),
    CapabilityEntry::always(scalar("LOG10", Double)),
    CapabilityEntry::always(scalar("PI", Double)),
    CapabilityEntry::always(scalar("RAND", Double)),
    CapabilityEntry::always(scalar("SIGN", Int)),
    CapabilityEntry::always(scalar("CRC32", BigInt)),
    CapabilityEntry::always(scalar("CONV", Varchar)),
    // String functions
    CapabilityEntry::always(scalar("CONCAT", Varchar).with_description("Concatenate strings")),
    CapabilityEntry::always(scalar("CONCAT_WS", Varchar)),
    CapabilityEntry::always(scalar("SUBSTRING", Varchar).with_description("Extract substring")),
    CapabilityEntry::always(scalar("SUBSTRING_INDEX", Varchar)),
    CapabilityEntry::always(scalar("LEFT", Varchar)),
    CapabilityEntry::always(scalar("RIGHT", Varchar)),
    CapabilityEntry::always(scalar("LENGTH", BigInt).with_description("String length in bytes")),
    CapabilityEntry::always(scalar("CHAR_LENGTH", BigInt)),
    CapabilityEntry::always(scalar("UPPER", Varchar).with_description("Convert to uppercase")),
    CapabilityEntry::always(scalar("LOWER", Varchar).with_description("Convert to lowercase")),
    CapabilityEntry::always(
        scalar("TRIM", Varchar).with_description("Remove leading/trailing whitespace"),
    ),
    CapabilityEntry::always(scalar("LTRIM", Varchar)),
    CapabilityEntry::always(scalar("RTRIM", Varchar)),
    CapabilityEntry::always(scalar("LPAD", Varchar)),
    CapabilityEntry::always(scalar("RPAD", Varchar)),
    CapabilityEntry::always(scalar("REPLACE", Varchar)),
    CapabilityEntry::always(scalar("REPEAT", Varchar)),
    CapabilityEntry::always(scalar("REVERSE", Varchar)),
    CapabilityEntry::always(scalar("LOCATE", BigInt)),
    CapabilityEntry::always(scalar("INSTR", BigInt)),
    CapabilityEntry::always(scalar("FIELD", BigInt)),
    CapabilityEntry::always(scalar("FIND_IN_SET", BigInt)),
    CapabilityEntry::always(scalar("HEX", Varchar)),
    CapabilityEntry::always(scalar("UNHEX", VarBinary)),
    CapabilityEntry::always(scalar("MD5", Varchar)),
    CapabilityEntry::always(scalar("SHA1", Varchar)),
    CapabilityEntry::since(scalar("SHA2", Varchar), 50505),
    CapabilityEntry::since(scalar("TO_BASE64", Text), 50601),
    CapabilityEntry::since(scalar("FROM_BASE64", LongBlob), 50601),
    CapabilityEntry::since(scalar("RANDOM_BYTES", VarBinary), 50617),
    CapabilityEntry::since(scalar("REGEXP_LIKE", Int), 80004),
    CapabilityEntry::since(scalar("REGEXP_INSTR", BigInt), 80004),
    CapabilityEntry::since(scalar("REGEXP_REPLACE", Text), 80004),
    CapabilityEntry::since(scalar("REGEXP_SUBSTR", Text), 80004),
    // Control flow functions
    CapabilityEntry::always(any("COALESCE").with_description("Return first non-null value")),
    CapabilityEntry::always(any("IFNULL").with_description("Return alternative if null")),
    CapabilityEntry::always(any("NULLIF")),
    CapabilityEntry::always(any("IF")),
    CapabilityEntry::always(any("GREATEST")),
    CapabilityEntry::always(any("LEAST")),
    // Date/Time functions
    CapabilityEntry::always(scalar("NOW", DateTime).with_description("Current date and time")),
    CapabilityEntry::always(scalar("SYSDATE", DateTime)),
    CapabilityEntry::always(scalar("CURDATE", Date).with_description("Current date")),
    CapabilityEntry::always(scalar("CURTIME", Time).with_description("Current time")),
    CapabilityEntry::always(scalar("UTC_TIMESTAMP", DateTime)),
    CapabilityEntry::always(scalar("DATE_FORMAT", Varchar).with_description("Format date/time")),
    CapabilityEntry::always(scalar("STR_TO_DATE", DateTime)),
    CapabilityEntry::always(scalar("DATE_ADD", DateTime).with_description("Add time interval")),
    CapabilityEntry::always(
        scalar("DATE_SUB", DateTime).with_description("Subtract time interval"),
    ),
    CapabilityEntry::always(
        scalar("DATEDIFF", BigInt).with_description("Difference between dates"),
    ),
    CapabilityEntry::always(scalar("TIMESTAMPDIFF", BigInt)),
    CapabilityEntry::always(scalar("UNIX_TIMESTAMP", BigInt)),
    CapabilityEntry::always(scalar("FROM_UNIXTIME", DateTime)),
    CapabilityEntry::always(scalar("CONVERT_TZ", DateTime)),
    CapabilityEntry::always(scalar("LAST_DAY", Date)),
    CapabilityEntry::since(scalar("TO_SECONDS", BigInt), 50500),
    // Encryption and compression
    CapabilityEntry::always(scalar("AES_ENCRYPT", VarBinary)),
    CapabilityEntry::always(scalar("AES_DECRYPT", VarBinary)),
    CapabilityEntry::always(scalar("COMPRESS", VarBinary)),
    CapabilityEntry::always(scalar("UNCOMPRESS", LongBlob)),
    CapabilityEntry::until(scalar("PASSWORD", Varchar), 80010),
    CapabilityEntry::until(scalar("OLD_PASSWORD", Varchar), 50704),
    CapabilityEntry::until(scalar("ENCRYPT", Varchar), 80002),
    CapabilityEntry::until(scalar("ENCODE", VarBinary), 80002),
    CapabilityEntry::until(scalar("DECODE", VarBinary), 80002),
    CapabilityEntry::until(scalar("DES_ENCRYPT", VarBinary), 80002),
    CapabilityEntry::until(scalar("DES_DECRYPT", VarBinary), 80002),
    // Information and miscellaneous functions
    CapabilityEntry::always(scalar("DATABASE", Varchar)),
    CapabilityEntry::always(scalar("USER", Varchar)),
    CapabilityEntry::always(scalar("CURRENT_USER", Varchar)),
    CapabilityEntry::always(scalar("VERSION", Varchar)),
    CapabilityEntry::always(scalar("CONNECTION_ID", BigInt)),
    CapabilityEntry::always(scalar("LAST_INSERT_ID", BigInt)),
    CapabilityEntry::always(scalar("FOUND_ROWS", BigInt)),
    CapabilityEntry::always(scalar("ROW_COUNT", BigInt)),
    CapabilityEntry::always(scalar("UUID", Varchar)),
    CapabilityEntry::always(scalar("UUID_SHORT", BigInt)),
    CapabilityEntry::always(scalar("SLEEP", Int)),
    CapabilityEntry::always(scalar("GET_LOCK", Int)),
    CapabilityEntry::always(scalar("RELEASE_LOCK", Int)),
    CapabilityEntry::always(scalar("INET_ATON", BigInt)),
    CapabilityEntry::always(scalar("INET_NTOA", Varchar)),
    CapabilityEntry::since(scalar("INET6_ATON", VarBinary), 50603),
    CapabilityEntry::since(scalar("INET6_NTOA", Varchar), 50603),
    CapabilityEntry::since(scalar("IS_IPV4", Int), 50603),
    CapabilityEntry::since(scalar("IS_IPV6", Int), 50603),
    CapabilityEntry::since(scalar("GTID_SUBSET", Int), 50605),
    CapabilityEntry::since(scalar("GTID_SUBTRACT", Text), 50605),
    CapabilityEntry::since(scalar("WAIT_FOR_EXECUTED_GTID_SET", Int), 50705),
    CapabilityEntry::since(scalar("UUID_TO_BIN", VarBinary), 80000),
    CapabilityEntry::since(scalar("BIN_TO_UUID", Varchar), 80000),
    CapabilityEntry::since(scalar("IS_UUID", Int), 80000),
    CapabilityEntry::since(scalar("CURRENT_ROLE", Varchar), 80000),
    CapabilityEntry::since(scalar("ICU_VERSION", Varchar), 80004),
    CapabilityEntry::since(scalar("STATEMENT_DIGEST", Varchar), 80004),
    CapabilityEntry::since(scalar("STATEMENT_DIGEST_TEXT", LongText), 80004),
    // Spatial functions
    CapabilityEntry::since(scalar("ST_GEOMFROMTEXT", Geometry), 50601),
    CapabilityEntry::since(scalar("ST_ASTEXT", LongText), 50601),
    CapabilityEntry::since(scalar("ST_DISTANCE", Double), 50606),
    CapabilityEntry::since(scalar("ST_DISTANCE_SPHERE", Double), 50706),
    CapabilityEntry::since(scalar("ST_X", Double), 50601),
    CapabilityEntry::since(scalar("ST_Y", Double), 50601),
    CapabilityEntry::until(scalar("ASTEXT", LongText), 80000),
    CapabilityEntry::until(scalar("GEOMFROMTEXT", Geometry), 80000),
    CapabilityEntry::until(scalar("GLENGTH", Double), 80000),
    // JSON functions
    CapabilityEntry::since(scalar("JSON_ARRAY", Json), 50708),
    CapabilityEntry::since(scalar("JSON_OBJECT", Json), 50708),
    CapabilityEntry::since(scalar("JSON_QUOTE", Json), 50708),
    CapabilityEntry::since(scalar("JSON_CONTAINS", Int), 50708),
    CapabilityEntry::since(scalar("JSON_CONTAINS_PATH", Int), 50708),
    CapabilityEntry::since(scalar("JSON_EXTRACT", Json), 50708),
    CapabilityEntry::since(scalar("JSON_KEYS", Json), 50708),
    CapabilityEntry::since(scalar("JSON_SEARCH", Json), 50708),
    CapabilityEntry::since(scalar("JSON_SET", Json), 50708),
    CapabilityEntry::since(scalar("JSON_INSERT", Json), 50708),
    CapabilityEntry::since(scalar("JSON_REPLACE", Json), 50708),
    CapabilityEntry::since(scalar("JSON_REMOVE", Json), 50708),
    CapabilityEntry::since(scalar("JSON_ARRAY_APPEND", Json), 50708),
    CapabilityEntry::since(scalar("JSON_ARRAY_INSERT", Json), 50708),
    CapabilityEntry::between(scalar("JSON_MERGE", Json), 50708, 80002),
    CapabilityEntry::since(scalar("JSON_MERGE_PATCH", Json), 50722),
    CapabilityEntry::since(scalar("JSON_MERGE_PRESERVE", Json), 50722),
    CapabilityEntry::since(scalar("JSON_TYPE", Varchar), 50708),
    CapabilityEntry::since(scalar("JSON_VALID", Int), 50708),
    CapabilityEntry::since(scalar("JSON_LENGTH", Int), 50708),
    CapabilityEntry::since(scalar("JSON_DEPTH", Int), 50708),
    CapabilityEntry::since(scalar("JSON_UNQUOTE", LongText), 50708),
    CapabilityEntry::since(scalar("JSON_PRETTY", LongText), 50722),
    CapabilityEntry::since(scalar("JSON_STORAGE_SIZE", Int), 50722),
    CapabilityEntry::since(scalar("JSON_STORAGE_FREE", Int), 80002),
    CapabilityEntry::since(scalar("JSON_OVERLAPS", Int), 80017),
    CapabilityEntry::since(scalar("JSON_SCHEMA_VALID", Int), 80017),
    CapabilityEntry::since(scalar("JSON_SCHEMA_VALIDATION_REPORT", Json), 80017),
    CapabilityEntry::since(any("JSON_VALUE"), 80021),
    CapabilityEntry::since(
        FunctionMetadata::polymorphic("JSON_TABLE").with_type(FunctionType::Table),
        80004,
    ),
    // Window functions (MySQL 8.0+)
    CapabilityEntry::since(
        window("ROW_NUMBER", BigInt).with_description("Row number within partition"),
        80002,
    ),
    CapabilityEntry::since(
        window("RANK", BigInt).with_description("Rank within partition"),
        80002,
    ),
    CapabilityEntry::since(
        window("DENSE_RANK", BigInt).with_description("Dense rank within partition"),
        80002,
    ),
    CapabilityEntry::since(window("PERCENT_RANK", Double), 80002),
    CapabilityEntry::since(window("CUME_DIST", Double), 80002),
    CapabilityEntry::since(window("NTILE", BigInt), 80002),
    CapabilityEntry::since(
        any_window("LAG").with_description("Value from previous row"),
        80002,
    ),
    CapabilityEntry::since(
        any_window("LEAD").with_description("Value from next row"),
        80002,
    ),
    CapabilityEntry::since(any_window("FIRST_VALUE"), 80002),
    CapabilityEntry::since(any_window("LAST_VALUE"), 80002),
    CapabilityEntry::since(any_window("NTH_VALUE"), 80002),
];

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_ir::{VersionId, filter_for_version};

    fn names(version: u32) -> Vec<&'static str> {
        filter_for_version(FUNCTIONS, VersionId::from_raw(version))
            .iter()
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn test_has_count() {
        assert!(FUNCTIONS.iter().any(|f| f.value.name == "COUNT"));
    }

    #[test]
    fn test_window_functions_since_80() {
        assert!(!names(50799).contains(&"ROW_NUMBER"));
        assert!(names(80099).contains(&"ROW_NUMBER"));
    }

    #[test]
    fn test_removed_functions() {
        assert!(names(50799).contains(&"PASSWORD"));
        assert!(!names(80099).contains(&"PASSWORD"));
        assert!(!names(80099).contains(&"JSON_MERGE"));
    }

    #[test]
    fn test_names_are_unique_per_version() {
        for version in [50199, 50699, 50799, 80099, 90099] {
            let mut seen = names(version);
            let count = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), count, "duplicate function at {version}");
        }
    }
}
