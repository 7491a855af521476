// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL system variables
//!
//! Variables whose compiled-in default changed are listed once per range.

use crate::variable::{SystemVariable, VariableScope, VariableType};
use unified_sql_ir::{CapabilityEntry, CapabilityTable};

use VariableScope::{Both, Global, Session};
use VariableType::*;

type Var = CapabilityEntry<SystemVariable>;

const fn var(
    name: &'static str,
    var_type: VariableType,
    scope: VariableScope,
    default: &'static str,
) -> SystemVariable {
    SystemVariable::new(name, var_type, scope, default)
}

pub const SQL_MODE_5_6: &str = "NO_ENGINE_SUBSTITUTION";

pub const SQL_MODE_5_7: &str = "ONLY_FULL_GROUP_BY,STRICT_TRANS_TABLES,\
NO_ZERO_IN_DATE,NO_ZERO_DATE,ERROR_FOR_DIVISION_BY_ZERO,\
NO_AUTO_CREATE_USER,NO_ENGINE_SUBSTITUTION";

pub const SQL_MODE_8_0: &str = "ONLY_FULL_GROUP_BY,STRICT_TRANS_TABLES,\
NO_ZERO_IN_DATE,NO_ZERO_DATE,ERROR_FOR_DIVISION_BY_ZERO,\
NO_ENGINE_SUBSTITUTION";

pub const VARIABLES: CapabilityTable<SystemVariable> = &[
    // sql_mode
    Var::until(var("sql_mode", Set, Both, ""), 50605),
    Var::between(var("sql_mode", Set, Both, SQL_MODE_5_6), 50606, 50704),
    Var::between(var("sql_mode", Set, Both, SQL_MODE_5_7), 50705, 79999),
    Var::since(var("sql_mode", Set, Both, SQL_MODE_8_0), 80000),
    // session behaviour
    Var::always(var("autocommit", Bool, Both, "ON")),
    Var::always(var("auto_increment_increment", UnsignedInt, Both, "1")),
    Var::always(var("auto_increment_offset", UnsignedInt, Both, "1")),
    Var::always(var("big_tables", Bool, Both, "OFF")),
    Var::always(var("completion_type", Enum, Both, "NO_CHAIN")),
    Var::always(var("div_precision_increment", UnsignedInt, Both, "4")),
    Var::always(var("foreign_key_checks", Bool, Both, "ON")),
    Var::always(var("unique_checks", Bool, Both, "ON")),
    Var::always(var("group_concat_max_len", UnsignedInt, Both, "1024")),
    Var::always(var("lock_wait_timeout", UnsignedInt, Both, "31536000")),
    Var::always(var("sql_safe_updates", Bool, Both, "OFF")),
    Var::always(var("sql_select_limit", UnsignedInt, Both, "18446744073709551615")),
    Var::always(var("sql_log_bin", Bool, Session, "ON")),
    Var::always(var("time_zone", Str, Both, "SYSTEM")),
    Var::always(var("wait_timeout", UnsignedInt, Both, "28800")),
    Var::always(var("interactive_timeout", UnsignedInt, Both, "28800")),
    Var::always(var("net_read_timeout", UnsignedInt, Both, "30")),
    Var::always(var("net_write_timeout", UnsignedInt, Both, "60")),
    Var::always(var("long_query_time", Float, Both, "10")),
    Var::always(var("optimizer_switch", Set, Both, "")),
    Var::until(var("tx_isolation", Enum, Both, "REPEATABLE-READ"), 80002),
    Var::since(var("transaction_isolation", Enum, Both, "REPEATABLE-READ"), 50720),
    Var::until(var("tx_read_only", Bool, Both, "OFF"), 80002),
    Var::since(var("transaction_read_only", Bool, Both, "OFF"), 50720),
    // character sets
    Var::until(var("character_set_client", Charset, Both, "latin1"), 79999),
    Var::since(var("character_set_client", Charset, Both, "utf8mb4"), 80000),
    Var::until(var("character_set_connection", Charset, Both, "latin1"), 79999),
    Var::since(var("character_set_connection", Charset, Both, "utf8mb4"), 80000),
    Var::until(var("character_set_results", Charset, Both, "latin1"), 79999),
    Var::since(var("character_set_results", Charset, Both, "utf8mb4"), 80000),
    Var::until(var("character_set_server", Charset, Both, "latin1"), 79999),
    Var::since(var("character_set_server", Charset, Both, "utf8mb4"), 80000),
    Var::until(var("collation_connection", Collation, Both, "latin1_swedish_ci"), 79999),
    Var::since(var("collation_connection", Collation, Both, "utf8mb4_0900_ai_ci"), 80000),
    Var::until(var("collation_server", Collation, Both, "latin1_swedish_ci"), 79999),
    Var::since(var("collation_server", Collation, Both, "utf8mb4_0900_ai_ci"), 80000),
    // storage
    Var::until(var("storage_engine", Enum, Both, "InnoDB"), 50704),
    Var::since(var("default_storage_engine", Enum, Both, "InnoDB"), 50503),
    Var::since(var("default_tmp_storage_engine", Enum, Both, "InnoDB"), 50603),
    Var::always(var("innodb_buffer_pool_size", UnsignedInt, Global, "134217728")),
    Var::until(var("max_allowed_packet", UnsignedInt, Both, "4194304"), 80002),
    Var::since(var("max_allowed_packet", UnsignedInt, Both, "67108864"), 80003),
    Var::always(var("max_connections", UnsignedInt, Global, "151")),
    Var::until(var("query_cache_size", UnsignedInt, Global, "1048576"), 80002),
    Var::until(var("query_cache_type", Enum, Both, "OFF"), 80002),
    Var::always(var("binlog_format", Enum, Both, "ROW")),
    Var::between(
        var("explicit_defaults_for_timestamp", Bool, Both, "OFF"),
        50606,
        80001,
    ),
    Var::since(var("explicit_defaults_for_timestamp", Bool, Both, "ON"), 80002),
    Var::since(var("block_encryption_mode", Str, Both, "aes-128-ecb"), 50617),
    Var::between(
        var("default_authentication_plugin", Enum, Global, "mysql_native_password").read_only(),
        50606,
        80003,
    ),
    Var::between(
        var("default_authentication_plugin", Enum, Global, "caching_sha2_password").read_only(),
        80004,
        80399,
    ),
    Var::since(var("cte_max_recursion_depth", UnsignedInt, Both, "1000"), 80003),
    Var::since(var("windowing_use_high_precision", Bool, Both, "ON"), 80002),
    Var::since(var("information_schema_stats_expiry", UnsignedInt, Both, "86400"), 80003),
    Var::since(var("sql_require_primary_key", Bool, Both, "OFF"), 80013),
    // server information
    Var::always(var("version", Str, Global, "").read_only()),
    Var::always(var("version_comment", Str, Global, "").read_only()),
    Var::always(var("lower_case_table_names", UnsignedInt, Global, "0").read_only()),
    Var::always(var("port", UnsignedInt, Global, "3306").read_only()),
];
