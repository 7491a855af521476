// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MariaDB overlay tables (MariaDB version ids)
//!
//! Only what MariaDB adds to, or changes in, the MySQL tables it inherits.

use super::{TableKind, TableSet};
use crate::entity::EntityKind;
use crate::variable::{SystemVariable, VariableScope, VariableType};
use unified_sql_ir::{BaseType, CapabilityEntry, CapabilityTable};

type Kw = CapabilityEntry<&'static str>;
type Var = CapabilityEntry<SystemVariable>;

pub const SQL_MODE_10_1: &str = "NO_ENGINE_SUBSTITUTION,NO_AUTO_CREATE_USER";

pub const SQL_MODE_10_2: &str =
    "STRICT_TRANS_TABLES,ERROR_FOR_DIVISION_BY_ZERO,NO_AUTO_CREATE_USER,NO_ENGINE_SUBSTITUTION";

const RESERVED: CapabilityTable<&'static str> = &[
    Kw::since("PAGE_CHECKSUM", 50100),
    Kw::since("PARSE_VCOL_EXPR", 50200),
    Kw::since("REF_SYSTEM_ID", 50500),
    Kw::since("RETURNING", 100005),
    Kw::since("DELETE_DOMAIN_ID", 100100),
    Kw::since("DO_DOMAIN_IDS", 100100),
    Kw::since("IGNORE_DOMAIN_IDS", 100100),
    Kw::since("STATS_AUTO_RECALC", 100000),
    Kw::since("STATS_PERSISTENT", 100000),
    Kw::since("STATS_SAMPLE_PAGES", 100000),
    Kw::since("OVER", 100200),
    Kw::since("RECURSIVE", 100200),
    Kw::since("ROWS", 100200),
    Kw::since("WINDOW", 100200),
    Kw::since("EXCEPT", 100300),
    Kw::since("INTERSECT", 100300),
    Kw::since("OFFSET", 100600),
];

const KEYWORDS: CapabilityTable<&'static str> = &[
    Kw::since("DYNAMIC", 50300),
    Kw::since("VIRTUAL", 50200),
    Kw::since("PERSISTENT", 50200),
    Kw::since("GENERATED", 100200),
    Kw::since("STORED", 100200),
    Kw::since("SLAVES", 100000),
    Kw::since("MASTER_GTID_POS", 100000),
    Kw::since("SEQUENCE", 100300),
    Kw::since("INCREMENT", 100300),
    Kw::since("CYCLE", 100300),
    Kw::since("MINVALUE", 100300),
    Kw::since("NOCACHE", 100300),
    Kw::since("NOCYCLE", 100300),
    Kw::since("NOMAXVALUE", 100300),
    Kw::since("NOMINVALUE", 100300),
    Kw::since("INVISIBLE", 100303),
    Kw::since("SYSTEM_TIME", 100304),
    Kw::since("VERSIONING", 100304),
    Kw::since("HISTORY", 100304),
    Kw::since("PERIOD", 100403),
    Kw::since("OVERLAPS", 100503),
    Kw::since("IGNORED", 100600),
    Kw::since("ROWNUM", 100601),
];

const OPERATORS: CapabilityTable<&'static str> = &[Kw::since("MINUS", 100600)];

const TYPES: CapabilityTable<BaseType> = &[
    CapabilityEntry::since(BaseType::Inet6, 100500),
    CapabilityEntry::since(BaseType::Uuid, 100700),
    CapabilityEntry::since(BaseType::Inet4, 101000),
];

const VARIABLES: CapabilityTable<SystemVariable> = &[
    Var::until(
        SystemVariable::new("sql_mode", VariableType::Set, VariableScope::Both, ""),
        100106,
    ),
    Var::between(
        SystemVariable::new(
            "sql_mode",
            VariableType::Set,
            VariableScope::Both,
            SQL_MODE_10_1,
        ),
        100107,
        100203,
    ),
    Var::since(
        SystemVariable::new(
            "sql_mode",
            VariableType::Set,
            VariableScope::Both,
            SQL_MODE_10_2,
        ),
        100204,
    ),
    Var::since(
        SystemVariable::new(
            "gtid_domain_id",
            VariableType::UnsignedInt,
            VariableScope::Both,
            "0",
        ),
        100005,
    ),
    Var::since(
        SystemVariable::new(
            "aria_pagecache_buffer_size",
            VariableType::UnsignedInt,
            VariableScope::Global,
            "134217728",
        )
        .read_only(),
        50100,
    ),
    Var::since(
        SystemVariable::new(
            "system_versioning_alter_history",
            VariableType::Enum,
            VariableScope::Both,
            "ERROR",
        ),
        100302,
    ),
    Var::since(
        SystemVariable::new(
            "explicit_defaults_for_timestamp",
            VariableType::Bool,
            VariableScope::Both,
            "ON",
        ),
        101000,
    ),
];

const PREPARABLE: CapabilityTable<&'static str> = &[
    Kw::since("CREATE SEQUENCE", 100300),
    Kw::since("DROP SEQUENCE", 100300),
    Kw::since("SHOW CREATE SEQUENCE", 100300),
];

const LIMITS: CapabilityTable<(EntityKind, usize)> = &[
    CapabilityEntry::since((EntityKind::UserName, 80), 100000),
    CapabilityEntry::since((EntityKind::Sequence, 64), 100300),
];

/// MySQL entries MariaDB does not have, or only gained later
const EXCLUDED: CapabilityTable<(TableKind, &'static str)> = &[
    CapabilityEntry::always((TableKind::Reserved, "GENERATED")),
    CapabilityEntry::always((TableKind::Reserved, "OPTIMIZER_COSTS")),
    CapabilityEntry::always((TableKind::Reserved, "STORED")),
    CapabilityEntry::always((TableKind::Reserved, "VIRTUAL")),
    CapabilityEntry::always((TableKind::Reserved, "PARSE_GCOL_EXPR")),
    CapabilityEntry::always((TableKind::Operator, "->")),
    CapabilityEntry::always((TableKind::Operator, "->>")),
    CapabilityEntry::always((TableKind::Variable, "default_authentication_plugin")),
    CapabilityEntry::until((TableKind::Variable, "transaction_isolation"), 110099),
    CapabilityEntry::until((TableKind::Variable, "transaction_read_only"), 110099),
];

pub static TABLES: TableSet = TableSet {
    keywords: KEYWORDS,
    reserved: RESERVED,
    operators: OPERATORS,
    types: TYPES,
    variables: VARIABLES,
    preparable: PREPARABLE,
    limits: LIMITS,
    excluded: EXCLUDED,
};
