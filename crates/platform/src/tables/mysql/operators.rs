// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL operators, spelled as the lexer sees them

use unified_sql_ir::{CapabilityEntry, CapabilityTable};

type Op = CapabilityEntry<&'static str>;

#[rustfmt::skip]
pub const OPERATORS: CapabilityTable<&'static str> = &[
    // assignment
    Op::always(":="),
    // comparison
    Op::always("="), Op::always("<=>"), Op::always("<>"), Op::always("!="),
    Op::always("<"), Op::always("<="), Op::always(">"), Op::always(">="),
    Op::always("IS"), Op::always("IS NOT"), Op::always("LIKE"), Op::always("NOT LIKE"),
    Op::always("REGEXP"), Op::always("NOT REGEXP"), Op::always("RLIKE"), Op::always("NOT RLIKE"),
    Op::always("SOUNDS LIKE"), Op::always("BETWEEN"), Op::always("NOT BETWEEN"),
    Op::always("IN"), Op::always("NOT IN"),
    // arithmetic
    Op::always("+"), Op::always("-"), Op::always("*"), Op::always("/"), Op::always("%"),
    Op::always("DIV"), Op::always("MOD"),
    // bit
    Op::always("&"), Op::always("|"), Op::always("^"), Op::always("~"),
    Op::always("<<"), Op::always(">>"),
    // logical
    Op::always("!"), Op::always("&&"), Op::always("||"),
    Op::always("AND"), Op::always("OR"), Op::always("XOR"), Op::always("NOT"),
    // other
    Op::always("BINARY"), Op::always("COLLATE"),
    Op::since("->", 50709),
    Op::since("->>", 50713),
    Op::since("MEMBER OF", 80017),
];
