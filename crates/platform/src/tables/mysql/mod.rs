// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL master tables (MySQL version ids)

pub mod commands;
pub mod keywords;
pub mod limits;
pub mod operators;
pub mod types;
pub mod variables;

use super::TableSet;

pub static TABLES: TableSet = TableSet {
    keywords: keywords::KEYWORDS,
    reserved: keywords::RESERVED,
    operators: operators::OPERATORS,
    types: types::TYPES,
    variables: variables::VARIABLES,
    preparable: commands::PREPARABLE,
    limits: limits::LIMITS,
    excluded: &[],
};
