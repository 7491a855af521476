// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Naming strategies
//!
//! Identifier conventions of a family: the quote character, how unquoted
//! names fold, and how the server names indexes and constraints the user
//! left unnamed.

use std::fmt;

/// Identifier formatting policy of a family
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Character used to quote identifiers
    fn quote_char(&self) -> char;

    /// How an unquoted identifier is stored
    fn fold_case(&self, name: &str) -> String;

    /// Name for an unnamed index over `columns`
    fn index_name(&self, table: &str, columns: &[&str], existing: &[&str]) -> String;

    /// Name for an unnamed foreign key
    fn foreign_key_name(&self, table: &str, existing: &[&str]) -> String;

    /// Name for an unnamed check constraint
    fn check_name(&self, table: &str, existing: &[&str]) -> String;
}

fn is_taken(name: &str, existing: &[&str]) -> bool {
    existing.iter().any(|e| e.eq_ignore_ascii_case(name))
}

/// First `{prefix}{n}` (n >= 1) not in `existing`
fn next_numbered(prefix: &str, existing: &[&str]) -> String {
    (1usize..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|candidate| !is_taken(candidate, existing))
        .unwrap_or_else(|| prefix.to_string())
}

/// `base`, then `base_2`, `base_3`, ...
fn first_free(base: &str, existing: &[&str]) -> String {
    if !is_taken(base, existing) {
        return base.to_string();
    }
    (2usize..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !is_taken(candidate, existing))
        .unwrap_or_else(|| base.to_string())
}

/// MySQL: backtick quoting, case preserved
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlNaming;

impl NamingStrategy for MySqlNaming {
    fn quote_char(&self) -> char {
        '`'
    }

    fn fold_case(&self, name: &str) -> String {
        name.to_string()
    }

    fn index_name(&self, table: &str, columns: &[&str], existing: &[&str]) -> String {
        first_free(columns.first().copied().unwrap_or(table), existing)
    }

    fn foreign_key_name(&self, table: &str, existing: &[&str]) -> String {
        next_numbered(&format!("{}_ibfk_", table), existing)
    }

    fn check_name(&self, table: &str, existing: &[&str]) -> String {
        next_numbered(&format!("{}_chk_", table), existing)
    }
}

/// MariaDB: as MySQL, except check constraints are `CONSTRAINT_{n}`
#[derive(Debug, Clone, Copy, Default)]
pub struct MariaDbNaming;

impl NamingStrategy for MariaDbNaming {
    fn quote_char(&self) -> char {
        MySqlNaming.quote_char()
    }

    fn fold_case(&self, name: &str) -> String {
        MySqlNaming.fold_case(name)
    }

    fn index_name(&self, table: &str, columns: &[&str], existing: &[&str]) -> String {
        MySqlNaming.index_name(table, columns, existing)
    }

    fn foreign_key_name(&self, table: &str, existing: &[&str]) -> String {
        MySqlNaming.foreign_key_name(table, existing)
    }

    fn check_name(&self, _table: &str, existing: &[&str]) -> String {
        next_numbered("CONSTRAINT_", existing)
    }
}

/// SQL standard: double quotes, unquoted names fold to upper case
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNaming;

impl NamingStrategy for StandardNaming {
    fn quote_char(&self) -> char {
        '"'
    }

    fn fold_case(&self, name: &str) -> String {
        name.to_uppercase()
    }

    fn index_name(&self, table: &str, _columns: &[&str], existing: &[&str]) -> String {
        next_numbered(&format!("{}_IDX_", self.fold_case(table)), existing)
    }

    fn foreign_key_name(&self, table: &str, existing: &[&str]) -> String {
        next_numbered(&format!("{}_FK_", self.fold_case(table)), existing)
    }

    fn check_name(&self, table: &str, existing: &[&str]) -> String {
        next_numbered(&format!("{}_CHK_", self.fold_case(table)), existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_index_names() {
        let naming = MySqlNaming;
        assert_eq!(naming.index_name("t", &["a", "b"], &[]), "a");
        assert_eq!(naming.index_name("t", &["a"], &["a"]), "a_2");
        assert_eq!(naming.index_name("t", &["a"], &["A", "a_2"]), "a_3");
        assert_eq!(naming.index_name("t", &[], &[]), "t");
    }

    #[test]
    fn test_constraint_names() {
        assert_eq!(MySqlNaming.foreign_key_name("orders", &[]), "orders_ibfk_1");
        assert_eq!(
            MySqlNaming.foreign_key_name("orders", &["orders_ibfk_1"]),
            "orders_ibfk_2"
        );
        assert_eq!(MySqlNaming.check_name("orders", &[]), "orders_chk_1");
        assert_eq!(
            MariaDbNaming.check_name("orders", &["CONSTRAINT_1"]),
            "CONSTRAINT_2"
        );
        assert_eq!(StandardNaming.foreign_key_name("orders", &[]), "ORDERS_FK_1");
    }

    #[test]
    fn test_quoting_and_case() {
        assert_eq!(MySqlNaming.quote_char(), '`');
        assert_eq!(MariaDbNaming.fold_case("Orders"), "Orders");
        assert_eq!(StandardNaming.quote_char(), '"');
        assert_eq!(StandardNaming.fold_case("Orders"), "ORDERS");
    }
}
