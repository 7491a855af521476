// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Master capability tables
//!
//! Compiled-in, version-ranged tables for every capability kind. A family is
//! resolved from one or more layers; later layers override earlier ones where
//! the resolved value is keyed (variables, limits). A layer's `excluded`
//! table withdraws inherited names before its own entries are added.
//!
//! | family | layers |
//! |---|---|
//! | mysql | MySQL tables at the platform id |
//! | maria | MySQL tables at the MariaDB baseline, then MariaDB tables at the platform id |
//! | sql   | none |

pub mod mariadb;
pub mod mysql;

use crate::entity::EntityKind;
use crate::error::{PlatformError, PlatformResult};
use crate::variable::SystemVariable;
use unified_sql_ir::{BaseType, CapabilityTable, Family, VersionId};

/// Name-keyed capability kinds a layer can withdraw from the layers below it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Keyword,
    Reserved,
    Operator,
    Variable,
    Preparable,
}

/// One table per capability kind
#[derive(Debug)]
pub struct TableSet {
    pub keywords: CapabilityTable<&'static str>,
    pub reserved: CapabilityTable<&'static str>,
    pub operators: CapabilityTable<&'static str>,
    pub types: CapabilityTable<BaseType>,
    pub variables: CapabilityTable<SystemVariable>,
    pub preparable: CapabilityTable<&'static str>,
    pub limits: CapabilityTable<(EntityKind, usize)>,
    pub excluded: CapabilityTable<(TableKind, &'static str)>,
}

impl TableSet {
    pub fn len(&self) -> usize {
        self.keywords.len()
            + self.reserved.len()
            + self.operators.len()
            + self.types.len()
            + self.variables.len()
            + self.preparable.len()
            + self.limits.len()
            + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tables to resolve for `family` at `id`, each with the id to filter it at
pub fn layers(family: Family, id: VersionId) -> PlatformResult<Vec<(&'static TableSet, VersionId)>> {
    match family {
        Family::MySql => Ok(vec![(&mysql::TABLES, id)]),
        Family::MariaDb => {
            let baseline = family.mysql_baseline(id).unwrap_or(id);
            Ok(vec![(&mysql::TABLES, baseline), (&mariadb::TABLES, id)])
        }
        Family::Sql => Err(PlatformError::Configuration(format!(
            "no capability tables are registered for family '{}'",
            family
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Debug;

    fn assert_ranges<T: Debug>(table: CapabilityTable<T>) {
        for entry in table {
            assert!(
                entry.introduced <= entry.removed,
                "{:?} is removed before it is introduced",
                entry.value
            );
        }
    }

    #[test]
    fn test_table_ranges_are_ordered() {
        for set in [&mysql::TABLES, &mariadb::TABLES] {
            assert_ranges(set.keywords);
            assert_ranges(set.reserved);
            assert_ranges(set.operators);
            assert_ranges(set.types);
            assert_ranges(set.variables);
            assert_ranges(set.preparable);
            assert_ranges(set.limits);
            assert_ranges(set.excluded);
        }
    }

    #[test]
    fn test_layers() {
        let id = VersionId::from_raw(100899);
        let maria = layers(Family::MariaDb, id).unwrap();
        assert_eq!(maria.len(), 2);
        assert_eq!(maria[0].1, VersionId::from_raw(50799));
        assert_eq!(maria[1].1, id);

        assert_eq!(layers(Family::MySql, id).unwrap().len(), 1);
        assert!(matches!(
            layers(Family::Sql, VersionId::from_raw(2016)),
            Err(PlatformError::Configuration(_))
        ));
    }

    #[test]
    fn test_tables_are_populated() {
        assert!(!mysql::TABLES.is_empty());
        assert!(!mariadb::TABLES.is_empty());
    }
}
