// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Families
//!
//! A family is a named SQL dialect lineage with its own versioning scheme.
//!
//! ## Families
//!
//! - **MySQL** (`mysql`): dotted versions, 5.1 through 9.0
//! - **MariaDB** (`maria`): dotted versions, forked from MySQL 5.5, 5.1 through 11.4
//! - **SQL standard** (`sql`): standards-year editions (92, 99, 2003 ... 2023)
//!
//! MySQL and MariaDB form the MySQL lineage: they share syntax, SQL modes and
//! the executable comment convention (`/*!50700 ... */`).

use crate::version::VersionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported dialect families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// MySQL (5.1 - 9.0)
    #[serde(rename = "mysql")]
    MySql,
    /// MariaDB (5.1 - 11.4)
    #[serde(rename = "maria")]
    MariaDb,
    /// SQL standard editions
    Sql,
}

const MYSQL_VERSIONS: &[&str] = &[
    "5.1", "5.5", "5.6", "5.7", "8.0", "8.1", "8.2", "8.3", "8.4", "9.0",
];

const MARIADB_VERSIONS: &[&str] = &[
    "5.1", "5.2", "5.3", "5.5", "10.0", "10.1", "10.2", "10.3", "10.4", "10.5", "10.6", "10.7",
    "10.8", "10.9", "10.10", "10.11", "11.0", "11.1", "11.2", "11.3", "11.4",
];

const SQL_VERSIONS: &[&str] = &["92", "99", "2003", "2008", "2011", "2016", "2019", "2023"];

impl Family {
    pub const ALL: [Family; 3] = [Family::MySql, Family::MariaDb, Family::Sql];

    /// Canonical lower-case name, as used in tags and preset keys
    pub fn name(self) -> &'static str {
        match self {
            Family::MySql => "mysql",
            Family::MariaDb => "maria",
            Family::Sql => "sql",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Family::MySql => "MySQL",
            Family::MariaDb => "MariaDB",
            Family::Sql => "SQL",
        }
    }

    /// MySQL and MariaDB
    pub fn is_mysql_lineage(self) -> bool {
        matches!(self, Family::MySql | Family::MariaDb)
    }

    /// Supported versions at `major.minor` granularity
    pub fn supported_versions(self) -> &'static [&'static str] {
        match self {
            Family::MySql => MYSQL_VERSIONS,
            Family::MariaDb => MARIADB_VERSIONS,
            Family::Sql => SQL_VERSIONS,
        }
    }

    pub fn default_version(self) -> &'static str {
        match self {
            Family::MySql => "8.0",
            Family::MariaDb => "10.11",
            Family::Sql => "2016",
        }
    }

    pub fn supports_version(self, major_minor: &str) -> bool {
        self.supported_versions().contains(&major_minor)
    }

    /// MySQL version whose capability tables this family inherits at `id`
    ///
    /// MariaDB 5.x tracks MySQL 5.x directly, 10.0 and 10.1 were merged up to
    /// MySQL 5.6, and 10.2 onwards follows MySQL 5.7. The SQL standard family
    /// inherits nothing.
    pub fn mysql_baseline(self, id: VersionId) -> Option<VersionId> {
        match self {
            Family::MySql => Some(id),
            Family::MariaDb => Some(match id.as_u32() {
                0..=99_999 => id,
                100_000..=100_199 => VersionId::from_raw(50699),
                _ => VersionId::from_raw(50799),
            }),
            Family::Sql => None,
        }
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Family::MySql),
            "maria" | "mariadb" => Ok(Family::MariaDb),
            "sql" => Ok(Family::Sql),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("mysql".parse::<Family>(), Ok(Family::MySql));
        assert_eq!("MariaDB".parse::<Family>(), Ok(Family::MariaDb));
        assert_eq!("maria".parse::<Family>(), Ok(Family::MariaDb));
        assert_eq!("postgres".parse::<Family>(), Err("postgres".to_string()));
    }

    #[test]
    fn test_lineage() {
        assert!(Family::MySql.is_mysql_lineage());
        assert!(Family::MariaDb.is_mysql_lineage());
        assert!(!Family::Sql.is_mysql_lineage());
    }

    #[test]
    fn test_default_version_is_supported() {
        for family in Family::ALL {
            assert!(family.supports_version(family.default_version()));
        }
    }

    #[test]
    fn test_mysql_baseline() {
        let maria_10_1 = VersionId::from_raw(100199);
        let maria_10_8 = VersionId::from_raw(100899);
        assert_eq!(
            Family::MariaDb.mysql_baseline(maria_10_1),
            Some(VersionId::from_raw(50699))
        );
        assert_eq!(
            Family::MariaDb.mysql_baseline(maria_10_8),
            Some(VersionId::from_raw(50799))
        );
        assert_eq!(
            Family::MySql.mysql_baseline(maria_10_8),
            Some(maria_10_8)
        );
        assert_eq!(Family::Sql.mysql_baseline(VersionId::from_raw(2016)), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Family::MariaDb).unwrap();
        assert_eq!(json, "\"maria\"");
    }
}
