// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Platform
//!
//! A [`Platform`] is the resolved capability snapshot of one family at one
//! version. It is built once from the master tables (see [`crate::tables`])
//! and the builtin function tables, and is read-only afterwards except for
//! the ambient "current version".
//!
//! Platforms are obtained through a [`crate::PlatformRegistry`], which caches
//! them per `(family, version id)`.

use crate::entity::EntityKind;
use crate::error::PlatformResult;
use crate::naming::{MariaDbNaming, MySqlNaming, NamingStrategy, StandardNaming};
use crate::sql_mode::{ModeFlag, SqlMode};
use crate::tables::{self, TableKind};
use crate::variable::SystemVariable;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::RwLock;
use tracing::{debug, info};
use unified_sql_function_registry::FunctionRegistry;
use unified_sql_ir::{BaseType, Family, FunctionMetadata, Version, VersionId, filter_for_version};

/// MySQL-tagged executable comments in this band are ignored by MariaDB
const MARIADB_IGNORED_TAGS: std::ops::RangeInclusive<u32> = 50700..=99999;

/// First MariaDB version that ignores [`MARIADB_IGNORED_TAGS`]
const MARIADB_TAG_CUTOFF: u32 = 100007;

const MODES_MYSQL_5_6: &[&str] = &["NO_ENGINE_SUBSTITUTION"];

const MODES_MYSQL_5_7: &[&str] = &[
    "ONLY_FULL_GROUP_BY",
    "STRICT_TRANS_TABLES",
    "NO_ZERO_IN_DATE",
    "NO_ZERO_DATE",
    "ERROR_FOR_DIVISION_BY_ZERO",
    "NO_AUTO_CREATE_USER",
    "NO_ENGINE_SUBSTITUTION",
];

const MODES_MYSQL_8_0: &[&str] = &[
    "ONLY_FULL_GROUP_BY",
    "STRICT_TRANS_TABLES",
    "NO_ZERO_IN_DATE",
    "NO_ZERO_DATE",
    "ERROR_FOR_DIVISION_BY_ZERO",
    "NO_ENGINE_SUBSTITUTION",
];

const MODES_MARIA_10_1: &[&str] = &["NO_ENGINE_SUBSTITUTION", "NO_AUTO_CREATE_USER"];

const MODES_MARIA_10_2: &[&str] = &[
    "STRICT_TRANS_TABLES",
    "ERROR_FOR_DIVISION_BY_ZERO",
    "NO_AUTO_CREATE_USER",
    "NO_ENGINE_SUBSTITUTION",
];

/// Historical default mode lists, keyed by family and `major.minor`
const MODE_PRESETS: &[(Family, Version, &[&str])] = &[
    (Family::MySql, Version::new(5, Some(1), None), &[]),
    (Family::MySql, Version::new(5, Some(5), None), &[]),
    (Family::MySql, Version::new(5, Some(6), None), MODES_MYSQL_5_6),
    (Family::MySql, Version::new(5, Some(7), None), MODES_MYSQL_5_7),
    (Family::MySql, Version::new(8, Some(0), None), MODES_MYSQL_8_0),
    (Family::MySql, Version::new(8, Some(1), None), MODES_MYSQL_8_0),
    (Family::MySql, Version::new(8, Some(2), None), MODES_MYSQL_8_0),
    (Family::MySql, Version::new(8, Some(3), None), MODES_MYSQL_8_0),
    (Family::MySql, Version::new(8, Some(4), None), MODES_MYSQL_8_0),
    (Family::MySql, Version::new(9, Some(0), None), MODES_MYSQL_8_0),
    (Family::MariaDb, Version::new(10, Some(1), None), MODES_MARIA_10_1),
    (Family::MariaDb, Version::new(10, Some(2), None), MODES_MARIA_10_2),
];

/// Resolved capabilities of one family at one version
#[derive(Debug)]
pub struct Platform {
    family: Family,
    version: Version,
    id: VersionId,
    current_version: RwLock<Version>,
    reserved: HashSet<&'static str>,
    keywords: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    types: HashSet<BaseType>,
    functions: HashMap<String, FunctionMetadata>,
    variables: HashMap<&'static str, SystemVariable>,
    preparable: HashSet<&'static str>,
    limits: HashMap<EntityKind, usize>,
    default_mode: SqlMode,
}

impl Platform {
    /// Resolve every capability table of `family` at `version`
    ///
    /// Fails with a configuration error for a family without tables.
    pub fn build(
        family: Family,
        version: Version,
        functions: &FunctionRegistry,
    ) -> PlatformResult<Self> {
        let id = version.id();
        let mut reserved = HashSet::new();
        let mut keywords = HashSet::new();
        let mut operators = HashSet::new();
        let mut types = HashSet::new();
        let mut variables = HashMap::new();
        let mut preparable = HashSet::new();
        let mut limits = HashMap::new();

        for (set, target) in tables::layers(family, id)? {
            debug!("Resolving {} table entries at {}", set.len(), target);
            for (kind, name) in filter_for_version(set.excluded, target) {
                match kind {
                    TableKind::Keyword => keywords.remove(name),
                    TableKind::Reserved => reserved.remove(name),
                    TableKind::Operator => operators.remove(name),
                    TableKind::Variable => variables.remove(name).is_some(),
                    TableKind::Preparable => preparable.remove(name),
                };
            }
            reserved.extend(filter_for_version(set.reserved, target));
            keywords.extend(filter_for_version(set.keywords, target));
            operators.extend(filter_for_version(set.operators, target));
            types.extend(filter_for_version(set.types, target));
            preparable.extend(filter_for_version(set.preparable, target));
            for variable in filter_for_version(set.variables, target) {
                variables.insert(variable.name, variable);
            }
            for (kind, length) in filter_for_version(set.limits, target) {
                limits.insert(kind, length);
            }
        }
        keywords.retain(|word| !reserved.contains(word));

        let functions: HashMap<String, FunctionMetadata> = functions
            .functions_for(family, id)
            .into_iter()
            .map(|f| (f.name.to_ascii_uppercase(), f))
            .collect();

        let default_mode = if family.is_mysql_lineage() {
            match variables.get("sql_mode") {
                Some(variable) => variable.default.parse::<SqlMode>()?,
                None => SqlMode::empty(),
            }
        } else {
            SqlMode::from(ModeFlag::Ansi)
        };

        info!(
            "Built platform {} {}: {} reserved, {} keywords, {} operators, {} types, {} functions, {} variables",
            family.display_name(),
            version,
            reserved.len(),
            keywords.len(),
            operators.len(),
            types.len(),
            functions.len(),
            variables.len()
        );

        Ok(Self {
            family,
            version,
            id,
            current_version: RwLock::new(version),
            reserved,
            keywords,
            operators,
            types,
            functions,
            variables,
            preparable,
            limits,
            default_mode,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// The version this platform was resolved for
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn id(&self) -> VersionId {
        self.id
    }

    /// Every supported version of the family
    pub fn versions(&self) -> &'static [&'static str] {
        self.family.supported_versions()
    }

    pub fn default_version(&self) -> &'static str {
        self.family.default_version()
    }

    pub fn is_mysql_lineage(&self) -> bool {
        self.family.is_mysql_lineage()
    }

    /// The ambient version used for display
    pub fn current_version(&self) -> Version {
        match self.current_version.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_current_version(&self, version: Version) {
        match self.current_version.write() {
            Ok(mut guard) => *guard = version,
            Err(poisoned) => *poisoned.into_inner() = version,
        }
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word.trim().to_ascii_uppercase().as_str())
    }

    /// Reserved or non-reserved keyword
    pub fn is_keyword(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.reserved.contains(word.as_str()) || self.keywords.contains(word.as_str())
    }

    /// Reserved words, sorted
    pub fn reserved_words(&self) -> Vec<&'static str> {
        sorted(&self.reserved)
    }

    /// Keywords that are not reserved, sorted
    pub fn non_reserved_words(&self) -> Vec<&'static str> {
        sorted(&self.keywords)
    }

    pub fn supports_operator(&self, operator: &str) -> bool {
        self.operators
            .contains(normalize_words(operator).as_str())
    }

    pub fn supports_type(&self, base_type: BaseType) -> bool {
        self.types.contains(&base_type)
    }

    /// Builtin function by name (case-insensitive)
    pub fn function(&self, name: &str) -> Option<&FunctionMetadata> {
        self.functions.get(&name.trim().to_ascii_uppercase())
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.function(name).is_some()
    }

    /// System variable by name (case-insensitive, optional `@@` prefix)
    pub fn variable(&self, name: &str) -> Option<&SystemVariable> {
        let name = name.trim();
        let name = name.strip_prefix("@@").unwrap_or(name);
        self.variables.get(name.to_ascii_lowercase().as_str())
    }

    /// Whether `command` may be used in a prepared statement
    pub fn is_preparable(&self, command: &str) -> bool {
        self.preparable
            .contains(normalize_words(command).as_str())
    }

    /// Maximum name length of `kind`, if the family limits it
    pub fn max_length(&self, kind: EntityKind) -> Option<usize> {
        self.limits.get(&kind).copied()
    }

    /// Whether this platform falls into a family and version id range
    ///
    /// `None` leaves that side unconstrained; bounds are inclusive.
    pub fn matches(
        &self,
        name: Option<&str>,
        min_id: Option<VersionId>,
        max_id: Option<VersionId>,
    ) -> bool {
        let family_matches = match name {
            Some(name) => name.parse::<Family>().map(|f| f == self.family).unwrap_or(false),
            None => true,
        };
        family_matches
            && min_id.is_none_or(|min| self.id >= min)
            && max_id.is_none_or(|max| self.id <= max)
    }

    /// Whether an executable comment tagged `tag` (`/*!50708 ... */`,
    /// `/*M!100300 ... */`) is executed on this platform
    pub fn interpret_optional_comment(&self, tag: &str) -> bool {
        if !self.family.is_mysql_lineage() {
            return false;
        }

        let tag = tag.trim();
        let (maria_only, digits) = match tag.strip_prefix(['M', 'm']) {
            Some(rest) => (true, rest),
            None => (false, tag),
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let number: u32 = if digits.is_empty() {
            0
        } else {
            match digits.parse() {
                Ok(number) => number,
                Err(_) => return false,
            }
        };

        if number == 0 {
            return true;
        }
        if maria_only && self.family != Family::MariaDb {
            return false;
        }
        if !maria_only
            && self.family == Family::MariaDb
            && MARIADB_IGNORED_TAGS.contains(&number)
            && self.id.as_u32() >= MARIADB_TAG_CUTOFF
        {
            return false;
        }
        number < self.id.as_u32()
    }

    /// Default mode of a fresh session
    ///
    /// MySQL lineage derives it from the `sql_mode` variable default, other
    /// families use `ANSI`.
    pub fn default_mode(&self) -> SqlMode {
        self.default_mode
    }

    /// Historical default mode list for this version
    ///
    /// MariaDB 10.2 and later without their own preset use the nearest lower
    /// MariaDB preset.
    pub fn default_modes(&self) -> &'static [&'static str] {
        let key = self.version.major_minor();
        if let Some((_, _, modes)) = MODE_PRESETS
            .iter()
            .find(|(family, version, _)| *family == self.family && version.major_minor() == key)
        {
            return *modes;
        }

        if self.family == Family::MariaDb && self.id >= Version::new(10, Some(2), Some(0)).id() {
            let nearest = MODE_PRESETS
                .iter()
                .filter(|(family, version, _)| *family == Family::MariaDb && version.id() <= self.id)
                .max_by_key(|(_, version, _)| version.id());
            if let Some((_, version, modes)) = nearest {
                debug!(
                    "No default mode preset for {} {}, using {}",
                    self.family, key, version
                );
                return *modes;
            }
        }
        &[]
    }

    pub fn naming_strategy(&self) -> &'static dyn NamingStrategy {
        match self.family {
            Family::MySql => &MySqlNaming,
            Family::MariaDb => &MariaDbNaming,
            Family::Sql => &StandardNaming,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family.display_name(), self.current_version())
    }
}

fn sorted(words: &HashSet<&'static str>) -> Vec<&'static str> {
    let mut words: Vec<_> = words.iter().copied().collect();
    words.sort_unstable();
    words
}

/// Upper case with single spaces between words
fn normalize_words(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(family: Family, version: &str) -> Platform {
        Platform::build(family, Version::parse(version).unwrap(), &FunctionRegistry::new()).unwrap()
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let platform = build(Family::MySql, "8.0");
        assert!(platform.is_reserved("select"));
        assert!(platform.is_keyword("Select"));
        assert!(!platform.is_reserved("NOT_A_KEYWORD"));
    }

    #[test]
    fn test_reserved_and_non_reserved_are_disjoint() {
        let platform = build(Family::MariaDb, "10.6");
        let reserved: HashSet<_> = platform.reserved_words().into_iter().collect();
        for word in platform.non_reserved_words() {
            assert!(!reserved.contains(word), "{}", word);
        }
    }

    #[test]
    fn test_sql_family_has_no_tables() {
        let result = Platform::build(
            Family::Sql,
            Version::parse("2016").unwrap(),
            &FunctionRegistry::new(),
        );
        assert!(matches!(
            result,
            Err(crate::PlatformError::Configuration(_))
        ));
    }

    #[test]
    fn test_mariadb_overrides_inherited_variable() {
        let platform = build(Family::MariaDb, "10.3");
        let sql_mode = platform.variable("@@SQL_MODE").unwrap();
        assert_eq!(sql_mode.default, tables::mariadb::SQL_MODE_10_2);
    }

    #[test]
    fn test_current_version() {
        let platform = build(Family::MySql, "8.0");
        assert_eq!(platform.to_string(), "MySQL 8.0");
        platform.set_current_version(Version::parse("8.0.36").unwrap());
        assert_eq!(platform.current_version().to_string(), "8.0.36");
        assert_eq!(platform.version().to_string(), "8.0");
        assert_eq!(platform.to_string(), "MySQL 8.0.36");
    }

    #[test]
    fn test_matches() {
        let platform = build(Family::MySql, "5.7");
        assert!(platform.matches(None, None, None));
        assert!(platform.matches(Some("MySQL"), Some(VersionId::from_raw(50700)), None));
        assert!(!platform.matches(Some("maria"), None, None));
        assert!(!platform.matches(None, Some(VersionId::from_raw(80000)), None));
        assert!(!platform.matches(None, None, Some(VersionId::from_raw(50600))));
    }

    #[test]
    fn test_optional_comment_rules() {
        let mysql = build(Family::MySql, "8.0");
        assert!(mysql.interpret_optional_comment(""));
        assert!(mysql.interpret_optional_comment("50708"));
        assert!(!mysql.interpret_optional_comment("90000"));
        assert!(!mysql.interpret_optional_comment("M100300"));
        assert!(!mysql.interpret_optional_comment("abc"));

        let maria = build(Family::MariaDb, "10.8");
        assert!(maria.interpret_optional_comment("M100300"));
        assert!(maria.interpret_optional_comment("m0"));
        assert!(maria.interpret_optional_comment("40101"));
        assert!(!maria.interpret_optional_comment("50708"));
    }

    #[test]
    fn test_supports_type_and_limits() {
        let mysql_57 = build(Family::MySql, "5.7");
        assert!(mysql_57.supports_type(BaseType::Json));
        assert!(!mysql_57.supports_type(BaseType::Vector));
        assert_eq!(mysql_57.max_length(EntityKind::UserName), Some(32));

        let maria = build(Family::MariaDb, "10.11");
        assert!(maria.supports_type(BaseType::Inet4));
        assert_eq!(maria.max_length(EntityKind::UserName), Some(80));
        assert_eq!(maria.max_length(EntityKind::Sequence), Some(64));
    }

    #[test]
    fn test_functions_and_commands() {
        let platform = build(Family::MySql, "8.0");
        assert!(platform.has_function("json_table"));
        assert!(platform.is_preparable("alter   table"));
        assert!(!platform.is_preparable("EXPLODE"));
    }

    #[test]
    fn test_default_modes_fallback() {
        assert_eq!(build(Family::MariaDb, "10.6").default_modes(), MODES_MARIA_10_2);
        assert_eq!(build(Family::MariaDb, "10.1").default_modes(), MODES_MARIA_10_1);
        assert!(build(Family::MariaDb, "10.0").default_modes().is_empty());
        assert!(build(Family::MySql, "5.5").default_modes().is_empty());
    }

    #[test]
    fn test_naming_strategy() {
        assert_eq!(build(Family::MySql, "8.0").naming_strategy().quote_char(), '`');
    }
}
