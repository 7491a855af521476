// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL modes
//!
//! A [`SqlMode`] is a set of [`ModeFlag`] bits using the server's own bit
//! numbering. Some flags are compatibility groups (`ANSI`, `TRADITIONAL`,
//! ...) that stand for a fixed set of other flags.
//!
//! Two values are kept:
//! - `value`: exactly the flags that were given
//! - `full_value`: `value` with every group expanded
//!
//! Text conversion always works on `value`, so `as_string()` followed by
//! parsing gives back the same `value`. Behavior questions (`contains`) are
//! answered from `full_value`.

use crate::error::{PlatformError, PlatformResult};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unified_sql_ir::{CapabilityEntry, CapabilityTable, Family, filter_for_version};

/// One named SQL mode bit
///
/// The discriminant is the bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ModeFlag {
    RealAsFloat = 0,
    PipesAsConcat = 1,
    AnsiQuotes = 2,
    IgnoreSpace = 3,
    /// Retired bit, still accepted by the parser
    NotUsed = 4,
    OnlyFullGroupBy = 5,
    NoUnsignedSubtraction = 6,
    NoDirInCreate = 7,
    Postgresql = 8,
    Oracle = 9,
    Mssql = 10,
    Db2 = 11,
    Maxdb = 12,
    NoKeyOptions = 13,
    NoTableOptions = 14,
    NoFieldOptions = 15,
    Mysql323 = 16,
    Mysql40 = 17,
    Ansi = 18,
    NoAutoValueOnZero = 19,
    NoBackslashEscapes = 20,
    StrictTransTables = 21,
    StrictAllTables = 22,
    NoZeroInDate = 23,
    NoZeroDate = 24,
    InvalidDates = 25,
    ErrorForDivisionByZero = 26,
    Traditional = 27,
    NoAutoCreateUser = 28,
    HighNotPrecedence = 29,
    NoEngineSubstitution = 30,
    PadCharToFullLength = 31,
    TimeTruncateFractional = 32,
    // MariaDB
    EmptyStringIsNull = 33,
    SimultaneousAssignment = 34,
    TimeRoundFractional = 35,
}

use ModeFlag::*;

const DB2_LIKE: &[ModeFlag] = &[
    PipesAsConcat,
    AnsiQuotes,
    IgnoreSpace,
    NoKeyOptions,
    NoTableOptions,
    NoFieldOptions,
];

const MAXDB_LIKE: &[ModeFlag] = &[
    PipesAsConcat,
    AnsiQuotes,
    IgnoreSpace,
    NoKeyOptions,
    NoTableOptions,
    NoFieldOptions,
    NoAutoCreateUser,
];

impl ModeFlag {
    /// Every flag, in ascending bit order
    pub const ALL: [ModeFlag; 36] = [
        RealAsFloat,
        PipesAsConcat,
        AnsiQuotes,
        IgnoreSpace,
        NotUsed,
        OnlyFullGroupBy,
        NoUnsignedSubtraction,
        NoDirInCreate,
        Postgresql,
        Oracle,
        Mssql,
        Db2,
        Maxdb,
        NoKeyOptions,
        NoTableOptions,
        NoFieldOptions,
        Mysql323,
        Mysql40,
        Ansi,
        NoAutoValueOnZero,
        NoBackslashEscapes,
        StrictTransTables,
        StrictAllTables,
        NoZeroInDate,
        NoZeroDate,
        InvalidDates,
        ErrorForDivisionByZero,
        Traditional,
        NoAutoCreateUser,
        HighNotPrecedence,
        NoEngineSubstitution,
        PadCharToFullLength,
        TimeTruncateFractional,
        EmptyStringIsNull,
        SimultaneousAssignment,
        TimeRoundFractional,
    ];

    pub const fn bit(self) -> u64 {
        1u64 << (self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            RealAsFloat => "REAL_AS_FLOAT",
            PipesAsConcat => "PIPES_AS_CONCAT",
            AnsiQuotes => "ANSI_QUOTES",
            IgnoreSpace => "IGNORE_SPACE",
            NotUsed => "NOT_USED",
            OnlyFullGroupBy => "ONLY_FULL_GROUP_BY",
            NoUnsignedSubtraction => "NO_UNSIGNED_SUBTRACTION",
            NoDirInCreate => "NO_DIR_IN_CREATE",
            Postgresql => "POSTGRESQL",
            Oracle => "ORACLE",
            Mssql => "MSSQL",
            Db2 => "DB2",
            Maxdb => "MAXDB",
            NoKeyOptions => "NO_KEY_OPTIONS",
            NoTableOptions => "NO_TABLE_OPTIONS",
            NoFieldOptions => "NO_FIELD_OPTIONS",
            Mysql323 => "MYSQL323",
            Mysql40 => "MYSQL40",
            Ansi => "ANSI",
            NoAutoValueOnZero => "NO_AUTO_VALUE_ON_ZERO",
            NoBackslashEscapes => "NO_BACKSLASH_ESCAPES",
            StrictTransTables => "STRICT_TRANS_TABLES",
            StrictAllTables => "STRICT_ALL_TABLES",
            NoZeroInDate => "NO_ZERO_IN_DATE",
            NoZeroDate => "NO_ZERO_DATE",
            InvalidDates => "INVALID_DATES",
            ErrorForDivisionByZero => "ERROR_FOR_DIVISION_BY_ZERO",
            Traditional => "TRADITIONAL",
            NoAutoCreateUser => "NO_AUTO_CREATE_USER",
            HighNotPrecedence => "HIGH_NOT_PRECEDENCE",
            NoEngineSubstitution => "NO_ENGINE_SUBSTITUTION",
            PadCharToFullLength => "PAD_CHAR_TO_FULL_LENGTH",
            TimeTruncateFractional => "TIME_TRUNCATE_FRACTIONAL",
            EmptyStringIsNull => "EMPTY_STRING_IS_NULL",
            SimultaneousAssignment => "SIMULTANEOUS_ASSIGNMENT",
            TimeRoundFractional => "TIME_ROUND_FRACTIONAL",
        }
    }

    /// Lookup by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<ModeFlag> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|flag| flag.name().eq_ignore_ascii_case(name))
    }

    /// Flags a compatibility group stands for; empty for primitive flags
    pub fn expansion(self) -> &'static [ModeFlag] {
        match self {
            Ansi => &[
                RealAsFloat,
                PipesAsConcat,
                AnsiQuotes,
                IgnoreSpace,
                OnlyFullGroupBy,
            ],
            Traditional => &[
                StrictTransTables,
                StrictAllTables,
                NoZeroInDate,
                NoZeroDate,
                ErrorForDivisionByZero,
                NoAutoCreateUser,
                NoEngineSubstitution,
            ],
            Db2 | Mssql | Postgresql => DB2_LIKE,
            Maxdb | Oracle => MAXDB_LIKE,
            Mysql323 | Mysql40 => &[HighNotPrecedence],
            _ => &[],
        }
    }

    pub fn is_group(self) -> bool {
        !self.expansion().is_empty()
    }

    /// Whether the flag is only kept for reading old mode values
    pub fn is_deprecated(self) -> bool {
        matches!(self, NotUsed)
    }
}

impl fmt::Display for ModeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeFlag {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeFlag::from_name(s)
            .ok_or_else(|| PlatformError::InvalidMode(format!("unknown mode '{}'", s.trim())))
    }
}

/// Bits with a registered name
const KNOWN_BITS: u64 = (1u64 << ModeFlag::ALL.len()) - 1;

type Availability = CapabilityEntry<ModeFlag>;

/// Versions (MySQL ids) in which each flag is understood by the server
const MYSQL_AVAILABILITY: CapabilityTable<ModeFlag> = &[
    Availability::always(RealAsFloat),
    Availability::always(PipesAsConcat),
    Availability::always(AnsiQuotes),
    Availability::always(IgnoreSpace),
    Availability::until(NotUsed, 79999),
    Availability::always(OnlyFullGroupBy),
    Availability::always(NoUnsignedSubtraction),
    Availability::always(NoDirInCreate),
    Availability::until(Postgresql, 79999),
    Availability::until(Oracle, 79999),
    Availability::until(Mssql, 79999),
    Availability::until(Db2, 79999),
    Availability::until(Maxdb, 79999),
    Availability::until(NoKeyOptions, 79999),
    Availability::until(NoTableOptions, 79999),
    Availability::until(NoFieldOptions, 79999),
    Availability::until(Mysql323, 79999),
    Availability::until(Mysql40, 79999),
    Availability::always(Ansi),
    Availability::always(NoAutoValueOnZero),
    Availability::always(NoBackslashEscapes),
    Availability::always(StrictTransTables),
    Availability::always(StrictAllTables),
    Availability::always(NoZeroInDate),
    Availability::always(NoZeroDate),
    Availability::always(InvalidDates),
    Availability::always(ErrorForDivisionByZero),
    Availability::always(Traditional),
    Availability::until(NoAutoCreateUser, 79999),
    Availability::always(HighNotPrecedence),
    Availability::always(NoEngineSubstitution),
    Availability::always(PadCharToFullLength),
    Availability::since(TimeTruncateFractional, 80000),
];

/// Versions (MariaDB ids) in which each flag is understood by the server
const MARIADB_AVAILABILITY: CapabilityTable<ModeFlag> = &[
    Availability::always(RealAsFloat),
    Availability::always(PipesAsConcat),
    Availability::always(AnsiQuotes),
    Availability::always(IgnoreSpace),
    Availability::always(NotUsed),
    Availability::always(OnlyFullGroupBy),
    Availability::always(NoUnsignedSubtraction),
    Availability::always(NoDirInCreate),
    Availability::always(Postgresql),
    Availability::always(Oracle),
    Availability::always(Mssql),
    Availability::always(Db2),
    Availability::always(Maxdb),
    Availability::always(NoKeyOptions),
    Availability::always(NoTableOptions),
    Availability::always(NoFieldOptions),
    Availability::always(Mysql323),
    Availability::always(Mysql40),
    Availability::always(Ansi),
    Availability::always(NoAutoValueOnZero),
    Availability::always(NoBackslashEscapes),
    Availability::always(StrictTransTables),
    Availability::always(StrictAllTables),
    Availability::always(NoZeroInDate),
    Availability::always(NoZeroDate),
    Availability::always(InvalidDates),
    Availability::always(ErrorForDivisionByZero),
    Availability::always(Traditional),
    Availability::always(NoAutoCreateUser),
    Availability::always(HighNotPrecedence),
    Availability::always(NoEngineSubstitution),
    Availability::always(PadCharToFullLength),
    Availability::since(EmptyStringIsNull, 100300),
    Availability::since(SimultaneousAssignment, 100305),
    Availability::since(TimeRoundFractional, 100601),
];

fn expand(value: u64) -> u64 {
    ModeFlag::ALL
        .iter()
        .filter(|flag| value & flag.bit() != 0)
        .flat_map(|flag| flag.expansion())
        .fold(value, |full, flag| full | flag.bit())
}

/// A set of SQL mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SqlMode {
    value: u64,
    full_value: u64,
}

impl SqlMode {
    /// The empty mode
    pub const fn empty() -> Self {
        Self {
            value: 0,
            full_value: 0,
        }
    }

    fn from_bits(value: u64) -> Self {
        Self {
            value,
            full_value: expand(value),
        }
    }

    /// Build a mode from its integer form
    ///
    /// Fails on negative values and on bits without a registered name.
    pub fn from_int(bits: i64) -> PlatformResult<Self> {
        if bits < 0 {
            return Err(PlatformError::InvalidMode(format!(
                "negative mode value {}",
                bits
            )));
        }
        let bits = bits as u64;
        let unknown = bits & !KNOWN_BITS;
        if unknown != 0 {
            return Err(PlatformError::InvalidMode(format!(
                "unknown mode bits {:#x}",
                unknown
            )));
        }
        Ok(Self::from_bits(bits))
    }

    pub fn from_flags(flags: &[ModeFlag]) -> Self {
        Self::from_bits(flags.iter().fold(0, |bits, flag| bits | flag.bit()))
    }

    /// Parse a comma separated mode list
    ///
    /// `DEFAULT` stands for the platform's default mode. Empty items are
    /// skipped, so `""` is the empty mode.
    pub fn from_string(text: &str, platform: &Platform) -> PlatformResult<Self> {
        parse_list(text, Some(platform.default_mode()))
    }

    /// Exactly the bits that were given
    pub fn value(&self) -> u64 {
        self.value
    }

    /// `value` with every compatibility group expanded
    pub fn full_value(&self) -> u64 {
        self.full_value
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Comma separated names of the given flags, in ascending bit order
    pub fn as_string(&self) -> String {
        self.flags()
            .iter()
            .map(|flag| flag.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Whether `flag` is in effect, directly or through a group
    pub fn contains(&self, flag: ModeFlag) -> bool {
        self.full_value & flag.bit() != 0
    }

    /// The given flags, in ascending bit order
    pub fn flags(&self) -> Vec<ModeFlag> {
        flags_of(self.value)
    }

    /// Every flag in effect, in ascending bit order
    pub fn effective_flags(&self) -> Vec<ModeFlag> {
        flags_of(self.full_value)
    }

    pub fn with(self, flag: ModeFlag) -> Self {
        Self::from_bits(self.value | flag.bit())
    }

    pub fn without(self, flag: ModeFlag) -> Self {
        Self::from_bits(self.value & !flag.bit())
    }

    /// Given flags that the platform's server does not understand
    pub fn unsupported_flags(&self, platform: &Platform) -> Vec<ModeFlag> {
        let table = match platform.family() {
            Family::MySql => MYSQL_AVAILABILITY,
            Family::MariaDb => MARIADB_AVAILABILITY,
            Family::Sql => return Vec::new(),
        };
        let supported = filter_for_version(table, platform.id());
        self.flags()
            .into_iter()
            .filter(|flag| !supported.contains(flag))
            .collect()
    }
}

fn flags_of(bits: u64) -> Vec<ModeFlag> {
    ModeFlag::ALL
        .iter()
        .copied()
        .filter(|flag| bits & flag.bit() != 0)
        .collect()
}

fn parse_list(text: &str, default: Option<SqlMode>) -> PlatformResult<SqlMode> {
    let mut bits = 0u64;
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let token = token.to_ascii_uppercase();
        if token == "DEFAULT" {
            match default {
                Some(mode) => bits |= mode.value,
                None => {
                    return Err(PlatformError::InvalidMode(
                        "DEFAULT needs a platform to resolve against".to_string(),
                    ));
                }
            }
            continue;
        }
        let flag: ModeFlag = token.parse()?;
        bits |= flag.bit();
    }
    Ok(SqlMode::from_bits(bits))
}

impl FromStr for SqlMode {
    type Err = PlatformError;

    /// Parse a mode list without a platform; `DEFAULT` is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_list(s, None)
    }
}

impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<ModeFlag> for SqlMode {
    fn from(flag: ModeFlag) -> Self {
        Self::from_bits(flag.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_declaration_order() {
        for (position, flag) in ModeFlag::ALL.iter().enumerate() {
            assert_eq!(flag.bit(), 1u64 << position, "{}", flag);
        }
        assert_eq!(NoEngineSubstitution.bit(), 1 << 30);
        assert_eq!(TimeTruncateFractional.bit(), 1 << 32);
    }

    #[test]
    fn test_from_int_rejects_negative_and_unknown() {
        assert!(matches!(
            SqlMode::from_int(-1),
            Err(PlatformError::InvalidMode(_))
        ));
        assert!(matches!(
            SqlMode::from_int(1 << 40),
            Err(PlatformError::InvalidMode(_))
        ));
        assert_eq!(SqlMode::from_int(0).unwrap(), SqlMode::empty());
    }

    #[test]
    fn test_availability_ranges_are_ordered() {
        for entry in MYSQL_AVAILABILITY.iter().chain(MARIADB_AVAILABILITY) {
            assert!(entry.introduced <= entry.removed, "{}", entry.value);
        }
    }

    #[test]
    fn test_effective_flags_include_expansion() {
        let mode = SqlMode::from(Traditional).with(AnsiQuotes);
        assert_eq!(mode.flags(), vec![AnsiQuotes, Traditional]);
        let effective = mode.effective_flags();
        assert!(effective.contains(&StrictAllTables));
        assert!(effective.contains(&AnsiQuotes));
        assert!(effective.contains(&Traditional));
        assert!(effective.windows(2).all(|w| w[0].bit() < w[1].bit()));
    }

    #[test]
    fn test_group_expansion() {
        let mode = SqlMode::from(Traditional);
        assert_ne!(mode.full_value(), mode.value());
        assert!(mode.contains(StrictAllTables));
        assert!(mode.contains(Traditional));
        assert_eq!(mode.flags(), vec![Traditional]);
        assert_eq!(mode.as_string(), "TRADITIONAL");

        // expanding an expanded value changes nothing
        assert_eq!(expand(mode.full_value()), mode.full_value());
    }

    #[test]
    fn test_parse_list() {
        let mode: SqlMode = " ansi_quotes, ,PIPES_AS_CONCAT ".parse().unwrap();
        assert_eq!(mode.as_string(), "PIPES_AS_CONCAT,ANSI_QUOTES");
        assert!("".parse::<SqlMode>().unwrap().is_empty());
        assert!(matches!(
            "NO_SUCH_MODE".parse::<SqlMode>(),
            Err(PlatformError::InvalidMode(_))
        ));
        assert!("DEFAULT".parse::<SqlMode>().is_err());
    }

    #[test]
    fn test_not_used_round_trips() {
        let mode = SqlMode::from_int(NotUsed.bit() as i64).unwrap();
        assert_eq!(mode.as_string(), "NOT_USED");
        assert_eq!("NOT_USED".parse::<SqlMode>().unwrap(), mode);
    }

    #[test]
    fn test_with_without() {
        let mode = SqlMode::empty().with(Ansi).with(NoZeroDate);
        assert!(mode.contains(AnsiQuotes));
        let mode = mode.without(Ansi);
        assert!(!mode.contains(AnsiQuotes));
        assert_eq!(mode.flags(), vec![NoZeroDate]);
    }
}
