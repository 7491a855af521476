// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for builtin capabilities
//!
//! This module defines the base data types of the MySQL lineage and the
//! metadata describing builtin functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base data types (MySQL lineage spelling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BaseType {
    // Numeric types
    Bit,
    TinyInt,
    Bool,
    Boolean,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Serial,
    Decimal,
    Dec,
    Numeric,
    Fixed,
    Float,
    Double,
    DoublePrecision,
    Real,

    // Date/Time types
    Date,
    Time,
    DateTime,
    Timestamp,
    Year,

    // String types
    Char,
    Character,
    NChar,
    NationalChar,
    Varchar,
    CharacterVarying,
    NVarchar,
    NationalVarchar,
    Long,
    LongVarchar,

    // Binary types
    Binary,
    VarBinary,
    LongVarbinary,

    // Blob/Text types
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,

    // Enumerations
    Enum,
    Set,

    // JSON
    Json,

    // Spatial types
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,

    // MariaDB types
    Inet4,
    Inet6,
    Uuid,

    // MySQL 9 vector type
    Vector,
}

impl BaseType {
    pub const ALL: &'static [BaseType] = &[
        BaseType::Bit,
        BaseType::TinyInt,
        BaseType::Bool,
        BaseType::Boolean,
        BaseType::SmallInt,
        BaseType::MediumInt,
        BaseType::Int,
        BaseType::Integer,
        BaseType::BigInt,
        BaseType::Serial,
        BaseType::Decimal,
        BaseType::Dec,
        BaseType::Numeric,
        BaseType::Fixed,
        BaseType::Float,
        BaseType::Double,
        BaseType::DoublePrecision,
        BaseType::Real,
        BaseType::Date,
        BaseType::Time,
        BaseType::DateTime,
        BaseType::Timestamp,
        BaseType::Year,
        BaseType::Char,
        BaseType::Character,
        BaseType::NChar,
        BaseType::NationalChar,
        BaseType::Varchar,
        BaseType::CharacterVarying,
        BaseType::NVarchar,
        BaseType::NationalVarchar,
        BaseType::Long,
        BaseType::LongVarchar,
        BaseType::Binary,
        BaseType::VarBinary,
        BaseType::LongVarbinary,
        BaseType::TinyBlob,
        BaseType::Blob,
        BaseType::MediumBlob,
        BaseType::LongBlob,
        BaseType::TinyText,
        BaseType::Text,
        BaseType::MediumText,
        BaseType::LongText,
        BaseType::Enum,
        BaseType::Set,
        BaseType::Json,
        BaseType::Geometry,
        BaseType::Point,
        BaseType::LineString,
        BaseType::Polygon,
        BaseType::MultiPoint,
        BaseType::MultiLineString,
        BaseType::MultiPolygon,
        BaseType::GeometryCollection,
        BaseType::Inet4,
        BaseType::Inet6,
        BaseType::Uuid,
        BaseType::Vector,
    ];

    /// SQL spelling
    pub fn as_str(self) -> &'static str {
        match self {
            BaseType::Bit => "BIT",
            BaseType::TinyInt => "TINYINT",
            BaseType::Bool => "BOOL",
            BaseType::Boolean => "BOOLEAN",
            BaseType::SmallInt => "SMALLINT",
            BaseType::MediumInt => "MEDIUMINT",
            BaseType::Int => "INT",
            BaseType::Integer => "INTEGER",
            BaseType::BigInt => "BIGINT",
            BaseType::Serial => "SERIAL",
            BaseType::Decimal => "DECIMAL",
            BaseType::Dec => "DEC",
            BaseType::Numeric => "NUMERIC",
            BaseType::Fixed => "FIXED",
            BaseType::Float => "FLOAT",
            BaseType::Double => "DOUBLE",
            BaseType::DoublePrecision => "DOUBLE PRECISION",
            BaseType::Real => "REAL",
            BaseType::Date => "DATE",
            BaseType::Time => "TIME",
            BaseType::DateTime => "DATETIME",
            BaseType::Timestamp => "TIMESTAMP",
            BaseType::Year => "YEAR",
            BaseType::Char => "CHAR",
            BaseType::Character => "CHARACTER",
            BaseType::NChar => "NCHAR",
            BaseType::NationalChar => "NATIONAL CHAR",
            BaseType::Varchar => "VARCHAR",
            BaseType::CharacterVarying => "CHARACTER VARYING",
            BaseType::NVarchar => "NVARCHAR",
            BaseType::NationalVarchar => "NATIONAL VARCHAR",
            BaseType::Long => "LONG",
            BaseType::LongVarchar => "LONG VARCHAR",
            BaseType::Binary => "BINARY",
            BaseType::VarBinary => "VARBINARY",
            BaseType::LongVarbinary => "LONG VARBINARY",
            BaseType::TinyBlob => "TINYBLOB",
            BaseType::Blob => "BLOB",
            BaseType::MediumBlob => "MEDIUMBLOB",
            BaseType::LongBlob => "LONGBLOB",
            BaseType::TinyText => "TINYTEXT",
            BaseType::Text => "TEXT",
            BaseType::MediumText => "MEDIUMTEXT",
            BaseType::LongText => "LONGTEXT",
            BaseType::Enum => "ENUM",
            BaseType::Set => "SET",
            BaseType::Json => "JSON",
            BaseType::Geometry => "GEOMETRY",
            BaseType::Point => "POINT",
            BaseType::LineString => "LINESTRING",
            BaseType::Polygon => "POLYGON",
            BaseType::MultiPoint => "MULTIPOINT",
            BaseType::MultiLineString => "MULTILINESTRING",
            BaseType::MultiPolygon => "MULTIPOLYGON",
            BaseType::GeometryCollection => "GEOMETRYCOLLECTION",
            BaseType::Inet4 => "INET4",
            BaseType::Inet6 => "INET6",
            BaseType::Uuid => "UUID",
            BaseType::Vector => "VECTOR",
        }
    }

    /// The type the server actually stores for this spelling
    ///
    /// `REAL` is a `DOUBLE` unless the `REAL_AS_FLOAT` mode is active.
    pub fn canonical(self, real_as_float: bool) -> BaseType {
        match self {
            BaseType::Bool | BaseType::Boolean => BaseType::TinyInt,
            BaseType::Integer => BaseType::Int,
            BaseType::Dec | BaseType::Numeric | BaseType::Fixed => BaseType::Decimal,
            BaseType::DoublePrecision => BaseType::Double,
            BaseType::Real if real_as_float => BaseType::Float,
            BaseType::Real => BaseType::Double,
            BaseType::Character | BaseType::NChar | BaseType::NationalChar => BaseType::Char,
            BaseType::CharacterVarying | BaseType::NVarchar | BaseType::NationalVarchar => {
                BaseType::Varchar
            }
            BaseType::Long | BaseType::LongVarchar => BaseType::MediumText,
            BaseType::LongVarbinary => BaseType::MediumBlob,
            BaseType::Serial => BaseType::BigInt,
            other => other,
        }
    }

    /// Whether this spelling is an alias of another type
    pub fn is_alias(self) -> bool {
        self.canonical(false) != self
    }

    pub fn is_spatial(self) -> bool {
        matches!(
            self,
            BaseType::Geometry
                | BaseType::Point
                | BaseType::LineString
                | BaseType::Polygon
                | BaseType::MultiPoint
                | BaseType::MultiLineString
                | BaseType::MultiPolygon
                | BaseType::GeometryCollection
        )
    }
}

impl FromStr for BaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        BaseType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    Scalar,
    Aggregate,
    Window,
    Table,
}

/// Metadata for a builtin function
///
/// All fields are `'static` so master tables can be compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionMetadata {
    /// Function name (upper case)
    pub name: &'static str,
    /// Function type (scalar, aggregate, window, table)
    pub function_type: FunctionType,
    /// Return type, `None` when it depends on the arguments
    pub return_type: Option<BaseType>,
    /// Function description/documentation
    pub description: Option<&'static str>,
}

impl FunctionMetadata {
    pub const fn new(name: &'static str, return_type: BaseType) -> Self {
        Self {
            name,
            function_type: FunctionType::Scalar,
            return_type: Some(return_type),
            description: None,
        }
    }

    /// Function whose return type follows its arguments (`COALESCE`, `MAX`)
    pub const fn polymorphic(name: &'static str) -> Self {
        Self {
            name,
            function_type: FunctionType::Scalar,
            return_type: None,
            description: None,
        }
    }

    /// Builder method: set function type
    pub const fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = function_type;
        self
    }

    /// Builder method: set description
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Get function signature (for display)
    pub fn signature(&self) -> String {
        match self.return_type {
            Some(t) => format!("{}(...) -> {}", self.name, t),
            None => format!("{}(...)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_types() {
        assert!(BaseType::Point.is_spatial());
        assert!(BaseType::GeometryCollection.is_spatial());
        assert!(!BaseType::Json.is_spatial());
        assert!(!BaseType::Int.is_spatial());
    }

    #[test]
    fn test_canonical_aliases() {
        assert_eq!(BaseType::Integer.canonical(false), BaseType::Int);
        assert_eq!(BaseType::Bool.canonical(false), BaseType::TinyInt);
        assert_eq!(BaseType::Numeric.canonical(false), BaseType::Decimal);
        assert_eq!(BaseType::Real.canonical(false), BaseType::Double);
        assert_eq!(BaseType::Real.canonical(true), BaseType::Float);
        assert_eq!(BaseType::Json.canonical(false), BaseType::Json);
        assert!(BaseType::NVarchar.is_alias());
        assert!(!BaseType::Varchar.is_alias());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("int".parse::<BaseType>(), Ok(BaseType::Int));
        assert_eq!(
            "double   precision".parse::<BaseType>(),
            Ok(BaseType::DoublePrecision)
        );
        assert!("money".parse::<BaseType>().is_err());
    }

    #[test]
    fn test_as_str_round_trips_for_all() {
        for t in BaseType::ALL {
            assert_eq!(t.as_str().parse::<BaseType>(), Ok(*t));
        }
    }

    #[test]
    fn test_signature() {
        let f = FunctionMetadata::new("NOW", BaseType::DateTime);
        assert_eq!(f.signature(), "NOW(...) -> DATETIME");
        assert_eq!(FunctionMetadata::polymorphic("COALESCE").signature(), "COALESCE(...)");
    }
}
