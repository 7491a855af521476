// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL base data types

use unified_sql_ir::{BaseType, CapabilityEntry, CapabilityTable};

use BaseType::*;

type Ty = CapabilityEntry<BaseType>;

#[rustfmt::skip]
pub const TYPES: CapabilityTable<BaseType> = &[
    // Numeric types
    Ty::always(Bit), Ty::always(TinyInt), Ty::always(Bool), Ty::always(Boolean),
    Ty::always(SmallInt), Ty::always(MediumInt), Ty::always(Int), Ty::always(Integer),
    Ty::always(BigInt), Ty::always(Serial), Ty::always(Decimal), Ty::always(Dec),
    Ty::always(Numeric), Ty::always(Fixed), Ty::always(Float), Ty::always(Double),
    Ty::always(DoublePrecision), Ty::always(Real),
    // Date/Time types
    Ty::always(Date), Ty::always(Time), Ty::always(DateTime), Ty::always(Timestamp),
    Ty::always(Year),
    // String types
    Ty::always(Char), Ty::always(Character), Ty::always(NChar), Ty::always(NationalChar),
    Ty::always(Varchar), Ty::always(CharacterVarying), Ty::always(NVarchar),
    Ty::always(NationalVarchar), Ty::always(Long), Ty::always(LongVarchar),
    // Binary types
    Ty::always(Binary), Ty::always(VarBinary), Ty::always(LongVarbinary),
    // Blob/Text types
    Ty::always(TinyBlob), Ty::always(Blob), Ty::always(MediumBlob), Ty::always(LongBlob),
    Ty::always(TinyText), Ty::always(Text), Ty::always(MediumText), Ty::always(LongText),
    Ty::always(Enum), Ty::always(Set),
    // Spatial types
    Ty::always(Geometry), Ty::always(Point), Ty::always(LineString), Ty::always(Polygon),
    Ty::always(MultiPoint), Ty::always(MultiLineString), Ty::always(MultiPolygon),
    Ty::always(GeometryCollection),
    // JSON
    Ty::since(Json, 50708),
    // Vectors
    Ty::since(Vector, 90000),
];
