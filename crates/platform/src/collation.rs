// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Collations
//!
//! The catalog holds the default and `_bin` collation of every charset plus
//! the commonly used alternatives. Ids are the server's collation ids.

use crate::charset::Charset;
use crate::error::{PlatformError, PlatformResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Collation {
    pub name: &'static str,
    pub charset: Charset,
    pub id: u16,
}

impl Collation {
    /// The collation that goes with every charset
    pub const BINARY: Collation = Collation::new("binary", Charset::Binary, 63);

    pub const fn new(name: &'static str, charset: Charset, id: u16) -> Self {
        Self { name, charset, id }
    }

    /// Lookup by name (case-insensitive)
    pub fn from_name(name: &str) -> PlatformResult<Collation> {
        let name = name.trim();
        COLLATIONS
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| PlatformError::UnknownCollation(name.to_string()))
    }

    pub fn from_id(id: u16) -> PlatformResult<Collation> {
        COLLATIONS
            .iter()
            .find(|c| c.id == id)
            .copied()
            .ok_or_else(|| PlatformError::UnknownCollation(format!("id {}", id)))
    }

    pub fn charset_name(&self) -> &'static str {
        self.charset.name()
    }

    pub fn is_binary(&self) -> bool {
        self.name == Self::BINARY.name
    }

    /// Whether this is its charset's default collation
    pub fn is_default(&self) -> bool {
        self.charset.id() == self.id
    }
}

impl FromStr for Collation {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collation::from_name(s)
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

use Charset::*;

const fn c(name: &'static str, charset: Charset, id: u16) -> Collation {
    Collation::new(name, charset, id)
}

pub(crate) static COLLATIONS: &[Collation] = &[
    c("big5_chinese_ci", Big5, 1),
    c("latin2_czech_cs", Latin2, 2),
    c("dec8_swedish_ci", Dec8, 3),
    c("cp850_general_ci", Cp850, 4),
    c("latin1_german1_ci", Latin1, 5),
    c("hp8_english_ci", Hp8, 6),
    c("koi8r_general_ci", Koi8r, 7),
    c("latin1_swedish_ci", Latin1, 8),
    c("latin2_general_ci", Latin2, 9),
    c("swe7_swedish_ci", Swe7, 10),
    c("ascii_general_ci", Ascii, 11),
    c("ujis_japanese_ci", Ujis, 12),
    c("sjis_japanese_ci", Sjis, 13),
    c("cp1251_bulgarian_ci", Cp1251, 14),
    c("latin1_danish_ci", Latin1, 15),
    c("hebrew_general_ci", Hebrew, 16),
    c("tis620_thai_ci", Tis620, 18),
    c("euckr_korean_ci", Euckr, 19),
    c("latin7_estonian_cs", Latin7, 20),
    c("latin2_hungarian_ci", Latin2, 21),
    c("koi8u_general_ci", Koi8u, 22),
    c("cp1251_ukrainian_ci", Cp1251, 23),
    c("gb2312_chinese_ci", Gb2312, 24),
    c("greek_general_ci", Greek, 25),
    c("cp1250_general_ci", Cp1250, 26),
    c("gbk_chinese_ci", Gbk, 28),
    c("latin5_turkish_ci", Latin5, 30),
    c("latin1_german2_ci", Latin1, 31),
    c("armscii8_general_ci", Armscii8, 32),
    c("utf8_general_ci", Utf8, 33),
    c("cp1250_czech_cs", Cp1250, 34),
    c("ucs2_general_ci", Ucs2, 35),
    c("cp866_general_ci", Cp866, 36),
    c("keybcs2_general_ci", Keybcs2, 37),
    c("macce_general_ci", Macce, 38),
    c("macroman_general_ci", Macroman, 39),
    c("cp852_general_ci", Cp852, 40),
    c("latin7_general_ci", Latin7, 41),
    c("macce_bin", Macce, 43),
    c("cp1250_croatian_ci", Cp1250, 44),
    c("utf8mb4_general_ci", Utf8mb4, 45),
    c("utf8mb4_bin", Utf8mb4, 46),
    c("latin1_bin", Latin1, 47),
    c("latin1_general_ci", Latin1, 48),
    c("latin1_general_cs", Latin1, 49),
    c("cp1251_bin", Cp1251, 50),
    c("cp1251_general_ci", Cp1251, 51),
    c("macroman_bin", Macroman, 53),
    c("utf16_general_ci", Utf16, 54),
    c("utf16_bin", Utf16, 55),
    c("utf16le_general_ci", Utf16le, 56),
    c("cp1256_general_ci", Cp1256, 57),
    c("cp1257_bin", Cp1257, 58),
    c("cp1257_general_ci", Cp1257, 59),
    c("utf32_general_ci", Utf32, 60),
    c("utf32_bin", Utf32, 61),
    c("utf16le_bin", Utf16le, 62),
    Collation::BINARY,
    c("armscii8_bin", Armscii8, 64),
    c("ascii_bin", Ascii, 65),
    c("cp1250_bin", Cp1250, 66),
    c("cp1256_bin", Cp1256, 67),
    c("cp866_bin", Cp866, 68),
    c("dec8_bin", Dec8, 69),
    c("greek_bin", Greek, 70),
    c("hebrew_bin", Hebrew, 71),
    c("hp8_bin", Hp8, 72),
    c("keybcs2_bin", Keybcs2, 73),
    c("koi8r_bin", Koi8r, 74),
    c("koi8u_bin", Koi8u, 75),
    c("latin2_bin", Latin2, 77),
    c("latin5_bin", Latin5, 78),
    c("latin7_bin", Latin7, 79),
    c("cp850_bin", Cp850, 80),
    c("cp852_bin", Cp852, 81),
    c("swe7_bin", Swe7, 82),
    c("utf8_bin", Utf8, 83),
    c("big5_bin", Big5, 84),
    c("euckr_bin", Euckr, 85),
    c("gb2312_bin", Gb2312, 86),
    c("gbk_bin", Gbk, 87),
    c("sjis_bin", Sjis, 88),
    c("tis620_bin", Tis620, 89),
    c("ucs2_bin", Ucs2, 90),
    c("ujis_bin", Ujis, 91),
    c("geostd8_general_ci", Geostd8, 92),
    c("geostd8_bin", Geostd8, 93),
    c("latin1_spanish_ci", Latin1, 94),
    c("cp932_japanese_ci", Cp932, 95),
    c("cp932_bin", Cp932, 96),
    c("eucjpms_japanese_ci", Eucjpms, 97),
    c("eucjpms_bin", Eucjpms, 98),
    c("cp1250_polish_ci", Cp1250, 99),
    c("utf16_unicode_ci", Utf16, 101),
    c("ucs2_unicode_ci", Ucs2, 128),
    c("utf32_unicode_ci", Utf32, 160),
    c("utf8_unicode_ci", Utf8, 192),
    c("utf8_general_mysql500_ci", Utf8, 223),
    c("utf8mb4_unicode_ci", Utf8mb4, 224),
    c("utf8mb4_unicode_520_ci", Utf8mb4, 246),
    c("gb18030_chinese_ci", Gb18030, 248),
    c("gb18030_bin", Gb18030, 249),
    c("gb18030_unicode_520_ci", Gb18030, 250),
    c("utf8mb4_0900_ai_ci", Utf8mb4, 255),
    c("utf8mb4_0900_as_cs", Utf8mb4, 278),
    c("utf8mb4_0900_bin", Utf8mb4, 309),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_and_names_unique() {
        let ids: HashSet<_> = COLLATIONS.iter().map(|c| c.id).collect();
        let names: HashSet<_> = COLLATIONS.iter().map(|c| c.name).collect();
        assert_eq!(ids.len(), COLLATIONS.len());
        assert_eq!(names.len(), COLLATIONS.len());
    }

    #[test]
    fn test_every_charset_has_catalog_default() {
        for charset in Charset::ALL {
            let default = Collation::from_name(charset.default_collation_name()).unwrap();
            assert_eq!(default, charset.default_collation());
            assert!(default.is_default());
            assert!(charset.supports_collation(&default));
        }
    }

    #[test]
    fn test_lookup() {
        let collation = Collation::from_id(255).unwrap();
        assert_eq!(collation.name, "utf8mb4_0900_ai_ci");
        assert_eq!(collation.charset_name(), "utf8mb4");
        assert!(!collation.is_default());

        assert!(Collation::from_name("BINARY").unwrap().is_binary());
        assert!(matches!(
            Collation::from_name("latin1_klingon_ci"),
            Err(PlatformError::UnknownCollation(_))
        ));
    }
}
