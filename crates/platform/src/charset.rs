// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Character sets
//!
//! Closed catalog of the MySQL-lineage character sets. Each charset carries
//! the server's numeric id, which is the id of its default collation.

use crate::collation::{COLLATIONS, Collation};
use crate::error::{PlatformError, PlatformResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Armscii8,
    Ascii,
    Big5,
    Binary,
    Cp1250,
    Cp1251,
    Cp1256,
    Cp1257,
    Cp850,
    Cp852,
    Cp866,
    Cp932,
    Dec8,
    Eucjpms,
    Euckr,
    Gb18030,
    Gb2312,
    Gbk,
    Geostd8,
    Greek,
    Hebrew,
    Hp8,
    Keybcs2,
    Koi8r,
    Koi8u,
    Latin1,
    Latin2,
    Latin5,
    Latin7,
    Macce,
    Macroman,
    Sjis,
    Swe7,
    Tis620,
    Ucs2,
    Ujis,
    Utf16,
    Utf16le,
    Utf32,
    #[serde(alias = "utf8mb3")]
    Utf8,
    Utf8mb4,
}

use Charset::*;

/// Second-part spellings accepted by [`Charset::validate_value`] besides the
/// charset names themselves
const LEGACY_SECOND_PARTS: &[&str] = &[
    "alt",
    "croat",
    "czech",
    "danish",
    "dos",
    "estonia",
    "german1",
    "hungarian",
    "koi8_ru",
    "koi8_ukr",
    "usa7",
    "win1250",
    "win1251",
    "win1251ukr",
];

impl Charset {
    pub const ALL: [Charset; 41] = [
        Armscii8, Ascii, Big5, Binary, Cp1250, Cp1251, Cp1256, Cp1257, Cp850, Cp852, Cp866, Cp932,
        Dec8, Eucjpms, Euckr, Gb18030, Gb2312, Gbk, Geostd8, Greek, Hebrew, Hp8, Keybcs2, Koi8r,
        Koi8u, Latin1, Latin2, Latin5, Latin7, Macce, Macroman, Sjis, Swe7, Tis620, Ucs2, Ujis,
        Utf16, Utf16le, Utf32, Utf8, Utf8mb4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Armscii8 => "armscii8",
            Ascii => "ascii",
            Big5 => "big5",
            Binary => "binary",
            Cp1250 => "cp1250",
            Cp1251 => "cp1251",
            Cp1256 => "cp1256",
            Cp1257 => "cp1257",
            Cp850 => "cp850",
            Cp852 => "cp852",
            Cp866 => "cp866",
            Cp932 => "cp932",
            Dec8 => "dec8",
            Eucjpms => "eucjpms",
            Euckr => "euckr",
            Gb18030 => "gb18030",
            Gb2312 => "gb2312",
            Gbk => "gbk",
            Geostd8 => "geostd8",
            Greek => "greek",
            Hebrew => "hebrew",
            Hp8 => "hp8",
            Keybcs2 => "keybcs2",
            Koi8r => "koi8r",
            Koi8u => "koi8u",
            Latin1 => "latin1",
            Latin2 => "latin2",
            Latin5 => "latin5",
            Latin7 => "latin7",
            Macce => "macce",
            Macroman => "macroman",
            Sjis => "sjis",
            Swe7 => "swe7",
            Tis620 => "tis620",
            Ucs2 => "ucs2",
            Ujis => "ujis",
            Utf16 => "utf16",
            Utf16le => "utf16le",
            Utf32 => "utf32",
            Utf8 => "utf8",
            Utf8mb4 => "utf8mb4",
        }
    }

    /// Server id of the charset (the id of its default collation)
    pub fn id(self) -> u16 {
        match self {
            Armscii8 => 32,
            Ascii => 11,
            Big5 => 1,
            Binary => 63,
            Cp1250 => 26,
            Cp1251 => 51,
            Cp1256 => 57,
            Cp1257 => 59,
            Cp850 => 4,
            Cp852 => 40,
            Cp866 => 36,
            Cp932 => 95,
            Dec8 => 3,
            Eucjpms => 97,
            Euckr => 19,
            Gb18030 => 248,
            Gb2312 => 24,
            Gbk => 28,
            Geostd8 => 92,
            Greek => 25,
            Hebrew => 16,
            Hp8 => 6,
            Keybcs2 => 37,
            Koi8r => 7,
            Koi8u => 22,
            Latin1 => 8,
            Latin2 => 9,
            Latin5 => 30,
            Latin7 => 41,
            Macce => 38,
            Macroman => 39,
            Sjis => 13,
            Swe7 => 10,
            Tis620 => 18,
            Ucs2 => 35,
            Ujis => 12,
            Utf16 => 54,
            Utf16le => 56,
            Utf32 => 60,
            Utf8 => 33,
            Utf8mb4 => 45,
        }
    }

    pub fn from_id(id: u16) -> PlatformResult<Charset> {
        Self::ALL
            .iter()
            .copied()
            .find(|charset| charset.id() == id)
            .ok_or_else(|| PlatformError::UnknownCharset(format!("id {}", id)))
    }

    pub fn default_collation_name(self) -> &'static str {
        match self {
            Armscii8 => "armscii8_general_ci",
            Ascii => "ascii_general_ci",
            Big5 => "big5_chinese_ci",
            Binary => "binary",
            Cp1250 => "cp1250_general_ci",
            Cp1251 => "cp1251_general_ci",
            Cp1256 => "cp1256_general_ci",
            Cp1257 => "cp1257_general_ci",
            Cp850 => "cp850_general_ci",
            Cp852 => "cp852_general_ci",
            Cp866 => "cp866_general_ci",
            Cp932 => "cp932_japanese_ci",
            Dec8 => "dec8_swedish_ci",
            Eucjpms => "eucjpms_japanese_ci",
            Euckr => "euckr_korean_ci",
            Gb18030 => "gb18030_chinese_ci",
            Gb2312 => "gb2312_chinese_ci",
            Gbk => "gbk_chinese_ci",
            Geostd8 => "geostd8_general_ci",
            Greek => "greek_general_ci",
            Hebrew => "hebrew_general_ci",
            Hp8 => "hp8_english_ci",
            Keybcs2 => "keybcs2_general_ci",
            Koi8r => "koi8r_general_ci",
            Koi8u => "koi8u_general_ci",
            Latin1 => "latin1_swedish_ci",
            Latin2 => "latin2_general_ci",
            Latin5 => "latin5_turkish_ci",
            Latin7 => "latin7_general_ci",
            Macce => "macce_general_ci",
            Macroman => "macroman_general_ci",
            Sjis => "sjis_japanese_ci",
            Swe7 => "swe7_swedish_ci",
            Tis620 => "tis620_thai_ci",
            Ucs2 => "ucs2_general_ci",
            Ujis => "ujis_japanese_ci",
            Utf16 => "utf16_general_ci",
            Utf16le => "utf16le_general_ci",
            Utf32 => "utf32_general_ci",
            Utf8 => "utf8_general_ci",
            Utf8mb4 => "utf8mb4_general_ci",
        }
    }

    pub fn default_collation(self) -> Collation {
        Collation::new(self.default_collation_name(), self, self.id())
    }

    /// Catalog collations belonging to this charset
    pub fn collations(self) -> impl Iterator<Item = &'static Collation> {
        COLLATIONS.iter().filter(move |c| c.charset == self)
    }

    /// `BINARY` goes with every charset, any other collation only with its own
    pub fn supports_collation(self, collation: &Collation) -> bool {
        collation.is_binary() || collation.charset_name() == self.name()
    }

    /// Strict form of [`Charset::supports_collation`]
    pub fn ensure_supports(self, collation: &Collation) -> PlatformResult<()> {
        if self.supports_collation(collation) {
            Ok(())
        } else {
            Err(PlatformError::InvalidDefinition(format!(
                "collation '{}' is not valid for character set '{}'",
                collation.name, self
            )))
        }
    }

    /// Validate a charset spelling, returning it normalized to lower case
    ///
    /// A compound `first_second` spelling (`cp1250_latin2`) is accepted when
    /// `first` is a charset and `second` is a charset or one of the legacy
    /// spellings. A bare `koi8` second part means `koi8r`. The second part is
    /// not interpreted any further.
    pub fn validate_value(raw: &str) -> PlatformResult<String> {
        let lowered = raw.trim().to_ascii_lowercase();
        let unknown = || PlatformError::UnknownCharset(raw.trim().to_string());

        match lowered.split_once('_') {
            Some((first, second)) => {
                first.parse::<Charset>().map_err(|_| unknown())?;
                let second = if second == "koi8" { "koi8r" } else { second };
                let known = second.parse::<Charset>().is_ok()
                    || LEGACY_SECOND_PARTS.contains(&second);
                if !known {
                    return Err(unknown());
                }
                Ok(format!("{}_{}", first, second))
            }
            None => {
                lowered.parse::<Charset>().map_err(|_| unknown())?;
                Ok(lowered)
            }
        }
    }
}

impl FromStr for Charset {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("utf8mb3") {
            return Ok(Utf8);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|charset| charset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PlatformError::UnknownCharset(name.to_string()))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collations_belong_to_charset() {
        let names: Vec<&str> = Charset::Latin1.collations().map(|c| c.name).collect();
        assert!(names.contains(&"latin1_swedish_ci"));
        assert!(names.contains(&"latin1_bin"));
        assert!(!names.contains(&"utf8mb4_bin"));
        assert!(
            Charset::Utf8mb4
                .collations()
                .all(|c| Charset::Utf8mb4.supports_collation(c))
        );
    }

    #[test]
    fn test_ids_are_unique() {
        for charset in Charset::ALL {
            assert_eq!(Charset::from_id(charset.id()).unwrap(), charset);
        }
        assert!(matches!(
            Charset::from_id(2),
            Err(PlatformError::UnknownCharset(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("UTF8MB4".parse::<Charset>().unwrap(), Utf8mb4);
        assert_eq!("utf8mb3".parse::<Charset>().unwrap(), Utf8);
        assert!("utf7".parse::<Charset>().is_err());
    }

    #[test]
    fn test_validate_value() {
        assert_eq!(Charset::validate_value("LATIN1").unwrap(), "latin1");
        assert_eq!(
            Charset::validate_value("cp1251_koi8").unwrap(),
            "cp1251_koi8r"
        );
        assert_eq!(
            Charset::validate_value("latin1_danish").unwrap(),
            "latin1_danish"
        );
        assert!(Charset::validate_value("klingon").is_err());
        assert!(Charset::validate_value("klingon_latin1").is_err());
        assert!(Charset::validate_value("latin1_klingon").is_err());
    }

    #[test]
    fn test_supports_collation() {
        let latin1_bin = Collation::from_name("latin1_bin").unwrap();
        assert!(Latin1.supports_collation(&latin1_bin));
        assert!(!Utf8mb4.supports_collation(&latin1_bin));
        assert!(Utf8mb4.supports_collation(&Collation::BINARY));
        assert!(matches!(
            Utf8mb4.ensure_supports(&latin1_bin),
            Err(PlatformError::InvalidDefinition(_))
        ));
    }
}
