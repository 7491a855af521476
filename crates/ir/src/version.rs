// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Versions
//!
//! A [`Version`] is what the user wrote (`8`, `8.0`, `8.0.32`, `2016`), a
//! [`VersionId`] is the single comparable number derived from it.
//!
//! ## Ordering
//!
//! For dotted versions the id is `major * 10000 + minor * 100 + patch`, which
//! is the same number as concatenating the major version with the minor and
//! patch zero-padded to two digits. A missing minor counts as `0`, a missing
//! patch counts as `99`, so `8.0` sorts after every `8.0.x` that was spelled
//! out:
//!
//! ```text
//! 5.7.44  -> 50744
//! 8.0.5   -> 80005
//! 8.0     -> 80099
//! 10.0.7  -> 100007
//! ```
//!
//! Versions with a major above 90 are standards-year editions (`92`, `2003`,
//! `2016`) whose id is the major value verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Majors above this value are standards-year editions.
const STANDARD_YEAR_THRESHOLD: u32 = 90;

/// Patch value used when the patch is omitted.
const UNSPECIFIED_PATCH: u32 = 99;

/// Errors produced while parsing version text
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version segment '{segment}' in '{input}'")]
    InvalidSegment { input: String, segment: String },

    #[error("Too many version segments in '{0}', expected at most major.minor.patch")]
    TooManySegments(String),

    #[error("Version component {value} in '{input}' is out of range (0-99)")]
    OutOfRange { input: String, value: u32 },
}

/// A parsed version specifier
///
/// Absent components are kept as `None`: `8` and `8.0` are different versions
/// even though they share a major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
}

impl Version {
    pub const fn new(major: u32, minor: Option<u32>, patch: Option<u32>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major[.minor[.patch]]`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut segments = trimmed.split('.');
        let mut components: [Option<u32>; 3] = [None; 3];
        for slot in components.iter_mut() {
            match segments.next() {
                Some(segment) => *slot = Some(parse_segment(trimmed, segment)?),
                None => break,
            }
        }
        if segments.next().is_some() {
            return Err(VersionError::TooManySegments(trimmed.to_string()));
        }

        let major = components[0].ok_or(VersionError::Empty)?;
        let version = Self::new(major, components[1], components[2]);

        if major <= STANDARD_YEAR_THRESHOLD {
            for value in [version.minor, version.patch].into_iter().flatten() {
                if value > 99 {
                    return Err(VersionError::OutOfRange {
                        input: trimmed.to_string(),
                        value,
                    });
                }
            }
        }

        Ok(version)
    }

    /// The comparable id of this version
    pub const fn id(&self) -> VersionId {
        if self.major > STANDARD_YEAR_THRESHOLD {
            return VersionId(self.major);
        }
        let minor = match self.minor {
            Some(minor) => minor,
            None => 0,
        };
        let patch = match self.patch {
            Some(patch) => patch,
            None => UNSPECIFIED_PATCH,
        };
        VersionId(self.major * 10_000 + minor * 100 + patch)
    }

    /// `"{major}"` or `"{major}.{minor}"`, the key into supported-version lists
    pub fn major_minor(&self) -> String {
        match self.minor {
            Some(minor) => format!("{}.{}", self.major, minor),
            None => self.major.to_string(),
        }
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<u32, VersionError> {
    let segment = segment.trim();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidSegment {
            input: input.to_string(),
            segment: segment.to_string(),
        });
    }
    segment.parse().map_err(|_| VersionError::InvalidSegment {
        input: input.to_string(),
        segment: segment.to_string(),
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
            if let Some(patch) = self.patch {
                write!(f, ".{}", patch)?;
            }
        }
        Ok(())
    }
}

/// Totally ordered, comparable form of a [`Version`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionId(u32);

impl VersionId {
    /// Lower bound for capabilities that have always existed.
    pub const MIN: VersionId = VersionId(0);

    /// Upper bound for capabilities that were never removed.
    pub const MAX: VersionId = VersionId(999_999);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<Version> for VersionId {
    fn from(version: Version) -> Self {
        version.id()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> u32 {
        Version::parse(text).unwrap().id().as_u32()
    }

    #[test]
    fn test_parse_keeps_missing_segments() {
        let v = Version::parse("8").unwrap();
        assert_eq!(v, Version::new(8, None, None));

        let v = Version::parse("8.0").unwrap();
        assert_eq!(v, Version::new(8, Some(0), None));
        assert_ne!(Version::parse("8").unwrap(), Version::parse("8.0").unwrap());
    }

    #[test]
    fn test_id_padding() {
        assert_eq!(id("8.0"), 80099);
        assert_eq!(id("5.7.44"), 50744);
        assert_eq!(id("10.0.7"), 100007);
        assert_eq!(id("8"), 80099);
    }

    #[test]
    fn test_standard_year_is_verbatim() {
        assert_eq!(id("2011"), 2011);
        assert_eq!(id("92"), 92);
    }

    #[test]
    fn test_omitted_patch_sorts_last() {
        assert!(id("8.0.5") < id("8.0"));
        assert_eq!(id("8.0"), id("8.0.99"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert!(matches!(
            Version::parse("8.x"),
            Err(VersionError::InvalidSegment { .. })
        ));
        assert!(matches!(
            Version::parse("8.0.1.2"),
            Err(VersionError::TooManySegments(_))
        ));
        assert!(matches!(
            Version::parse("8.100"),
            Err(VersionError::OutOfRange { value: 100, .. })
        ));
    }

    #[test]
    fn test_major_minor_and_display() {
        assert_eq!(Version::parse("8.0.32").unwrap().major_minor(), "8.0");
        assert_eq!(Version::parse("2016").unwrap().major_minor(), "2016");
        assert_eq!(Version::parse("10.11.6").unwrap().to_string(), "10.11.6");
    }
}
