// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for platform operations
//!
//! Every error is a deterministic validation failure on caller input; none of
//! them is worth retrying.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors that can occur while resolving platforms, modes and charsets
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum PlatformError {
    /// The family name is not registered
    #[error("Unknown platform family '{0}'")]
    UnknownFamily(String),

    /// The version is malformed or not in the family's supported list
    #[error("Unknown version '{version}' for platform family '{family}'")]
    UnknownVersion { family: String, version: String },

    /// Unknown mode name, negative or unregistered mode bits
    #[error("Invalid SQL mode: {0}")]
    InvalidMode(String),

    /// Charset id or name outside the catalog
    #[error("Unknown charset: {0}")]
    UnknownCharset(String),

    /// Collation id or name outside the catalog
    #[error("Unknown collation: {0}")]
    UnknownCollation(String),

    /// A value violates a cross-field invariant
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// The family or the supplied configuration cannot be used
    #[error("Invalid platform configuration: {0}")]
    Configuration(String),
}

impl PlatformError {
    pub(crate) fn unknown_version(family: impl Into<String>, version: impl Into<String>) -> Self {
        PlatformError::UnknownVersion {
            family: family.into(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlatformError::unknown_version("mysql", "9.9");
        assert_eq!(
            err.to_string(),
            "Unknown version '9.9' for platform family 'mysql'"
        );

        let err = PlatformError::UnknownFamily("postgres".to_string());
        assert_eq!(err.to_string(), "Unknown platform family 'postgres'");
    }
}
