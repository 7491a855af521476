// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Session configuration
//!
//! A serializable description of a formatting session, loadable from JSON or
//! YAML and turned into [`PlatformSettings`] against a registry.
//!
//! ## Example
//!
//! ```rust,ignore
//! let config = SettingsConfig::from_yaml_str(
//!     "family: maria\nversion: \"10.6\"\nsql_mode: DEFAULT,ANSI_QUOTES\n",
//! )?;
//! let settings = config.build(&PlatformRegistry::new())?;
//! ```

use crate::charset::Charset;
use crate::error::{PlatformError, PlatformResult};
use crate::registry::{PlatformRegistry, VersionSpec};
use crate::settings::PlatformSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Formatting session configuration
///
/// Unset fields keep the [`PlatformSettings`] defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    /// Family name: "mysql", "maria" or "sql"
    pub family: String,

    /// Version text; the family default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// Connection charset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Mode list; `DEFAULT` is the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_all_names: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonicalize_types: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_output: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_equals: Option<bool>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            family: "mysql".to_string(),
            version: None,
            delimiter: None,
            charset: None,
            sql_mode: None,
            quote_all_names: None,
            canonicalize_types: None,
            verbose_output: None,
            optional_equals: None,
        }
    }
}

impl SettingsConfig {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Default::default()
        }
    }

    pub fn from_json_str(text: &str) -> PlatformResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| PlatformError::Configuration(format!("invalid JSON settings: {}", e)))
    }

    pub fn from_yaml_str(text: &str) -> PlatformResult<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| PlatformError::Configuration(format!("invalid YAML settings: {}", e)))
    }

    pub fn to_json_string(&self) -> PlatformResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlatformError::Configuration(e.to_string()))
    }

    /// Resolve the platform and apply every configured value
    ///
    /// Rejected values are logged and returned as errors.
    pub fn build(&self, registry: &PlatformRegistry) -> PlatformResult<PlatformSettings> {
        let platform = registry.get(&self.family, VersionSpec::from(self.version.as_deref()))?;
        let mut settings = PlatformSettings::new(platform);

        if let Some(delimiter) = &self.delimiter {
            if delimiter.trim().is_empty() {
                warn!("Rejected empty delimiter in settings");
                return Err(PlatformError::Configuration(
                    "delimiter must not be empty".to_string(),
                ));
            }
            settings.set_delimiter(delimiter.trim());
        }

        if let Some(name) = &self.charset {
            let charset = name.parse::<Charset>().inspect_err(|_| {
                warn!("Rejected charset '{}' in settings", name);
            })?;
            settings.set_charset(Some(charset));
        }

        if let Some(mode) = &self.sql_mode {
            settings.set_mode_text(mode).inspect_err(|e| {
                warn!("Rejected sql_mode '{}' in settings: {}", mode, e);
            })?;
        }

        if let Some(value) = self.quote_all_names {
            settings.set_quote_all_names(value);
        }
        if let Some(value) = self.canonicalize_types {
            settings.set_canonicalize_types(value);
        }
        if let Some(value) = self.verbose_output {
            settings.set_verbose_output(value);
        }
        if let Some(value) = self.optional_equals {
            settings.set_optional_equals(value);
        }

        debug!("Built settings for {}", settings.platform());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_defaults() {
        let registry = PlatformRegistry::new();
        let settings = SettingsConfig::default().build(&registry).unwrap();
        assert_eq!(settings.platform().version().to_string(), "8.0");
        assert_eq!(settings.delimiter(), ";");
        assert!(settings.quote_all_names());
    }

    #[test]
    fn test_unknown_field_is_a_configuration_error() {
        let err = SettingsConfig::from_json_str(r#"{"family": "mysql", "colour": "red"}"#)
            .unwrap_err();
        assert!(matches!(err, PlatformError::Configuration(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = SettingsConfig::new("maria");
        config.version = Some("10.6".to_string());
        config.verbose_output = Some(true);
        let json = config.to_json_string().unwrap();
        assert_eq!(SettingsConfig::from_json_str(&json).unwrap(), config);
    }
}
