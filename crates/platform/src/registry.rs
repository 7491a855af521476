// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Platform registry
//!
//! Memoizes one [`Platform`] per `(family, version id)`. Registries are plain
//! values, so tests and embedders can hold isolated caches. A process-wide
//! instance is available through [`PlatformRegistry::global`].

use crate::error::{PlatformError, PlatformResult};
use crate::platform::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use tracing::{debug, info};
use unified_sql_function_registry::FunctionRegistry;
use unified_sql_ir::{Family, Version, VersionId};

/// How a caller names a version
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionSpec {
    /// The family's default version
    #[default]
    Default,
    /// Dotted text, `"8.0"` or `"10.6.12"`
    Text(String),
    /// A bare integer
    ///
    /// For the MySQL lineage, values of 10000 and above are version ids
    /// (`80034` is 8.0.34); anything else is a major version (`2016`).
    Number(u32),
    Exact(Version),
}

impl From<&str> for VersionSpec {
    fn from(text: &str) -> Self {
        VersionSpec::Text(text.to_string())
    }
}

impl From<String> for VersionSpec {
    fn from(text: String) -> Self {
        VersionSpec::Text(text)
    }
}

impl From<u32> for VersionSpec {
    fn from(number: u32) -> Self {
        VersionSpec::Number(number)
    }
}

impl From<Option<&str>> for VersionSpec {
    fn from(text: Option<&str>) -> Self {
        text.map_or(VersionSpec::Default, VersionSpec::from)
    }
}

impl From<Version> for VersionSpec {
    fn from(version: Version) -> Self {
        VersionSpec::Exact(version)
    }
}

impl VersionSpec {
    /// Resolve to a version the family supports
    pub fn resolve(&self, family: Family) -> PlatformResult<Version> {
        let version = match self {
            VersionSpec::Default => Version::parse(family.default_version())
                .map_err(|_| PlatformError::unknown_version(family.name(), family.default_version()))?,
            VersionSpec::Text(text) => Version::parse(text)
                .map_err(|_| PlatformError::unknown_version(family.name(), text.as_str()))?,
            VersionSpec::Number(number) if family.is_mysql_lineage() && *number >= 10_000 => {
                Version::new(number / 10_000, Some(number / 100 % 100), Some(number % 100))
            }
            VersionSpec::Number(number) => Version::new(*number, None, None),
            VersionSpec::Exact(version) => *version,
        };

        if !family.supports_version(&version.major_minor()) {
            return Err(PlatformError::unknown_version(
                family.name(),
                version.to_string(),
            ));
        }
        Ok(version)
    }
}

/// Cache of resolved platforms
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    platforms: Mutex<HashMap<(Family, VersionId), Arc<Platform>>>,
    functions: FunctionRegistry,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry
    pub fn global() -> &'static PlatformRegistry {
        static GLOBAL: OnceLock<PlatformRegistry> = OnceLock::new();
        GLOBAL.get_or_init(PlatformRegistry::new)
    }

    /// Platform for a family name and version
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let registry = PlatformRegistry::new();
    /// let mysql = registry.get("mysql", "8.0")?;
    /// let maria = registry.get("maria", VersionSpec::Default)?;
    /// ```
    pub fn get(
        &self,
        family: &str,
        version: impl Into<VersionSpec>,
    ) -> PlatformResult<Arc<Platform>> {
        let family: Family = family
            .parse()
            .map_err(|_| PlatformError::UnknownFamily(family.trim().to_string()))?;
        self.get_family(family, version)
    }

    pub fn get_family(
        &self,
        family: Family,
        version: impl Into<VersionSpec>,
    ) -> PlatformResult<Arc<Platform>> {
        let version = version.into().resolve(family)?;
        let key = (family, version.id());

        if let Some(platform) = self.lock().get(&key) {
            debug!("Platform cache hit: {} {}", family, key.1);
            return Ok(Arc::clone(platform));
        }

        // built unlocked; a racing build of the same key loses to the first insert
        debug!("Platform cache miss: {} {}", family, key.1);
        let built = Arc::new(Platform::build(family, version, &self.functions)?);

        let mut platforms = self.lock();
        let platform = Arc::clone(platforms.entry(key).or_insert(built));
        info!("Registered platform {} ({} cached)", platform, platforms.len());
        Ok(platform)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(Family, VersionId), Arc<Platform>>> {
        match self.platforms.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Platform for a tag such as `"mysql-8.0"`; the last `-` segment is the
    /// version
    pub fn from_tag(&self, family: &str, tag: &str) -> PlatformResult<Arc<Platform>> {
        let version = tag.rsplit('-').next().unwrap_or(tag);
        self.get(family, version)
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Number of cached platforms
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
