// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL Platform
//!
//! Dialect and version capability resolution for MySQL-lineage SQL.
//!
//! ## Overview
//!
//! Given a family and a version, a [`Platform`] answers which keywords are
//! reserved and which operators, types, builtin functions, system variables
//! and preparable commands exist. It also knows the default SQL mode, the
//! naming conventions and how versioned executable comments are gated.
//!
//! ## Components
//!
//! - [`PlatformRegistry`]: memoized `(family, version)` lookup
//! - [`SqlMode`] / [`ModeFlag`]: SQL mode bit sets and compatibility groups
//! - [`Charset`] / [`Collation`]: closed character set catalog
//! - [`PlatformSettings`] / [`Formatter`]: serialization preferences
//! - [`NamingStrategy`]: identifier conventions per family
//! - [`SettingsConfig`]: JSON/YAML session configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use unified_sql_platform::PlatformRegistry;
//!
//! let registry = PlatformRegistry::new();
//! let mysql = registry.get("mysql", "8.0")?;
//! assert!(mysql.is_reserved("select"));
//! assert!(mysql.interpret_optional_comment("50708"));
//! ```

pub mod charset;
pub mod collation;
pub mod config;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod naming;
pub mod platform;
pub mod registry;
pub mod settings;
pub mod sql_mode;
pub mod tables;
pub mod variable;

// Re-export commonly used types
pub use charset::Charset;
pub use collation::Collation;
pub use config::SettingsConfig;
pub use entity::EntityKind;
pub use error::{PlatformError, PlatformResult};
pub use formatter::{Formatter, SqlSerialize};
pub use naming::{MariaDbNaming, MySqlNaming, NamingStrategy, StandardNaming};
pub use platform::Platform;
pub use registry::{PlatformRegistry, VersionSpec};
pub use settings::PlatformSettings;
pub use sql_mode::{ModeFlag, SqlMode};
pub use variable::{SystemVariable, VariableScope, VariableType};

pub use unified_sql_ir::{BaseType, Family, FunctionMetadata, Version, VersionId};
