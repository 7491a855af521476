// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Function Registry
//!
//! This crate provides the builtin function master tables for the MySQL
//! lineage and resolves them for a concrete family and version.
//!
//! ## Features
//!
//! - Version-ranged function definitions for MySQL and MariaDB
//! - MariaDB resolves the MySQL table at its compatibility baseline plus its own overlay
//! - Re-exports metadata types from the ir crate
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unified_sql_function_registry::{Family, FunctionRegistry, Version};
//!
//! let registry = FunctionRegistry::new();
//! let funcs = registry.functions_for(Family::MySql, Version::parse("8.0")?.id());
//! ```

pub mod builtin;
pub mod registry;

// Re-exports from ir for convenience
pub use unified_sql_ir::{BaseType, Family, FunctionMetadata, FunctionType, Version, VersionId};

pub use registry::FunctionRegistry;
