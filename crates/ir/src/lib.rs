// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Shared Primitives
//!
//! This crate provides the vocabulary shared by the function registry and the
//! platform crate:
//! - Dialect families and their supported version lists
//! - Version parsing and the comparable version id
//! - Version-ranged capability tables and the generic filter over them
//! - Base data types and builtin function metadata

pub mod capability;
pub mod dialect;
pub mod metadata;
pub mod version;

// Re-export commonly used types
pub use capability::{CapabilityEntry, CapabilityTable, filter_for_version};
pub use dialect::Family;
pub use metadata::{BaseType, FunctionMetadata, FunctionType};
pub use version::{Version, VersionError, VersionId};
