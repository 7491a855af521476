// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Capability Tables
//!
//! Every version-dependent construct (keyword, operator, type, function,
//! system variable, preparable command, name limit) is described by the same
//! tuple: the value plus the first and last version it exists in. Master
//! tables are compiled-in statics of [`CapabilityEntry`], and
//! [`filter_for_version`] is the only algorithm that reads them.
//!
//! ```rust,ignore
//! static OPERATORS: CapabilityTable<&str> = &[
//!     CapabilityEntry::always("<=>"),
//!     CapabilityEntry::since("->", 50709),
//!     CapabilityEntry::since("MEMBER OF", 80017),
//! ];
//!
//! let ops = filter_for_version(OPERATORS, Version::parse("5.7")?.id());
//! ```

use crate::version::VersionId;

/// A version-ranged master table
pub type CapabilityTable<T> = &'static [CapabilityEntry<T>];

/// A value together with the inclusive version range it is valid in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityEntry<T> {
    pub value: T,
    pub introduced: VersionId,
    pub removed: VersionId,
}

impl<T> CapabilityEntry<T> {
    /// Entry valid from `introduced` to `removed`, both inclusive raw ids
    pub const fn new(value: T, introduced: u32, removed: u32) -> Self {
        Self {
            value,
            introduced: VersionId::from_raw(introduced),
            removed: VersionId::from_raw(removed),
        }
    }

    pub const fn always(value: T) -> Self {
        Self {
            value,
            introduced: VersionId::MIN,
            removed: VersionId::MAX,
        }
    }

    pub const fn since(value: T, introduced: u32) -> Self {
        Self {
            value,
            introduced: VersionId::from_raw(introduced),
            removed: VersionId::MAX,
        }
    }

    pub const fn until(value: T, removed: u32) -> Self {
        Self {
            value,
            introduced: VersionId::MIN,
            removed: VersionId::from_raw(removed),
        }
    }

    pub const fn between(value: T, introduced: u32, removed: u32) -> Self {
        Self::new(value, introduced, removed)
    }

    /// `introduced <= target <= removed`
    pub fn is_active(&self, target: VersionId) -> bool {
        self.introduced <= target && target <= self.removed
    }
}

/// Values of all entries whose range contains `target`, in table order
pub fn filter_for_version<T: Clone>(entries: &[CapabilityEntry<T>], target: VersionId) -> Vec<T> {
    entries
        .iter()
        .filter(|entry| entry.is_active(target))
        .map(|entry| entry.value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[CapabilityEntry<&str>] = &[
        CapabilityEntry::always("SELECT"),
        CapabilityEntry::since("JSON", 50708),
        CapabilityEntry::until("SQL_CACHE", 80002),
        CapabilityEntry::between("TX_ISOLATION", 50100, 80002),
    ];

    #[test]
    fn test_bounds_are_inclusive() {
        let entry = CapabilityEntry::between("X", 50700, 50799);
        assert!(entry.is_active(VersionId::from_raw(50700)));
        assert!(entry.is_active(VersionId::from_raw(50799)));
        assert!(!entry.is_active(VersionId::from_raw(50699)));
        assert!(!entry.is_active(VersionId::from_raw(50800)));
    }

    #[test]
    fn test_filter_by_version() {
        let old = filter_for_version(TABLE, VersionId::from_raw(50699));
        assert_eq!(old, vec!["SELECT", "SQL_CACHE", "TX_ISOLATION"]);

        let new = filter_for_version(TABLE, VersionId::from_raw(80099));
        assert_eq!(new, vec!["SELECT", "JSON"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let all = filter_for_version(TABLE, VersionId::from_raw(50799));
        assert_eq!(all, vec!["SELECT", "JSON", "SQL_CACHE", "TX_ISOLATION"]);
    }
}
