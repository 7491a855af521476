// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::{Family, FunctionMetadata, VersionId, builtin};
use std::collections::HashMap;
use tracing::debug;
use unified_sql_ir::{CapabilityTable, filter_for_version};

/// Function registry for builtin SQL functions
///
/// This struct stores the master function tables per family and resolves
/// them for a concrete version.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    /// Master tables organized by family
    tables: HashMap<Family, CapabilityTable<FunctionMetadata>>,
}

impl FunctionRegistry {
    /// Create a new function registry with all builtin tables loaded
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use unified_sql_function_registry::FunctionRegistry;
    ///
    /// let registry = FunctionRegistry::new();
    /// let funcs = registry.functions_for(Family::MySql, VersionId::from_raw(80099));
    /// ```
    pub fn new() -> Self {
        let mut registry = Self {
            tables: HashMap::new(),
        };

        registry
            .tables
            .insert(Family::MySql, builtin::mysql::FUNCTIONS);
        registry
            .tables
            .insert(Family::MariaDb, builtin::mariadb::FUNCTIONS);

        registry
    }

    /// The family's own master table, without inherited entries
    pub fn master_table(&self, family: Family) -> Option<CapabilityTable<FunctionMetadata>> {
        self.tables.get(&family).copied()
    }

    /// Tables to resolve for `family` at `id`, in override order
    fn layers(
        &self,
        family: Family,
        id: VersionId,
    ) -> Vec<(CapabilityTable<FunctionMetadata>, VersionId)> {
        let mut layers = Vec::new();
        if family != Family::MySql {
            if let (Some(mysql), Some(baseline)) =
                (self.master_table(Family::MySql), family.mysql_baseline(id))
            {
                layers.push((mysql, baseline));
            }
        }
        if let Some(own) = self.master_table(family) {
            layers.push((own, id));
        }
        layers
    }

    /// Get all functions available for `family` at version `id`
    ///
    /// Inherited functions come first; an entry of a later layer replaces an
    /// inherited function of the same name in place. Returns an empty vector
    /// if the family has no tables.
    pub fn functions_for(&self, family: Family, id: VersionId) -> Vec<FunctionMetadata> {
        let mut resolved: Vec<FunctionMetadata> = Vec::new();
        let mut positions: HashMap<&'static str, usize> = HashMap::new();

        for (table, target) in self.layers(family, id) {
            for function in filter_for_version(table, target) {
                match positions.get(function.name) {
                    Some(&index) => resolved[index] = function,
                    None => {
                        positions.insert(function.name, resolved.len());
                        resolved.push(function);
                    }
                }
            }
        }

        debug!(
            "Resolved {} builtin functions for {} at {}",
            resolved.len(),
            family,
            id
        );
        resolved
    }

    /// Lookup a single function by name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let registry = FunctionRegistry::new();
    /// let count = registry.get_function(Family::MySql, VersionId::from_raw(80099), "count");
    /// assert_eq!(count.unwrap().name, "COUNT");
    /// ```
    pub fn get_function(
        &self,
        family: Family,
        id: VersionId,
        name: &str,
    ) -> Option<FunctionMetadata> {
        self.functions_for(family, id)
            .into_iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Check if a function exists for `family` at version `id`
    pub fn has_function(&self, family: Family, id: VersionId, name: &str) -> bool {
        self.get_function(family, id, name).is_some()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
