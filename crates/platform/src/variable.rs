// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # System variables
//!
//! A [`SystemVariable`] describes one server variable as it exists in a given
//! version range. A variable whose default changed between versions appears
//! once per range in the master table.

use serde::Serialize;

/// Value type of a system variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariableType {
    Bool,
    Int,
    UnsignedInt,
    Float,
    Str,
    Enum,
    Set,
    Charset,
    Collation,
}

/// Where a variable can be set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariableScope {
    Global,
    Session,
    Both,
}

impl VariableScope {
    pub fn has_global(self) -> bool {
        matches!(self, VariableScope::Global | VariableScope::Both)
    }

    pub fn has_session(self) -> bool {
        matches!(self, VariableScope::Session | VariableScope::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SystemVariable {
    /// Variable name (lower case)
    pub name: &'static str,
    pub var_type: VariableType,
    pub scope: VariableScope,
    /// Whether the variable can be changed at runtime
    pub dynamic: bool,
    /// Compiled-in default, as SQL text without quotes
    pub default: &'static str,
}

impl SystemVariable {
    pub const fn new(
        name: &'static str,
        var_type: VariableType,
        scope: VariableScope,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            var_type,
            scope,
            dynamic: true,
            default,
        }
    }

    /// Builder method: mark as read-only at runtime
    pub const fn read_only(mut self) -> Self {
        self.dynamic = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope() {
        assert!(VariableScope::Global.has_global());
        assert!(!VariableScope::Global.has_session());
        assert!(VariableScope::Session.has_session());
        assert!(!VariableScope::Session.has_global());
        assert!(VariableScope::Both.has_global() && VariableScope::Both.has_session());
    }

    #[test]
    fn test_read_only() {
        let variable = SystemVariable::new(
            "port",
            VariableType::UnsignedInt,
            VariableScope::Global,
            "3306",
        );
        assert!(variable.dynamic);
        assert!(!variable.read_only().dynamic);
    }
}
