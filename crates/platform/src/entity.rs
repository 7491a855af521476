// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Kinds of named database objects, keyed for name-length limits

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Schema,
    Table,
    Column,
    Index,
    Constraint,
    View,
    Routine,
    Trigger,
    Event,
    Tablespace,
    Partition,
    Savepoint,
    Alias,
    UserVariable,
    ServerName,
    ResourceGroup,
    Role,
    UserName,
    HostName,
    Sequence,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Schema => "schema",
            EntityKind::Table => "table",
            EntityKind::Column => "column",
            EntityKind::Index => "index",
            EntityKind::Constraint => "constraint",
            EntityKind::View => "view",
            EntityKind::Routine => "routine",
            EntityKind::Trigger => "trigger",
            EntityKind::Event => "event",
            EntityKind::Tablespace => "tablespace",
            EntityKind::Partition => "partition",
            EntityKind::Savepoint => "savepoint",
            EntityKind::Alias => "alias",
            EntityKind::UserVariable => "user variable",
            EntityKind::ServerName => "server",
            EntityKind::ResourceGroup => "resource group",
            EntityKind::Role => "role",
            EntityKind::UserName => "user",
            EntityKind::HostName => "host",
            EntityKind::Sequence => "sequence",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
