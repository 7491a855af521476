// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Maximum name lengths per entity kind

use crate::entity::EntityKind;
use unified_sql_ir::{CapabilityEntry, CapabilityTable};

use EntityKind::*;

type Limit = CapabilityEntry<(EntityKind, usize)>;

pub const LIMITS: CapabilityTable<(EntityKind, usize)> = &[
    Limit::always((Schema, 64)),
    Limit::always((Table, 64)),
    Limit::always((Column, 64)),
    Limit::always((Index, 64)),
    Limit::always((Constraint, 64)),
    Limit::always((View, 64)),
    Limit::always((Routine, 64)),
    Limit::always((Trigger, 64)),
    Limit::always((Event, 64)),
    Limit::always((Tablespace, 64)),
    Limit::always((Partition, 64)),
    Limit::always((Savepoint, 64)),
    Limit::always((Alias, 256)),
    Limit::always((UserVariable, 64)),
    Limit::always((ServerName, 64)),
    Limit::until((UserName, 16), 50707),
    Limit::since((UserName, 32), 50708),
    Limit::until((HostName, 60), 80016),
    Limit::since((HostName, 255), 80017),
    Limit::since((ResourceGroup, 64), 80003),
    Limit::since((Role, 32), 80000),
];
