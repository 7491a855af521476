// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin SQL function definitions
//!
//! Each module holds one version-ranged master table. MariaDB's table only
//! lists what it adds on top of the MySQL functions it inherits.

pub mod mariadb;
pub mod mysql;
