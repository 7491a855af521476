// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Statements permitted inside `PREPARE`

use unified_sql_ir::{CapabilityEntry, CapabilityTable};

type Cmd = CapabilityEntry<&'static str>;

pub const PREPARABLE: CapabilityTable<&'static str> = &[
    Cmd::always("ALTER TABLE"),
    Cmd::always("ANALYZE TABLE"),
    Cmd::always("CACHE INDEX"),
    Cmd::always("CALL"),
    Cmd::always("CHECKSUM TABLE"),
    Cmd::always("COMMIT"),
    Cmd::always("CREATE INDEX"),
    Cmd::always("CREATE TABLE"),
    Cmd::always("CREATE USER"),
    Cmd::always("CREATE VIEW"),
    Cmd::always("DELETE"),
    Cmd::always("DO"),
    Cmd::always("DROP INDEX"),
    Cmd::always("DROP TABLE"),
    Cmd::always("DROP USER"),
    Cmd::always("DROP VIEW"),
    Cmd::always("FLUSH"),
    Cmd::always("GRANT"),
    Cmd::always("INSERT"),
    Cmd::always("INSTALL PLUGIN"),
    Cmd::always("KILL"),
    Cmd::always("LOAD INDEX INTO CACHE"),
    Cmd::always("OPTIMIZE TABLE"),
    Cmd::always("RENAME TABLE"),
    Cmd::always("RENAME USER"),
    Cmd::always("REPAIR TABLE"),
    Cmd::always("REPLACE"),
    Cmd::always("RESET"),
    Cmd::always("REVOKE"),
    Cmd::always("SELECT"),
    Cmd::always("SET"),
    Cmd::always("SHOW BINLOG EVENTS"),
    Cmd::always("SHOW CREATE EVENT"),
    Cmd::always("SHOW CREATE FUNCTION"),
    Cmd::always("SHOW CREATE PROCEDURE"),
    Cmd::always("SHOW CREATE TABLE"),
    Cmd::always("SHOW CREATE VIEW"),
    Cmd::always("SHOW ERRORS"),
    Cmd::always("SHOW MASTER LOGS"),
    Cmd::always("SHOW WARNINGS"),
    Cmd::always("TRUNCATE TABLE"),
    Cmd::always("UNINSTALL PLUGIN"),
    Cmd::always("UPDATE"),
    Cmd::until("CHANGE MASTER", 80399),
    Cmd::until("SHOW SLAVE STATUS", 80399),
    Cmd::since("ALTER USER", 50607),
    Cmd::since("CREATE ROLE", 80000),
    Cmd::since("DROP ROLE", 80000),
    Cmd::since("SET ROLE", 80000),
    Cmd::since("SET DEFAULT ROLE", 80000),
    Cmd::since("ANALYZE TABLE UPDATE HISTOGRAM", 80002),
    Cmd::since("CHANGE REPLICATION SOURCE", 80023),
    Cmd::since("SHOW REPLICA STATUS", 80022),
];
